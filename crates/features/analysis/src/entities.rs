//! Federal entity codes found at positions 11-12 of a CURP.

use fxhash::FxHashMap;
use std::sync::LazyLock;

/// Label used for codes that are not in [`ENTITIES`].
pub const UNKNOWN_ENTITY: &str = "UNKNOWN ENTITY";

/// Code of the sentinel entity for people born outside Mexico.
pub const FOREIGN_BORN: &str = "NE";

/// Every birth-entity code with its registry name.
pub const ENTITIES: [(&str, &str); 33] = [
    ("AS", "AGUASCALIENTES"),
    ("BC", "BAJA CALIFORNIA"),
    ("BS", "BAJA CALIFORNIA SUR"),
    ("CC", "CAMPECHE"),
    ("CL", "COAHUILA"),
    ("CM", "COLIMA"),
    ("CS", "CHIAPAS"),
    ("CH", "CHIHUAHUA"),
    ("DF", "DISTRITO FEDERAL"),
    ("DG", "DURANGO"),
    ("GT", "GUANAJUATO"),
    ("GR", "GUERRERO"),
    ("HG", "HIDALGO"),
    ("JC", "JALISCO"),
    ("MC", "MÉXICO"),
    ("MN", "MICHOACÁN"),
    ("MS", "MORELOS"),
    ("NT", "NAYARIT"),
    ("NL", "NUEVO LEÓN"),
    ("OC", "OAXACA"),
    ("PL", "PUEBLA"),
    ("QT", "QUERÉTARO"),
    ("QR", "QUINTANA ROO"),
    ("SP", "SAN LUIS POTOSÍ"),
    ("SL", "SINALOA"),
    ("SR", "SONORA"),
    ("TC", "TABASCO"),
    ("TS", "TAMAULIPAS"),
    ("TL", "TLAXCALA"),
    ("VZ", "VERACRUZ"),
    ("YN", "YUCATÁN"),
    ("ZS", "ZACATECAS"),
    (FOREIGN_BORN, "NACIDO EN EL EXTRANJERO"),
];

static GLOBAL: LazyLock<EntityTable> = LazyLock::new(|| EntityTable::from_pairs(ENTITIES));

/// Read-only index over [`ENTITIES`].
#[derive(Debug)]
pub struct EntityTable {
    by_code: FxHashMap<&'static str, &'static str>,
}

impl EntityTable {
    /// The process-wide table, built on first use.
    pub fn global() -> &'static Self {
        &GLOBAL
    }

    fn from_pairs(pairs: impl IntoIterator<Item = (&'static str, &'static str)>) -> Self {
        Self { by_code: pairs.into_iter().collect() }
    }

    #[must_use]
    pub fn name(&self, code: &str) -> Option<&'static str> {
        self.by_code.get(code).copied()
    }

    /// Name of `code`, or [`UNKNOWN_ENTITY`].
    #[must_use]
    pub fn describe(&self, code: &str) -> &'static str {
        self.name(code).unwrap_or(UNKNOWN_ENTITY)
    }

    #[must_use]
    pub fn contains(&self, code: &str) -> bool {
        self.by_code.contains_key(code)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.by_code.len()
    }
}

/// Shorthand for `EntityTable::global().describe(code)`.
#[must_use]
pub fn describe_entity(code: &str) -> &'static str {
    EntityTable::global().describe(code)
}
