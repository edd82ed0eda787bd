use crate::code::RawCode;
use crate::entities::EntityTable;
use std::ops::Range;

/// Number of fields a CURP splits into.
pub const FIELD_COUNT: usize = 12;

/// Marker at position 10 for male registrants. Every other value reads as female.
pub const MALE_MARKER: char = 'H';

/// One positional field of a CURP.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    PaternalSurname,
    MaternalSurname,
    GivenNameInitial,
    BirthYear,
    BirthMonth,
    BirthDay,
    Sex,
    BirthEntity,
    PaternalConsonant,
    MaternalConsonant,
    GivenNameConsonant,
    Homoclave,
}

impl Field {
    /// Fields in positional order.
    pub const ALL: [Self; FIELD_COUNT] = [
        Self::PaternalSurname,
        Self::MaternalSurname,
        Self::GivenNameInitial,
        Self::BirthYear,
        Self::BirthMonth,
        Self::BirthDay,
        Self::Sex,
        Self::BirthEntity,
        Self::PaternalConsonant,
        Self::MaternalConsonant,
        Self::GivenNameConsonant,
        Self::Homoclave,
    ];

    /// Character range of the field. The spans tile `0..18` without gaps.
    #[must_use]
    pub const fn span(self) -> Range<usize> {
        match self {
            Self::PaternalSurname => 0..2,
            Self::MaternalSurname => 2..3,
            Self::GivenNameInitial => 3..4,
            Self::BirthYear => 4..6,
            Self::BirthMonth => 6..8,
            Self::BirthDay => 8..10,
            Self::Sex => 10..11,
            Self::BirthEntity => 11..13,
            Self::PaternalConsonant => 13..14,
            Self::MaternalConsonant => 14..15,
            Self::GivenNameConsonant => 15..16,
            Self::Homoclave => 16..18,
        }
    }

    /// Fixed description. [`Field::Sex`] and [`Field::BirthEntity`] are described by
    /// their value instead; see [`decompose`].
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::PaternalSurname => "Paternal surname",
            Self::MaternalSurname => "Maternal surname",
            Self::GivenNameInitial => "Given name initial",
            Self::BirthYear => "Birth year",
            Self::BirthMonth => "Birth month",
            Self::BirthDay => "Birth day",
            Self::Sex => "Sex",
            Self::BirthEntity => "Birth entity",
            Self::PaternalConsonant => "Paternal surname internal consonant",
            Self::MaternalConsonant => "Maternal surname internal consonant",
            Self::GivenNameConsonant => "Given name internal consonant",
            Self::Homoclave => "Homoclave (RENAPO)",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    #[must_use]
    pub const fn from_marker(marker: char) -> Self {
        if marker == MALE_MARKER { Self::Male } else { Self::Female }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
        }
    }
}

/// Field substrings in positional order. Concatenated they rebuild the input.
pub type FieldSet<'a> = [&'a str; FIELD_COUNT];

/// One human-readable description per field.
pub type DescriptionSet = [&'static str; FIELD_COUNT];

/// A CURP split into its fields, each paired with a description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decomposition<'a> {
    pub fields: FieldSet<'a>,
    pub descriptions: DescriptionSet,
}

impl<'a> Decomposition<'a> {
    #[must_use]
    pub const fn field(&self, field: Field) -> &'a str {
        self.fields[field as usize]
    }

    #[must_use]
    pub const fn description(&self, field: Field) -> &'static str {
        self.descriptions[field as usize]
    }

    #[must_use]
    pub fn sex(&self) -> Sex {
        Sex::from_marker(self.field(Field::Sex).chars().next().unwrap_or_default())
    }

    /// `(field, value, description)` in positional order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &'a str, &'static str)> + '_ {
        Field::ALL.into_iter().map(|f| (f, self.field(f), self.description(f)))
    }
}

/// Splits `code` at the fixed offsets and describes each piece.
///
/// Total for any [`RawCode`]: an unknown entity code yields
/// [`crate::entities::UNKNOWN_ENTITY`] and any sex marker other than `H` reads as
/// female.
#[must_use]
pub fn decompose<'a>(code: RawCode<'a>, entities: &EntityTable) -> Decomposition<'a> {
    let fields = Field::ALL.map(|field| code.slice(field.span()));
    let descriptions = Field::ALL.map(|field| match field {
        Field::Sex => Sex::from_marker(code.char_at(field.span().start)).label(),
        Field::BirthEntity => entities.describe(code.slice(field.span())),
        other => other.label(),
    });

    Decomposition { fields, descriptions }
}
