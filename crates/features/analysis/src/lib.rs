//! CURP analysis feature slice.
//!
//! A CURP is checked in three stages:
//! 1. [`RawCode::parse`] enforces the shape (18 characters, `A`-`Z`/`0`-`9`).
//! 2. [`decomposer::decompose`] splits it into twelve positional fields and describes
//!    each one, resolving the sex marker and the birth entity.
//! 3. [`grammar::recognize`] runs the token stream through the format grammar.
//!
//! [`analyze_curp`] folds the three into an [`Analysis`]; [`analyze`] normalizes free-form
//! input first and adds character statistics.
//!
//! With the `server` feature the slice also exposes `POST /analizar` through
//! [`api::router`].

#[cfg(feature = "server")]
pub mod api;
pub mod code;
pub mod decomposer;
pub mod entities;
mod error;
pub mod grammar;
pub mod model;
pub mod report;

pub use crate::code::{CURP_LEN, RawCode};
pub use crate::decomposer::{Decomposition, Field, Sex};
pub use crate::entities::EntityTable;
pub use crate::error::{AnalysisError, AnalysisErrorExt};
pub use crate::model::{AnalyzeRequest, AnalyzeResponse};
pub use crate::report::{Analysis, AnalysisReport, Outcome, analyze, analyze_curp};

#[cfg(feature = "server")]
use curp_kernel::domain::registry::InitializedSlice;

/// Analysis feature state.
#[curp_derive::curp_slice]
pub struct Analyzer {
    entities: &'static EntityTable,
}

impl Analyzer {
    /// See [`analyze`].
    #[must_use]
    pub fn analyze(&self, input: &str) -> AnalysisReport {
        report::analyze_with(input, self.entities)
    }

    /// See [`analyze_curp`].
    #[must_use]
    pub fn analyze_curp<'a>(&self, code: &'a str) -> Analysis<'a> {
        report::analyze_curp_with(code, self.entities)
    }

    #[must_use]
    pub fn entities(&self) -> &'static EntityTable {
        self.entities
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new(AnalyzerInner { entities: EntityTable::global() })
    }
}

/// Initialize the analysis feature.
///
/// # Errors
/// Infallible for now.
#[cfg(feature = "server")]
pub fn init() -> Result<InitializedSlice, AnalysisError> {
    let analyzer = Analyzer::default();
    tracing::info!(entities = analyzer.entities().len(), "Analysis server slice initialized");

    Ok(InitializedSlice::new(analyzer))
}
