//! Orchestration: shape check, decomposition and recognition folded into one result.

use crate::code::RawCode;
use crate::decomposer::{Decomposition, decompose};
use crate::entities::EntityTable;
use crate::grammar::recognize;
use tracing::trace;

pub const SHAPE_MESSAGE: &str =
    "The CURP is invalid: it must be exactly 18 uppercase alphanumeric characters.";
pub const MISMATCH_MESSAGE: &str = "The CURP has an incorrect format.";
pub const VALID_MESSAGE: &str = "The CURP is valid, correct format.";

/// Final classification of an input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Failed the shape precondition. Nothing was decomposed.
    ShapeError,
    /// Decomposed, but the recognizer rejected the token stream.
    GrammarMismatch,
    /// Decomposed and accepted.
    Valid,
}

impl Outcome {
    /// User-facing message. Each outcome maps to exactly one message.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::ShapeError => SHAPE_MESSAGE,
            Self::GrammarMismatch => MISMATCH_MESSAGE,
            Self::Valid => VALID_MESSAGE,
        }
    }

    #[must_use]
    pub const fn is_valid(self) -> bool {
        matches!(self, Self::Valid)
    }

    /// Stable identifier for logs and machine output.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ShapeError => "shape_error",
            Self::GrammarMismatch => "grammar_mismatch",
            Self::Valid => "valid",
        }
    }
}

/// Result of [`analyze_curp`], borrowing field values from the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Analysis<'a> {
    decomposition: Option<Decomposition<'a>>,
    outcome: Outcome,
}

impl<'a> Analysis<'a> {
    #[must_use]
    pub const fn outcome(&self) -> Outcome {
        self.outcome
    }

    #[must_use]
    pub const fn message(&self) -> &'static str {
        self.outcome.message()
    }

    /// `None` exactly when the outcome is [`Outcome::ShapeError`].
    #[must_use]
    pub const fn decomposition(&self) -> Option<&Decomposition<'a>> {
        self.decomposition.as_ref()
    }

    /// Field values, empty on a shape error.
    #[must_use]
    pub fn tokens(&self) -> &[&'a str] {
        self.decomposition.as_ref().map(|d| d.fields.as_slice()).unwrap_or_default()
    }

    /// Field descriptions, empty on a shape error.
    #[must_use]
    pub fn descriptions(&self) -> &[&'static str] {
        self.decomposition.as_ref().map(|d| d.descriptions.as_slice()).unwrap_or_default()
    }
}

/// Analyzes `code` exactly as given. Callers that accept free-form input should go
/// through [`analyze`], which trims and uppercases first.
///
/// # Examples
/// ```rust
/// use curp_analysis::{analyze_curp, Outcome};
///
/// let analysis = analyze_curp("GOMJ800101HDFRRL01");
/// assert_eq!(analysis.outcome(), Outcome::Valid);
/// assert_eq!(analysis.tokens()[7], "DF");
///
/// assert_eq!(analyze_curp("gomj800101hdfrrl01").outcome(), Outcome::ShapeError);
/// ```
#[must_use]
pub fn analyze_curp(code: &str) -> Analysis<'_> {
    analyze_curp_with(code, EntityTable::global())
}

/// [`analyze_curp`] against a specific entity table.
#[must_use]
pub fn analyze_curp_with<'a>(code: &'a str, entities: &EntityTable) -> Analysis<'a> {
    let raw = match RawCode::parse(code) {
        Ok(raw) => raw,
        Err(err) => {
            trace!(error = %err, "Shape check failed");
            return Analysis { decomposition: None, outcome: Outcome::ShapeError };
        },
    };

    let decomposition = decompose(raw, entities);
    let outcome = if recognize(raw.as_str()).is_accepted() {
        Outcome::Valid
    } else {
        Outcome::GrammarMismatch
    };

    Analysis { decomposition: Some(decomposition), outcome }
}

/// Owned analysis of free-form input, with character statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisReport {
    /// Input after trimming and uppercasing.
    pub normalized: String,
    pub tokens: Vec<String>,
    pub descriptions: Vec<String>,
    pub outcome: Outcome,
    /// Alphabetic characters in `normalized`, Unicode-aware.
    pub total_letters: usize,
    /// Numeric characters in `normalized`, Unicode-aware.
    pub total_digits: usize,
}

impl AnalysisReport {
    #[must_use]
    pub const fn message(&self) -> &'static str {
        self.outcome.message()
    }
}

/// Trims surrounding whitespace and uppercases with full Unicode case mapping.
#[must_use]
pub fn normalize(input: &str) -> String {
    input.trim().to_uppercase()
}

/// Normalizes `input`, analyzes it and counts its letters and digits.
///
/// The counts cover the normalized string whatever the outcome, so a shape error
/// still reports them.
///
/// # Examples
/// ```rust
/// use curp_analysis::{analyze, Outcome};
///
/// let report = analyze("  gomj800101hdfrrl01 ");
/// assert_eq!(report.normalized, "GOMJ800101HDFRRL01");
/// assert_eq!(report.outcome, Outcome::Valid);
/// assert_eq!((report.total_letters, report.total_digits), (10, 8));
/// ```
#[must_use]
pub fn analyze(input: &str) -> AnalysisReport {
    analyze_with(input, EntityTable::global())
}

/// [`analyze`] against a specific entity table.
#[must_use]
pub fn analyze_with(input: &str, entities: &EntityTable) -> AnalysisReport {
    let normalized = normalize(input);
    let total_letters = normalized.chars().filter(|c| c.is_alphabetic()).count();
    let total_digits = normalized.chars().filter(|c| c.is_numeric()).count();

    let analysis = analyze_curp_with(&normalized, entities);
    let outcome = analysis.outcome();
    let tokens = analysis.tokens().iter().map(|t| (*t).to_owned()).collect();
    let descriptions = analysis.descriptions().iter().map(|d| (*d).to_owned()).collect();

    AnalysisReport { normalized, tokens, descriptions, outcome, total_letters, total_digits }
}
