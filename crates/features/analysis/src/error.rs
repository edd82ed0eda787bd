use std::borrow::Cow;

/// Errors of the analysis slice.
///
/// `Shape` never escapes [`crate::analyze_curp`]: the orchestrator turns it into
/// [`crate::Outcome::ShapeError`]. It is public so callers that only need the
/// precondition can use [`crate::RawCode::parse`] directly.
#[curp_derive::curp_error]
pub enum AnalysisError {
    /// The input is not 18 uppercase alphanumeric characters.
    #[error("Malformed CURP{}: {message}", format_context(.context))]
    Shape { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// Service wiring failures (e.g. the analyzer slice is not registered).
    #[error("Internal analysis error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
