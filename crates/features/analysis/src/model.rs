//! Wire models shared by the HTTP handler and the CLI's JSON output.

use crate::report::AnalysisReport;
use curp_derive::api_model;

#[api_model]
/// CURP submitted for analysis
pub struct AnalyzeRequest {
    /// Free-form input; surrounding whitespace is trimmed and letters are uppercased
    pub curp: String,
}

#[api_model(rename_all = "snake_case")]
/// Field breakdown and verdict for one CURP
pub struct AnalyzeResponse {
    /// Field values in positional order, empty when the shape check fails
    pub tokens: Vec<String>,
    /// One description per entry in `tokens`
    #[serde(rename = "descripcion", alias = "description")]
    pub descriptions: Vec<String>,
    /// Verdict message
    #[serde(rename = "mensaje", alias = "message")]
    pub message: String,
    /// Numeric characters in the normalized input
    #[serde(rename = "total_numeros")]
    pub total_digits: usize,
    /// Alphabetic characters in the normalized input
    #[serde(rename = "total_letras")]
    pub total_letters: usize,
}

impl From<AnalysisReport> for AnalyzeResponse {
    fn from(report: AnalysisReport) -> Self {
        Self {
            message: report.message().to_owned(),
            tokens: report.tokens,
            descriptions: report.descriptions,
            total_digits: report.total_digits,
            total_letters: report.total_letters,
        }
    }
}
