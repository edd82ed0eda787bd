use anyhow::Result;
use curp::features::analysis::{AnalysisReport, AnalyzeResponse};
use std::io::Write;

/// Output flavour selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Format {
    Text,
    Json { pretty: bool },
}

pub(crate) fn write_report(out: &mut impl Write, report: &AnalysisReport, format: Format) -> Result<()> {
    match format {
        Format::Text => write_text(out, report)?,
        Format::Json { pretty } => {
            let body = AnalyzeResponse::from(report.clone());
            if pretty {
                serde_json::to_writer_pretty(&mut *out, &body)?;
            } else {
                serde_json::to_writer(&mut *out, &body)?;
            }
            writeln!(out)?;
        },
    }
    Ok(())
}

fn write_text(out: &mut impl Write, report: &AnalysisReport) -> std::io::Result<()> {
    writeln!(out, "{}: {}", report.normalized, report.message())?;
    for (token, description) in report.tokens.iter().zip(&report.descriptions) {
        writeln!(out, "  {token:<4}{description}")?;
    }
    writeln!(out, "  letters: {}, digits: {}", report.total_letters, report.total_digits)
}
