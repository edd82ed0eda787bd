//! `curp`: analyze CURP codes from the command line.

mod render;

use crate::render::{Format, write_report};
use anyhow::Context;
use clap::Parser;
use curp::features::analysis::Analyzer;
use curp_logger::{LevelFilter, Logger};
use std::io::Write;
use std::process::ExitCode;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::debug;

/// Validate CURP codes and break them into their fields.
///
/// Reads one code per line from stdin when no code is given. Exits with status 1 when
/// any code is not a valid CURP.
#[derive(Debug, Parser)]
#[command(name = "curp", version, about)]
struct Args {
    /// Codes to analyze
    codes: Vec<String>,

    /// Print each result as a JSON object
    #[arg(long)]
    json: bool,

    /// Indent JSON output
    #[arg(long, requires = "json")]
    pretty: bool,

    /// Log to stderr (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Args {
    const fn format(&self) -> Format {
        if self.json { Format::Json { pretty: self.pretty } } else { Format::Text }
    }

    const fn level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::WARN,
            1 => LevelFilter::INFO,
            _ => LevelFilter::DEBUG,
        }
    }
}

#[curp_runtime::main(memory_efficient)]
async fn main() -> anyhow::Result<ExitCode> {
    let args = Args::parse();

    let _log = Logger::builder()
        .name(env!("CARGO_PKG_NAME"))
        .level(args.level())
        .stderr(true)
        .init()
        .context("Failed to initialize logging")?;

    let codes = if args.codes.is_empty() { read_stdin().await? } else { args.codes.clone() };

    let analyzer = Analyzer::default();
    let format = args.format();
    let mut out = std::io::stdout().lock();
    let mut all_valid = true;

    for code in &codes {
        let report = analyzer.analyze(code);
        debug!(outcome = report.outcome.as_str(), "CURP analyzed");
        all_valid &= report.outcome.is_valid();
        write_report(&mut out, &report, format)?;
    }
    out.flush()?;

    Ok(if all_valid { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}

/// Non-blank stdin lines.
async fn read_stdin() -> anyhow::Result<Vec<String>> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut codes = Vec::new();
    while let Some(line) = lines.next_line().await.context("Failed to read stdin")? {
        if !line.trim().is_empty() {
            codes.push(line);
        }
    }
    Ok(codes)
}
