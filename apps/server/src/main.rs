use anyhow::Context;
use clap::Parser;
use curp::domain::config::ApiConfig;
use curp::kernel::config::load_config;
use curp_server::{Server, init_logging};
use std::path::PathBuf;

#[cfg(feature = "profiling")]
#[global_allocator]
static ALLOC: dhat::Alloc = dhat::Alloc;

/// CURP analyzer HTTP service.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Config file; defaults to an optional `server.{toml,yaml,json}` in the working directory
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[curp_runtime::main(high_performance)]
async fn main() -> anyhow::Result<()> {
    #[cfg(feature = "profiling")]
    let _profiler = dhat::Profiler::new_heap();

    let args = Args::parse();

    let cfg: ApiConfig =
        load_config(args.config.as_deref()).context("Critical: Configuration is malformed")?;

    let _log = init_logging(&cfg.logging)?;

    Server::builder().config(cfg).build()?.run().await
}
