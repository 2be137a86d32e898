//! CFG fragment linker CLI
//!
//! Links the per-object `.cfg` documents written by the instrumentation
//! pass into a single merged store, drop-in alongside the ordinary link
//! step.
//!
//! # Usage
//!
//! ```bash
//! cfg-ld target1.o.cfg target2.o.cfg -o fuzz_target.cfg
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::error;

use cfglink::shared::constants::DEFAULT_LINK_OUTPUT;
use cfglink::{CfgLinkError, LinkService};

#[derive(Parser)]
#[command(name = "cfg-ld")]
#[command(about = "Link per-object CFG fragments into one graph store", long_about = None)]
struct Cli {
    /// Fragment files, linked in the order given
    inputs: Vec<PathBuf>,

    /// Merged output path
    #[arg(short, long, default_value = DEFAULT_LINK_OUTPUT)]
    output: PathBuf,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .without_time()
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("cfg-ld: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> cfglink::Result<()> {
    if cli.inputs.is_empty() {
        return Err(CfgLinkError::usage("no input files"));
    }
    LinkService::new(cli.inputs, cli.output).execute()?;
    Ok(())
}
