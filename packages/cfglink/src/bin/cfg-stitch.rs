//! Edge stitcher CLI
//!
//! Reconciles a merged graph store with the linked binary's guard table
//! and writes the whole-program edge list consumed by the fuzzer.
//!
//! # Usage
//!
//! ```bash
//! # Edge count probed from the binary's pc-table section (readelf)
//! cfg-stitch --cfg fuzz_target.cfg --guards fuzz_target.csv \
//!            --binary fuzz_target -o fuzz_target_cfg
//!
//! # Edge count supplied directly
//! cfg-stitch --cfg fuzz_target.cfg --guards fuzz_target.csv \
//!            --edge-count 82 -o fuzz_target_cfg
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::error;

use cfglink::{
    CfgLinkError, EdgeCountProbe, FixedEdgeCount, SancovSectionProbe, StitchRequest, StitchService,
};

#[derive(Parser)]
#[command(name = "cfg-stitch")]
#[command(about = "Stitch a merged CFG store into a flat global edge list", long_about = None)]
struct Cli {
    /// Merged graph store document (cfg-ld output)
    #[arg(long)]
    cfg: PathBuf,

    /// Guard table file
    #[arg(long)]
    guards: PathBuf,

    /// Linked binary to probe for the instrumented-edge count
    #[arg(long, conflicts_with = "edge_count")]
    binary: Option<PathBuf>,

    /// Instrumented-edge count, supplied directly
    #[arg(long)]
    edge_count: Option<u64>,

    /// Edge-list output path
    #[arg(short, long)]
    output: PathBuf,

    /// Fail on a guard-layout mismatch instead of warning
    #[arg(long)]
    strict: bool,
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
            error!("cfg-stitch: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> cfglink::Result<()> {
    let probe: Box<dyn EdgeCountProbe> = match (cli.edge_count, &cli.binary) {
        (Some(count), _) => Box::new(FixedEdgeCount(count)),
        (None, Some(binary)) => Box::new(SancovSectionProbe::new(binary)),
        (None, None) => {
            return Err(CfgLinkError::usage(
                "one of --edge-count or --binary is required",
            ))
        }
    };

    let service = StitchService::new(StitchRequest {
        cfg: cli.cfg,
        guards: cli.guards,
        output: cli.output,
        strict: cli.strict,
    });
    service.execute(probe.as_ref())?;
    Ok(())
}
