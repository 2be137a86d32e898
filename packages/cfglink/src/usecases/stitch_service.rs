//! Stitch Service - resolve guards and emit the whole-program edge list

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::errors::{CfgLinkError, Result};
use crate::features::resolution::domain::LayoutMismatch;
use crate::features::resolution::infrastructure::{read_guard_table, GuardResolver};
use crate::features::stitching::infrastructure::EdgeStitcher;
use crate::features::stitching::ports::EdgeCountProbe;
use crate::shared::models::GraphStore;

/// Inputs of one stitching run.
#[derive(Debug, Clone)]
pub struct StitchRequest {
    /// Merged graph store document (the linker's output).
    pub cfg: PathBuf,
    /// Guard table file.
    pub guards: PathBuf,
    /// Edge-list artifact path.
    pub output: PathBuf,
    /// Turn a guard-layout mismatch into a fatal error instead of a warning.
    pub strict: bool,
}

/// Result of one stitching run.
#[derive(Debug)]
pub struct StitchSummary {
    /// Edges emitted, sentinel excluded.
    pub edges: usize,
    /// Guards the table names that matched no function.
    pub unresolved: usize,
    /// The sentinel value (total instrumented-edge count).
    pub sentinel: u64,
    /// Layout disagreement between guard table and store, if any.
    pub mismatch: Option<LayoutMismatch>,
}

/// Runs the resolve-then-stitch half of the pipeline over a merged store.
pub struct StitchService {
    request: StitchRequest,
}

impl StitchService {
    pub fn new(request: StitchRequest) -> Self {
        Self { request }
    }

    pub fn execute(&self, probe: &dyn EdgeCountProbe) -> Result<StitchSummary> {
        let store = load_store(&self.request.cfg)?;
        let table = read_guard_table(&self.request.guards)?;
        let total_edges = probe.edge_count()?;

        let resolution = GuardResolver::new().resolve(&store, &table);

        let mismatch = resolution.layout_mismatch();
        if let Some(mismatch) = mismatch {
            if self.request.strict {
                return Err(CfgLinkError::GuardLayout(format!(
                    "consumed {} of {} guard records ({mismatch:?})",
                    resolution.consumed, resolution.total_records
                )));
            }
        }

        let unresolved = resolution.unresolved(&table.order);
        if !unresolved.is_empty() {
            warn!(count = unresolved.len(), "guards without a matching function");
        }

        let stitcher = EdgeStitcher::new();
        let edges = stitcher.stitch(&store, &table, &resolution, total_edges);
        stitcher.write_edge_list(&self.request.output, &edges)?;

        let summary = StitchSummary {
            edges: edges.len() - 1,
            unresolved: unresolved.len(),
            sentinel: total_edges,
            mismatch,
        };
        info!(
            output = %self.request.output.display(),
            edges = summary.edges,
            sentinel = summary.sentinel,
            "stitch finished"
        );
        Ok(summary)
    }
}

/// Parse a merged store document. Same boundary validation as fragments;
/// errors carry the path.
fn load_store(path: &Path) -> Result<GraphStore> {
    let text = fs::read_to_string(path).map_err(|e| CfgLinkError::io(path, e))?;
    serde_json::from_str(&text).map_err(|e| CfgLinkError::parse(path, e))
}
