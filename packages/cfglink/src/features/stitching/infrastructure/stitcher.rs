//! Edge stitcher
//!
//! Computes each guard's global base index as the running total of guard
//! sizes in table order, then shifts every local edge of every resolved
//! function by its guard's base. Unresolved guards still occupy their place
//! in the linearization; with no attributed size they contribute zero to
//! the running total and emit no edges.

use std::io::Write;
use std::path::Path;

use indexmap::IndexMap;
use tracing::{debug, warn};

use crate::errors::{CfgLinkError, Result};
use crate::features::resolution::domain::Resolution;
use crate::shared::models::{GlobalEdge, GraphStore, GuardTable};

/// Global base index of every guard, in table order. Non-decreasing by
/// construction.
pub fn compute_offsets(order: &[String], resolution: &Resolution) -> IndexMap<String, u64> {
    let mut offsets = IndexMap::with_capacity(order.len());
    let mut running = 0u64;
    for base in order {
        offsets.insert(base.clone(), running);
        running += resolution.size_of(base);
    }
    offsets
}

pub struct EdgeStitcher;

impl EdgeStitcher {
    pub fn new() -> Self {
        Self
    }

    /// Emit the flat whole-program edge list, sentinel last.
    ///
    /// `total_edges` is the introspector's instrumented-edge count; it
    /// becomes the `(n, n)` sentinel bounding the valid global-index range.
    pub fn stitch(
        &self,
        store: &GraphStore,
        table: &GuardTable,
        resolution: &Resolution,
        total_edges: u64,
    ) -> Vec<GlobalEdge> {
        let offsets = compute_offsets(&table.order, resolution);

        let mut output = Vec::new();
        for base in &table.order {
            let Some(function) = resolution.guard_to_fn.get(base) else {
                continue;
            };
            let offset = offsets[base];

            let Some(blocks) = store.edges.get(function) else {
                warn!(%function, "function has call sites but no successor lists");
                continue;
            };
            for (block, successors) in blocks.iter().enumerate() {
                let source = block as u64 + offset;
                for &successor in successors {
                    output.push(GlobalEdge::new(source, successor as u64 + offset));
                }
            }
        }

        output.push(GlobalEdge::sentinel(total_edges));
        debug!(edges = output.len() - 1, sentinel = total_edges, "stitched");
        output
    }

    /// Write the edge list, one edge per line, atomically.
    pub fn write_edge_list(&self, path: &Path, edges: &[GlobalEdge]) -> Result<()> {
        let dir = path.parent().filter(|p| !p.as_os_str().is_empty());
        let mut tmp = match dir {
            Some(dir) => tempfile::NamedTempFile::new_in(dir),
            None => tempfile::NamedTempFile::new_in("."),
        }
        .map_err(|e| CfgLinkError::io(path, e))?;

        for edge in edges {
            writeln!(tmp, "{edge}").map_err(|e| CfgLinkError::io(path, e))?;
        }
        tmp.persist(path)
            .map_err(|e| CfgLinkError::io(path, e.error))?;
        Ok(())
    }
}

impl Default for EdgeStitcher {
    fn default() -> Self {
        Self::new()
    }
}
