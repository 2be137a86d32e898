//! Fragment linker
//!
//! Accumulates parsed CFG fragments into one [`GraphStore`] and emits the
//! merged document. Merge rules per map:
//!
//! - `calls`, `edges`: last writer wins; every duplicate key is recorded as
//!   a conflict and logged, then overwritten.
//! - `entries`: first writer wins; duplicates are dropped without a report.
//!
//! The asymmetry is deliberate: entries are authoritative on first sight,
//! call and edge tables are refreshable. A missing or unparsable input file
//! is fatal and aborts the run before anything is written.

use std::fs;
use std::io::Write;
use std::path::Path;

use tracing::{debug, info, warn};

use crate::errors::{CfgLinkError, Result};
use crate::features::linking::domain::{LinkReport, StoreMap};
use crate::shared::models::{CfgFragment, GraphStore};

/// Merges CFG fragments into a single graph store.
///
/// An owned aggregate: each linking run constructs its own linker, so
/// independent runs in one process cannot interfere.
#[derive(Debug, Default)]
pub struct FragmentLinker {
    store: GraphStore,
    report: LinkReport,
}

impl FragmentLinker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse one fragment file and merge it. Fatal on a missing file or an
    /// unparsable document; the error carries the offending path.
    pub fn add_file(&mut self, path: &Path) -> Result<()> {
        info!(path = %path.display(), "linking fragment");
        let text = fs::read_to_string(path).map_err(|e| CfgLinkError::io(path, e))?;
        // A `null` document is a unit with nothing to contribute; it links
        // as three empty maps.
        let fragment: Option<CfgFragment> =
            serde_json::from_str(&text).map_err(|e| CfgLinkError::parse(path, e))?;
        self.add_fragment(fragment.unwrap_or_default());
        Ok(())
    }

    /// Merge one parsed fragment into the store.
    pub fn add_fragment(&mut self, fragment: CfgFragment) {
        for (function, table) in fragment.calls {
            if self.store.calls.contains_key(&function) {
                warn!(%function, map = "calls", "duplicate key, overwriting");
                self.report.record(StoreMap::Calls, &function);
            }
            self.store.calls.insert(function, table);
        }

        for (function, successors) in fragment.edges {
            if self.store.edges.contains_key(&function) {
                warn!(%function, map = "edges", "duplicate key, overwriting");
                self.report.record(StoreMap::Edges, &function);
            }
            self.store.edges.insert(function, successors);
        }

        for (function, entry) in fragment.entries {
            // First value kept; a re-seen entry is not worth a report.
            self.store.entries.entry(function).or_insert(entry);
        }
    }

    /// Serialize the merged store. The write is all-or-nothing: the
    /// document lands in a temp file next to the target and is renamed
    /// into place only once fully written.
    pub fn emit(&self, path: &Path) -> Result<()> {
        let doc = serde_json::to_string(&self.store).map_err(|e| CfgLinkError::parse(path, e))?;

        let dir = path.parent().filter(|p| !p.as_os_str().is_empty());
        let mut tmp = match dir {
            Some(dir) => tempfile::NamedTempFile::new_in(dir),
            None => tempfile::NamedTempFile::new_in("."),
        }
        .map_err(|e| CfgLinkError::io(path, e))?;

        tmp.write_all(doc.as_bytes())
            .map_err(|e| CfgLinkError::io(path, e))?;
        tmp.persist(path)
            .map_err(|e| CfgLinkError::io(path, e.error))?;

        debug!(
            path = %path.display(),
            functions = self.store.function_count(),
            "merged store written"
        );
        Ok(())
    }

    /// Consume the linker, yielding the frozen store and the conflict log.
    pub fn into_parts(self) -> (GraphStore, LinkReport) {
        (self.store, self.report)
    }
}
