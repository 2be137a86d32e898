//! Edge-count probe adapters
//!
//! Two implementations of the introspector boundary: a fixed count handed
//! in directly (for callers that already know `n`), and a `readelf`-backed
//! probe that reads the pc-table section size out of the linked binary.
//! Either way the stitcher only ever sees the resulting integer.

use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::debug;

use crate::errors::{CfgLinkError, Result};
use crate::features::stitching::ports::EdgeCountProbe;
use crate::shared::constants::{PCTABLE_ENTRY_BYTES, PCTABLE_SECTION_NAME};

/// An edge count supplied directly as an opaque integer.
#[derive(Debug, Clone, Copy)]
pub struct FixedEdgeCount(pub u64);

impl EdgeCountProbe for FixedEdgeCount {
    fn edge_count(&self) -> Result<u64> {
        Ok(self.0)
    }
}

/// Reads the instrumented-edge count from the binary's pc-table section.
///
/// Shells out to `readelf -S` and parses the section's byte size from the
/// listing; the count is that size over the fixed per-entry width. ELF
/// parsing stays outside this crate.
#[derive(Debug, Clone)]
pub struct SancovSectionProbe {
    binary: PathBuf,
}

impl SancovSectionProbe {
    pub fn new(binary: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
        }
    }

    pub fn binary(&self) -> &Path {
        &self.binary
    }

    fn section_size(listing: &str) -> Result<u64> {
        let mut lines = listing.lines();
        while let Some(line) = lines.next() {
            if !line.contains(PCTABLE_SECTION_NAME) {
                continue;
            }
            // readelf splits each section over two lines; the size is the
            // first hex field of the line after the name.
            let size_line = lines.next().ok_or_else(|| {
                CfgLinkError::probe(format!("truncated listing after `{PCTABLE_SECTION_NAME}`"))
            })?;
            let field = size_line.split_whitespace().next().ok_or_else(|| {
                CfgLinkError::probe(format!("no size field after `{PCTABLE_SECTION_NAME}`"))
            })?;
            return u64::from_str_radix(field, 16).map_err(|_| {
                CfgLinkError::probe(format!("invalid section size `{field}`"))
            });
        }
        Err(CfgLinkError::probe(format!(
            "section `{PCTABLE_SECTION_NAME}` not found in listing"
        )))
    }
}

impl EdgeCountProbe for SancovSectionProbe {
    fn edge_count(&self) -> Result<u64> {
        let output = Command::new("readelf")
            .arg("-S")
            .arg(&self.binary)
            .output()
            .map_err(|e| CfgLinkError::io(&self.binary, e))?;
        if !output.status.success() {
            return Err(CfgLinkError::probe(format!(
                "readelf -S {} exited with {}",
                self.binary.display(),
                output.status
            )));
        }

        let listing = String::from_utf8_lossy(&output.stdout);
        let bytes = Self::section_size(&listing)?;
        let count = bytes / PCTABLE_ENTRY_BYTES;
        debug!(bytes, count, binary = %self.binary.display(), "pc-table probed");
        Ok(count)
    }
}
