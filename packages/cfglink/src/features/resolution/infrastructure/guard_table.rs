//! Guard table reader
//!
//! The table is a comma-delimited text file. The first line is the ordered
//! list of guard base labels; every following non-blank line is one
//! instrumentation site, `base, raw_byte_offset`. Raw offsets are byte
//! offsets into the guard region and divide by the slot width to become
//! word indices.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::errors::{CfgLinkError, Result};
use crate::shared::constants::GUARD_SLOT_BYTES;
use crate::shared::models::{GuardRecord, GuardTable};

/// Read and parse a guard table. Missing file and malformed rows are both
/// fatal; row errors carry the 1-based line number.
pub fn read_guard_table(path: &Path) -> Result<GuardTable> {
    let text = fs::read_to_string(path).map_err(|e| CfgLinkError::io(path, e))?;
    parse_guard_table(path, &text)
}

fn parse_guard_table(path: &Path, text: &str) -> Result<GuardTable> {
    let mut lines = text.lines().enumerate();

    let order: Vec<String> = match lines.next() {
        Some((_, header)) => header
            .split(',')
            .map(str::trim)
            .filter(|label| !label.is_empty())
            .map(String::from)
            .collect(),
        None => Vec::new(),
    };

    let mut records = Vec::new();
    for (idx, line) in lines {
        if line.trim().is_empty() {
            continue;
        }
        let mut columns = line.split(',').map(str::trim);
        let base = match columns.next() {
            Some(base) if !base.is_empty() => base.to_string(),
            _ => {
                return Err(CfgLinkError::guard_table(
                    path,
                    idx + 1,
                    "missing base address column",
                ))
            }
        };
        let raw_offset: u64 = match columns.next() {
            Some(raw) => raw.parse().map_err(|_| {
                CfgLinkError::guard_table(path, idx + 1, format!("invalid byte offset `{raw}`"))
            })?,
            None => {
                return Err(CfgLinkError::guard_table(
                    path,
                    idx + 1,
                    "expected 2 columns, got 1",
                ))
            }
        };

        records.push(GuardRecord {
            base,
            local_offset: raw_offset / GUARD_SLOT_BYTES,
        });
    }

    debug!(
        path = %path.display(),
        guards = order.len(),
        records = records.len(),
        "guard table read"
    );
    Ok(GuardTable { order, records })
}
