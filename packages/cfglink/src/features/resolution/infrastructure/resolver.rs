//! Guard-to-function resolver
//!
//! Single forward pass, no backtracking. Functions are visited in the
//! store's `calls` insertion order; a cursor walks the guard records in
//! table order. The record under the cursor names the base address that
//! instruments the current function, the function's call-site count is the
//! guard's size, and the cursor advances by that size.
//!
//! The pass leans on an unchecked cross-artifact contract: the guard table
//! must be laid out in exactly the store's function order. The contract is
//! not correctable here; instead consumption is counted and compared to
//! the table length afterwards, so a violation fails loudly rather than
//! silently misattributing blocks (see [`Resolution::layout_mismatch`]).

use tracing::{debug, warn};

use crate::features::resolution::domain::Resolution;
use crate::shared::models::{GraphStore, GuardTable};

pub struct GuardResolver;

impl GuardResolver {
    pub fn new() -> Self {
        Self
    }

    /// Attribute guards to functions greedily.
    ///
    /// Stops as soon as the cursor reaches the end of the table; functions
    /// beyond that point stay unresolved and are omitted. Guards the table
    /// names that no function claimed are reported by
    /// [`Resolution::unresolved`].
    pub fn resolve(&self, store: &GraphStore, table: &GuardTable) -> Resolution {
        let mut resolution = Resolution {
            total_records: table.records.len(),
            ..Resolution::default()
        };

        let mut pos = 0usize;
        for (function, call_sites) in &store.calls {
            if pos >= table.records.len() {
                break;
            }
            let record = &table.records[pos];
            let size = call_sites.len();

            // Insert semantics: a zero-size function leaves the cursor in
            // place, so the same base may be re-bound to the next function.
            resolution
                .guard_to_fn
                .insert(record.base.clone(), function.clone());
            resolution.sizes.insert(record.base.clone(), size as u64);

            pos += size;
        }
        resolution.consumed = pos;

        if let Some(mismatch) = resolution.layout_mismatch() {
            warn!(
                ?mismatch,
                consumed = resolution.consumed,
                total = resolution.total_records,
                "guard table and store function order disagree"
            );
        }
        debug!(
            resolved = resolution.guard_to_fn.len(),
            consumed = resolution.consumed,
            "guard resolution finished"
        );

        resolution
    }
}

impl Default for GuardResolver {
    fn default() -> Self {
        Self::new()
    }
}
