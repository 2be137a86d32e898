//! Resolution domain models

use indexmap::IndexMap;

use crate::shared::models::FunctionName;

/// How the greedy pass's consumption compared to the table length. Any
/// variant means the cross-artifact layout contract did not hold exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMismatch {
    /// Guard records left over after every function was attributed.
    Undershoot { leftover: usize },
    /// The last attributed function claimed blocks past the table's end.
    Overshoot { excess: usize },
}

/// Output of the guard-to-function resolver.
#[derive(Debug, Clone, Default)]
pub struct Resolution {
    /// base address → function it instruments
    pub guard_to_fn: IndexMap<String, FunctionName>,
    /// base address → call-site count of that function (local block count)
    pub sizes: IndexMap<String, u64>,
    /// Guard records consumed by the pass (sum of attributed sizes).
    pub consumed: usize,
    /// Total guard records available.
    pub total_records: usize,
}

impl Resolution {
    /// Size attributed to a guard; unresolved guards contribute zero.
    pub fn size_of(&self, base: &str) -> u64 {
        self.sizes.get(base).copied().unwrap_or(0)
    }

    /// Guards from `order` whose base never matched a function. They are
    /// excluded from edge emission but still occupy their place in the
    /// linearization.
    pub fn unresolved<'a>(&self, order: &'a [String]) -> Vec<&'a str> {
        order
            .iter()
            .filter(|base| !self.guard_to_fn.contains_key(base.as_str()))
            .map(String::as_str)
            .collect()
    }

    /// The checked layout precondition: consumption must land exactly on
    /// the table's end, otherwise blocks were (or would be) misattributed.
    pub fn layout_mismatch(&self) -> Option<LayoutMismatch> {
        if self.consumed < self.total_records {
            Some(LayoutMismatch::Undershoot {
                leftover: self.total_records - self.consumed,
            })
        } else if self.consumed > self.total_records {
            Some(LayoutMismatch::Overshoot {
                excess: self.consumed - self.total_records,
            })
        } else {
            None
        }
    }
}
