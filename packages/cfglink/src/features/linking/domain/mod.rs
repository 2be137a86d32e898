//! Linking domain models

use std::fmt;

/// Which of the store's maps a conflict occurred in. Only `calls` and
/// `edges` conflict; duplicate `entries` keys are absorbed silently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreMap {
    Calls,
    Edges,
}

impl StoreMap {
    pub fn as_str(&self) -> &'static str {
        match self {
            StoreMap::Calls => "calls",
            StoreMap::Edges => "edges",
        }
    }
}

impl fmt::Display for StoreMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A duplicate function key seen while merging a fragment. The incoming
/// value overwrote the stored one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkConflict {
    pub map: StoreMap,
    pub function: String,
}

/// Ordered record of every conflict observed during one linking run.
#[derive(Debug, Clone, Default)]
pub struct LinkReport {
    pub conflicts: Vec<LinkConflict>,
}

impl LinkReport {
    pub fn record(&mut self, map: StoreMap, function: &str) {
        self.conflicts.push(LinkConflict {
            map,
            function: function.to_string(),
        });
    }

    pub fn is_clean(&self) -> bool {
        self.conflicts.is_empty()
    }
}
