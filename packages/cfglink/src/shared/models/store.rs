//! Accumulated whole-program graph store
//!
//! The store has the same three-map shape as a fragment and is what the
//! fragment linker serializes. It is an owned aggregate: every linking run
//! builds its own store, so independent runs in one process never share
//! state. Mutation happens only through the linker's merge step; resolution
//! and stitching borrow it immutably.

use serde::{Deserialize, Serialize};

use super::fragment::{
    BasicBlockIndex, CallSiteTable, CfgFragment, FunctionName, SuccessorLists,
};
use indexmap::IndexMap;

/// The merged CFG of all linked fragments.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphStore {
    #[serde(default)]
    pub calls: IndexMap<FunctionName, CallSiteTable>,

    #[serde(default)]
    pub edges: IndexMap<FunctionName, SuccessorLists>,

    #[serde(default)]
    pub entries: IndexMap<FunctionName, BasicBlockIndex>,
}

impl GraphStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of functions with a call-site table.
    pub fn function_count(&self) -> usize {
        self.calls.len()
    }

    /// Local basic-block count of a function, from its successor lists.
    pub fn block_count(&self, function: &str) -> usize {
        self.edges.get(function).map_or(0, Vec::len)
    }
}

impl From<CfgFragment> for GraphStore {
    fn from(fragment: CfgFragment) -> Self {
        Self {
            calls: fragment.calls,
            edges: fragment.edges,
            entries: fragment.entries,
        }
    }
}
