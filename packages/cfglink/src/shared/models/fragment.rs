//! Per-object-file CFG fragment
//!
//! One fragment is the dump of a single compilation unit's control flow,
//! written by the instrumentation pass next to the object file. The document
//! is a three-map JSON object; every key is optional and an absent key is an
//! empty map. Key order carries meaning: functions appear in the order the
//! pass visited them, and the guard table is laid out in the same order.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Function symbol name, as emitted by the compiler.
pub type FunctionName = String;

/// Basic-block id local to one function. Dense, zero-based, contiguous
/// within a fragment.
pub type BasicBlockIndex = u32;

/// Call sites of one function, keyed by the stringified local block id of
/// the containing block; the value lists the callee names at that site.
pub type CallSiteTable = IndexMap<String, Vec<FunctionName>>;

/// Successor lists of one function: outer index = local block id, inner
/// list = that block's successor ids.
pub type SuccessorLists = Vec<Vec<BasicBlockIndex>>;

/// The CFG output of one compilation unit, prior to linking.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CfgFragment {
    /// Per-function call-site tables
    #[serde(default)]
    pub calls: IndexMap<FunctionName, CallSiteTable>,

    /// Per-function successor lists
    #[serde(default)]
    pub edges: IndexMap<FunctionName, SuccessorLists>,

    /// Entry block id of each function
    #[serde(default)]
    pub entries: IndexMap<FunctionName, BasicBlockIndex>,
}

impl CfgFragment {
    pub fn is_empty(&self) -> bool {
        self.calls.is_empty() && self.edges.is_empty() && self.entries.is_empty()
    }
}
