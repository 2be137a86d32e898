/*
 * cfglink - whole-program CFG linking for coverage instrumentation
 *
 * Feature-First Hexagonal Architecture:
 * - shared/      : Common models (CfgFragment, GraphStore, GuardTable, GlobalEdge)
 * - features/    : Vertical slices (linking -> resolution -> stitching)
 * - usecases/    : One-shot pipeline services behind the CLIs
 *
 * Pipeline:
 * - cfg-ld     : merge per-object CFG fragments into one graph store
 * - cfg-stitch : reconcile the store with the binary's guard table and
 *                emit the flat global edge list, sentinel last
 */

// ═══════════════════════════════════════════════════════════════════════════
// Module Exports
// ═══════════════════════════════════════════════════════════════════════════

/// Shared models and constants
pub mod shared;

/// Feature modules (linking, resolution, stitching)
pub mod features;

/// Error types
pub mod errors;

/// Usecase layer (LinkService, StitchService)
pub mod usecases;

// ═══════════════════════════════════════════════════════════════════════════
// Re-exports for Public API
// ═══════════════════════════════════════════════════════════════════════════

pub use errors::{CfgLinkError, Result};
pub use features::linking::{FragmentLinker, LinkConflict, LinkReport, StoreMap};
pub use features::resolution::{read_guard_table, GuardResolver, LayoutMismatch, Resolution};
pub use features::stitching::{
    compute_offsets, EdgeCountProbe, EdgeStitcher, FixedEdgeCount, SancovSectionProbe,
};
pub use shared::models::{
    BasicBlockIndex, CfgFragment, FunctionName, GlobalEdge, GraphStore, GuardRecord, GuardTable,
};
pub use usecases::{LinkService, LinkSummary, StitchRequest, StitchService, StitchSummary};
