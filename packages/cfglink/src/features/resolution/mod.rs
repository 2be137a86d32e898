// Guard Resolution - reconciles the guard table with the graph store
//
// The instrumentation pass lays guard records out in the same order the
// store's functions were visited, so a single greedy pass over both is
// enough to decide which function each guard instruments and how many
// local basic blocks it contributes.
//
// ## Architecture
// - Domain: resolution products (guard→function map, sizes, layout check)
// - Infrastructure: guard-table reader, greedy resolver

pub mod domain;
pub mod infrastructure;

pub use domain::{LayoutMismatch, Resolution};
pub use infrastructure::{read_guard_table, GuardResolver};
