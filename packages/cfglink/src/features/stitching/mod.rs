// Edge Stitching - renumbers local edges into the global coordinate space
//
// Every resolved guard owns a contiguous run of global indices whose base
// is the cumulative size of all guards before it in table order. Stitching
// shifts each function's local edges by its guard's base and emits one flat
// edge list, terminated by the (n, n) sentinel derived from the binary's
// total instrumented-edge count.
//
// ## Architecture
// - Ports: edge-count probe boundary (the binary introspector)
// - Infrastructure: offset computation, edge emission, probe adapters

pub mod infrastructure;
pub mod ports;

pub use infrastructure::{compute_offsets, EdgeStitcher, FixedEdgeCount, SancovSectionProbe};
pub use ports::EdgeCountProbe;
