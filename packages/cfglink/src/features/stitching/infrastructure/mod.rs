//! Stitching infrastructure

pub mod sancov_probe;
pub mod stitcher;

pub use sancov_probe::{FixedEdgeCount, SancovSectionProbe};
pub use stitcher::{compute_offsets, EdgeStitcher};
