//! Feature modules - Each feature follows Hexagonal Architecture
//!
//! - domain/         - Pure models (no external dependencies)
//! - ports/          - Interface definitions (traits)
//! - application/    - Use cases
//! - infrastructure/ - File formats, subprocess probes, artifact writers

pub mod linking;
pub mod resolution;
pub mod stitching;
