//! Stitching ports

use crate::errors::Result;

/// Boundary to the binary introspector. The stitcher never inspects the
/// binary itself; it only consumes the total instrumented-edge count this
/// probe reports, and uses it as the sentinel value.
pub trait EdgeCountProbe {
    fn edge_count(&self) -> Result<u64>;
}
