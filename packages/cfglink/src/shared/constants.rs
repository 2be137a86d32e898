//! Fixed layout constants of the instrumentation ABI

/// Byte width of one slot in a function's guard region; raw guard-table
/// offsets are byte offsets and divide by this to become word indices.
pub const GUARD_SLOT_BYTES: u64 = 4;

/// Byte size of one entry in the binary's pc-table section; the section's
/// total byte size divides by this to give the instrumented-edge count.
pub const PCTABLE_ENTRY_BYTES: u64 = 16;

/// Name fragment of the pc-table section in the linked binary.
pub const PCTABLE_SECTION_NAME: &str = "sancov_pc";

/// Default output path of the fragment linker.
pub const DEFAULT_LINK_OUTPUT: &str = "a.out.cfg";
