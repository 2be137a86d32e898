// Fragment Linking - merges per-object CFG fragments into one graph store
//
// Mirrors a traditional object linker's surface: fragments are added in
// command-line order, duplicate definitions resolve deterministically, and
// the merged store is emitted as a single artifact.
//
// ## Architecture
// - Domain: conflict report models
// - Application: one-shot link use case
// - Infrastructure: the linker itself (parsing, merging, atomic emit)

pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::{LinkOutcome, LinkUseCase};
pub use domain::{LinkConflict, LinkReport, StoreMap};
pub use infrastructure::FragmentLinker;
