//! Linking infrastructure

pub mod linker;

pub use linker::FragmentLinker;
