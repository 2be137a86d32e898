//! Linking application layer

pub mod link_fragments;

pub use link_fragments::{LinkOutcome, LinkUseCase};
