//! Usecase Layer - One-shot pipeline services behind the CLIs
//!
//! Each service owns a complete run: inputs are fully read before any
//! merge/resolve step, and nothing is written unless the whole run
//! succeeds. Services are plain owned values, so several runs can execute
//! in one process without sharing state.

pub mod link_service;
pub mod stitch_service;

pub use link_service::{LinkService, LinkSummary};
pub use stitch_service::{StitchRequest, StitchService, StitchSummary};
