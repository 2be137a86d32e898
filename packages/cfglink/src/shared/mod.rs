//! Shared module - Common types used across all features

pub mod constants;
pub mod models;

pub use models::*;
