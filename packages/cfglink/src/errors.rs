//! Error types for cfglink
//!
//! Provides unified error handling across the crate. Fatal input errors
//! carry the offending file path so the CLIs can report it verbatim.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Main error type for cfglink operations
#[derive(Debug, Error)]
pub enum CfgLinkError {
    /// IO error while reading an input or writing an artifact
    #[error("{path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A CFG document that could not be parsed into the three-map shape
    #[error("{path}: invalid CFG document: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A malformed guard table row
    #[error("{path}:{line}: malformed guard table: {message}")]
    GuardTable {
        path: PathBuf,
        line: usize,
        message: String,
    },

    /// Guard records and graph store functions do not line up (strict mode)
    #[error("guard layout mismatch: {0}")]
    GuardLayout(String),

    /// Edge count probe failure
    #[error("edge count probe: {0}")]
    Probe(String),

    /// CLI usage error
    #[error("{0}")]
    Usage(String),
}

impl CfgLinkError {
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        CfgLinkError::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    pub fn parse(path: impl AsRef<Path>, source: serde_json::Error) -> Self {
        CfgLinkError::Parse {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    pub fn guard_table(path: impl AsRef<Path>, line: usize, message: impl Into<String>) -> Self {
        CfgLinkError::GuardTable {
            path: path.as_ref().to_path_buf(),
            line,
            message: message.into(),
        }
    }

    pub fn probe(message: impl Into<String>) -> Self {
        CfgLinkError::Probe(message.into())
    }

    pub fn usage(message: impl Into<String>) -> Self {
        CfgLinkError::Usage(message.into())
    }
}

/// Result type alias for cfglink operations
pub type Result<T> = std::result::Result<T, CfgLinkError>;
