//! Error types for counter storage operations

use std::path::PathBuf;
use thiserror::Error;

/// Errors during counter store operations
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to create counter directory {path}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read counter {key}")]
    Read {
        key: &'static str,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write counter {key}")]
    Write {
        key: &'static str,
        #[source]
        source: std::io::Error,
    },

    #[error("counter {key} was never initialized")]
    Missing { key: &'static str },

    #[error("counter {key} holds non-numeric data: {raw:?}")]
    Corrupt { key: &'static str, raw: String },
}
