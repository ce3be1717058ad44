//! Error types for asset loading

use std::path::PathBuf;
use thiserror::Error;

/// Errors while streaming the video asset in
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to download asset")]
    Transport(#[from] reqwest::Error),

    #[error("download failed: HTTP {status}")]
    Status { status: reqwest::StatusCode },

    #[error("failed to open asset {path}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read asset {path}")]
    ReadChunk {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
