//! Asset loading with streamed progress.
//!
//! The video is fetched as a byte stream — over HTTP or from a local file
//! — and the rounded download percentage is pushed to a [`ProgressSink`]
//! after every chunk. A missing or zero declared length makes the
//! percentage non-finite; it is reported as-is, matching the surface this
//! was authored for.

mod error;

pub use error::LoadError;

use std::path::Path;

use bytes::{Bytes, BytesMut};
use futures::StreamExt;
use tokio::io::AsyncReadExt;
use tracing::{debug, info};

const FILE_CHUNK_BYTES: usize = 64 * 1024;

/// Receives progress percentages while an asset streams in.
pub trait ProgressSink {
    fn progress(&mut self, percent: f64);
}

/// Rounded download percentage. A zero declared total produces a
/// non-finite value, which callers pass through untouched.
pub fn percent_complete(received: u64, total: u64) -> f64 {
    (received as f64 / total as f64 * 100.0).round()
}

/// Load from a URL (`http://`/`https://`) or a local path.
pub async fn load(source: &str, sink: &mut dyn ProgressSink) -> Result<Bytes, LoadError> {
    if source.starts_with("http://") || source.starts_with("https://") {
        fetch(source, sink).await
    } else {
        read_file(Path::new(source), sink).await
    }
}

/// Stream the asset over HTTP, reporting progress per chunk. A non-success
/// status is terminal, the same as a transport failure.
pub async fn fetch(url: &str, sink: &mut dyn ProgressSink) -> Result<Bytes, LoadError> {
    let response = reqwest::get(url).await?;
    let status = response.status();
    if !status.is_success() {
        return Err(LoadError::Status { status });
    }

    let total = response.content_length().unwrap_or(0);
    debug!(url, total, "download started");

    let mut stream = response.bytes_stream();
    let mut buf = BytesMut::with_capacity(total as usize);
    let mut received: u64 = 0;

    while let Some(chunk) = stream.next().await {
        let chunk = chunk?;
        received += chunk.len() as u64;
        buf.extend_from_slice(&chunk);
        sink.progress(percent_complete(received, total));
    }

    info!(bytes = received, "download complete");
    Ok(buf.freeze())
}

/// Read a local asset in chunks, with the file's metadata length as the
/// declared total.
pub async fn read_file(path: &Path, sink: &mut dyn ProgressSink) -> Result<Bytes, LoadError> {
    let file = tokio::fs::File::open(path)
        .await
        .map_err(|source| LoadError::Open {
            path: path.to_path_buf(),
            source,
        })?;
    let total = file
        .metadata()
        .await
        .map_err(|source| LoadError::Open {
            path: path.to_path_buf(),
            source,
        })?
        .len();

    let mut reader = tokio::io::BufReader::new(file);
    let mut buf = BytesMut::with_capacity(total as usize);
    let mut chunk = vec![0u8; FILE_CHUNK_BYTES];

    loop {
        let n = reader
            .read(&mut chunk)
            .await
            .map_err(|source| LoadError::ReadChunk {
                path: path.to_path_buf(),
                source,
            })?;
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
        sink.progress(percent_complete(buf.len() as u64, total));
    }

    info!(bytes = buf.len(), path = %path.display(), "asset read");
    Ok(buf.freeze())
}
