//! Error types for storyline-jsonl operations.

use std::io;
use thiserror::Error;

/// Fatal errors while reading JSONL data.
///
/// Per-line problems are not errors; they surface as
/// [`Warning`](crate::Warning)s instead.
#[derive(Debug, Error)]
pub enum Error {
    /// IO error occurred while reading.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON error outside of per-line record parsing.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for storyline-jsonl operations.
pub type Result<T> = std::result::Result<T, Error>;
