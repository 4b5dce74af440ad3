//! Error types for storyline operations.
//!
//! The dependency analysis itself never fails: dangling references and
//! cycles are annotated on the result instead. Errors only come from the
//! edges of the system (reading stories, loading configuration, looking up
//! a story the caller named).

use crate::domain::StoryId;
use std::io;
use thiserror::Error;

/// The error type for storyline operations.
#[derive(Debug, Error)]
pub enum Error {
    /// IO error occurred.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML configuration could not be parsed.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A story record failed validation.
    #[error("Invalid story {id}: {reason}")]
    InvalidStory {
        /// ID of the offending story
        id: StoryId,
        /// What was wrong with it
        reason: String,
    },

    /// Story not found in the loaded set.
    #[error("Story not found: {0}")]
    StoryNotFound(StoryId),

    /// The story source failed.
    #[error("Story source error: {0}")]
    Source(String),
}

impl From<storyline_jsonl::Error> for Error {
    fn from(err: storyline_jsonl::Error) -> Self {
        match err {
            storyline_jsonl::Error::Io(e) => Self::Io(e),
            storyline_jsonl::Error::Json(e) => Self::Json(e),
        }
    }
}

/// A specialized Result type for storyline operations.
pub type Result<T> = std::result::Result<T, Error>;
