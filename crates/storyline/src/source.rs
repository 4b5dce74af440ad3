//! Story sources.
//!
//! The analysis consumes already-materialized stories. A [`StorySource`]
//! is whatever hands them over: a JSONL export on disk, or a list held in
//! memory by an embedding application or a test.
//!
//! Loading is resilient. Unreadable lines, records that fail validation and
//! repeated IDs are dropped and reported as [`LoadWarning`]s; only I/O
//! failures abort.

use crate::domain::{Story, StoryId};
use crate::error::Result;
use async_trait::async_trait;
use std::collections::HashSet;
use std::fmt;
use std::path::{Path, PathBuf};
use storyline_jsonl::{Warning as JsonlWarning, read_jsonl_resilient};

/// Default story file name.
pub const DEFAULT_STORIES_FILE: &str = "stories.jsonl";

/// Non-fatal problems found while loading stories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadWarning {
    /// A line that is not valid JSON
    MalformedJson {
        /// 1-based line number
        line_number: usize,
        /// Parser message
        error: String,
    },

    /// A JSON line that does not describe a story
    InvalidRecord {
        /// 1-based line number
        line_number: usize,
        /// Deserializer message
        error: String,
    },

    /// A story that failed validation; it was skipped
    InvalidStory {
        /// ID of the skipped story
        id: StoryId,
        /// Validation message
        error: String,
    },

    /// A story ID seen before; the later record was skipped
    DuplicateId {
        /// The repeated ID
        id: StoryId,
    },
}

impl fmt::Display for LoadWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedJson { line_number, error } => {
                write!(f, "line {line_number}: malformed JSON: {error}")
            }
            Self::InvalidRecord { line_number, error } => {
                write!(f, "line {line_number}: not a story: {error}")
            }
            Self::InvalidStory { id, error } => write!(f, "story {id} skipped: {error}"),
            Self::DuplicateId { id } => write!(f, "duplicate story {id} skipped"),
        }
    }
}

impl From<JsonlWarning> for LoadWarning {
    fn from(warning: JsonlWarning) -> Self {
        match warning {
            JsonlWarning::MalformedJson { line_number, error } => {
                Self::MalformedJson { line_number, error }
            }
            JsonlWarning::InvalidRecord { line_number, error } => {
                Self::InvalidRecord { line_number, error }
            }
        }
    }
}

/// Stories handed over by a source, plus what was dropped on the way.
#[derive(Debug, Clone, Default)]
pub struct LoadedStories {
    /// Valid stories with unique IDs, in source order
    pub stories: Vec<Story>,
    /// Everything skipped
    pub warnings: Vec<LoadWarning>,
}

/// Supplier of the complete story list.
#[async_trait]
pub trait StorySource: Send + Sync {
    /// Load every story.
    ///
    /// # Errors
    ///
    /// Returns an error only if the source as a whole cannot be read.
    async fn load(&self) -> Result<LoadedStories>;

    /// Human-readable description of the source, for messages.
    fn describe(&self) -> String;
}

/// Validate and deduplicate raw stories, recording what gets dropped.
pub fn sanitize(raw: Vec<Story>, warnings: &mut Vec<LoadWarning>) -> Vec<Story> {
    let mut seen = HashSet::with_capacity(raw.len());
    let mut stories = Vec::with_capacity(raw.len());

    for story in raw {
        if let Err(error) = story.validate() {
            tracing::warn!(story = %story.id, %error, "Skipping invalid story");
            warnings.push(LoadWarning::InvalidStory {
                id: story.id,
                error,
            });
            continue;
        }
        if !seen.insert(story.id.clone()) {
            tracing::warn!(story = %story.id, "Skipping duplicate story");
            warnings.push(LoadWarning::DuplicateId { id: story.id });
            continue;
        }
        stories.push(story);
    }

    stories
}

/// Stories read from a JSONL file, one story object per line.
#[derive(Debug, Clone)]
pub struct JsonlStorySource {
    path: PathBuf,
}

impl JsonlStorySource {
    /// Source reading from `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl StorySource for JsonlStorySource {
    async fn load(&self) -> Result<LoadedStories> {
        let (raw, jsonl_warnings) = read_jsonl_resilient::<Story, _>(&self.path).await?;
        let mut warnings: Vec<LoadWarning> = jsonl_warnings.into_iter().map(Into::into).collect();
        let stories = sanitize(raw, &mut warnings);

        tracing::info!(
            path = %self.path.display(),
            stories = stories.len(),
            warnings = warnings.len(),
            "Loaded stories"
        );
        Ok(LoadedStories { stories, warnings })
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Stories already held in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStorySource {
    stories: Vec<Story>,
}

impl InMemoryStorySource {
    /// Source handing out `stories`.
    pub fn new(stories: Vec<Story>) -> Self {
        Self { stories }
    }
}

#[async_trait]
impl StorySource for InMemoryStorySource {
    async fn load(&self) -> Result<LoadedStories> {
        let mut warnings = Vec::new();
        let stories = sanitize(self.stories.clone(), &mut warnings);
        Ok(LoadedStories { stories, warnings })
    }

    fn describe(&self) -> String {
        format!("<memory: {} stories>", self.stories.len())
    }
}
