//! Domain types for story dependency analysis.
//!
//! Stories arrive already materialized from an external store. Nothing here
//! owns their lifecycle; the analysis only reads them.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a story
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StoryId(pub String);

impl StoryId {
    /// Create a new story ID
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the ID as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for StoryId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for StoryId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Workflow status of a story
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StoryStatus {
    /// Not yet scheduled
    #[default]
    Backlog,

    /// Scheduled, not started
    Todo,

    /// Being worked on
    #[serde(alias = "in_progress")]
    InProgress,

    /// Completed
    Done,

    /// Explicitly marked as blocked on the board
    Blocked,
}

impl StoryStatus {
    /// Whether the story counts as finished for dependency purposes.
    pub fn is_done(self) -> bool {
        self == Self::Done
    }
}

impl fmt::Display for StoryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Backlog => "backlog",
            Self::Todo => "todo",
            Self::InProgress => "in-progress",
            Self::Done => "done",
            Self::Blocked => "blocked",
        };
        f.write_str(s)
    }
}

/// Story priority, ordered from `Low` to `Critical`
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// Nice to have
    Low,

    /// Regular work
    #[default]
    Medium,

    /// Should be picked up soon
    High,

    /// Drop everything
    Critical,
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Critical => "critical",
        };
        f.write_str(s)
    }
}

/// A unit of product work
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Story {
    /// Unique identifier
    pub id: StoryId,

    /// Short title
    #[serde(default)]
    pub title: String,

    /// Current status
    #[serde(default)]
    pub status: StoryStatus,

    /// IDs of the stories this one depends on, in declaration order.
    ///
    /// IDs outside the current story set are tolerated.
    #[serde(default)]
    pub dependencies: Vec<StoryId>,

    /// Point estimate (non-negative)
    #[serde(default, alias = "story_points", skip_serializing_if = "Option::is_none")]
    pub story_points: Option<f64>,

    /// Priority level
    #[serde(default)]
    pub priority: Priority,

    /// Owning epic
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub epic: Option<String>,

    /// Sprint the story is planned into
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sprint: Option<String>,
}

impl Story {
    /// Create a backlog story with the given dependencies.
    pub fn new<I, D>(id: impl Into<StoryId>, dependencies: I) -> Self
    where
        I: IntoIterator<Item = D>,
        D: Into<StoryId>,
    {
        Self {
            id: id.into(),
            title: String::new(),
            status: StoryStatus::default(),
            dependencies: dependencies.into_iter().map(Into::into).collect(),
            story_points: None,
            priority: Priority::default(),
            epic: None,
            sprint: None,
        }
    }

    /// Builder-style status setter.
    #[must_use]
    pub fn with_status(mut self, status: StoryStatus) -> Self {
        self.status = status;
        self
    }

    /// Builder-style story points setter.
    #[must_use]
    pub fn with_points(mut self, points: f64) -> Self {
        self.story_points = Some(points);
        self
    }

    /// Builder-style priority setter.
    #[must_use]
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Builder-style title setter.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Point estimate, treating a missing estimate as zero.
    pub fn points(&self) -> f64 {
        self.story_points.unwrap_or(0.0)
    }

    /// Check the record for values the analysis cannot work with.
    ///
    /// # Errors
    ///
    /// Returns a description of the first problem found.
    pub fn validate(&self) -> Result<(), String> {
        if self.id.as_str().trim().is_empty() {
            return Err("story id cannot be empty".to_string());
        }
        if let Some(points) = self.story_points {
            if !points.is_finite() || points < 0.0 {
                return Err(format!("story points must be a non-negative number, got {points}"));
            }
        }
        Ok(())
    }
}

/// Filter selecting the stories in the current view.
///
/// An empty filter matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct StoryFilter {
    /// Keep only these statuses (empty = any)
    pub statuses: Vec<StoryStatus>,

    /// Keep only stories at or above this priority
    pub min_priority: Option<Priority>,

    /// Keep only stories of this epic
    pub epic: Option<String>,

    /// Keep only stories of this sprint
    pub sprint: Option<String>,

    /// Drop finished stories
    pub exclude_done: bool,
}

impl StoryFilter {
    /// Whether the filter selects every story.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Whether `story` is part of the view.
    pub fn matches(&self, story: &Story) -> bool {
        if !self.statuses.is_empty() && !self.statuses.contains(&story.status) {
            return false;
        }
        if self.min_priority.is_some_and(|min| story.priority < min) {
            return false;
        }
        if self.epic.as_ref().is_some_and(|e| story.epic.as_ref() != Some(e)) {
            return false;
        }
        if self.sprint.as_ref().is_some_and(|s| story.sprint.as_ref() != Some(s)) {
            return false;
        }
        !(self.exclude_done && story.status.is_done())
    }

    /// The stories selected by this filter, in input order.
    pub fn apply(&self, stories: &[Story]) -> Vec<Story> {
        stories.iter().filter(|s| self.matches(s)).cloned().collect()
    }

    /// Overlay `other` onto this filter; fields set in `other` win.
    #[must_use]
    pub fn merged_with(&self, other: &StoryFilter) -> StoryFilter {
        StoryFilter {
            statuses: if other.statuses.is_empty() {
                self.statuses.clone()
            } else {
                other.statuses.clone()
            },
            min_priority: other.min_priority.or(self.min_priority),
            epic: other.epic.clone().or_else(|| self.epic.clone()),
            sprint: other.sprint.clone().or_else(|| self.sprint.clone()),
            exclude_done: self.exclude_done || other.exclude_done,
        }
    }
}
