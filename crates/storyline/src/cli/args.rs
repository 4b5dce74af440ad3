//! CLI argument structs.

use clap::{Args, Parser};

use super::types::{PriorityArg, StoryStatusArg};
use super::validators::{validate_depth, validate_story_id};
use crate::domain::{StoryFilter, StoryId};

/// Filter flags selecting the stories in view.
///
/// These apply on top of the `filter` section of the configuration file.
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Only include stories with these statuses (comma-separated or repeated)
    #[arg(long = "status", value_enum, value_delimiter = ',', global = true)]
    pub statuses: Vec<StoryStatusArg>,

    /// Only include stories at or above this priority
    #[arg(long, value_enum, global = true)]
    pub min_priority: Option<PriorityArg>,

    /// Only include stories of this epic
    #[arg(long, global = true)]
    pub epic: Option<String>,

    /// Only include stories of this sprint
    #[arg(long, global = true)]
    pub sprint: Option<String>,

    /// Leave finished stories out of the view
    #[arg(long, global = true)]
    pub exclude_done: bool,
}

impl FilterArgs {
    /// Convert the flags into a domain filter.
    pub fn to_filter(&self) -> StoryFilter {
        StoryFilter {
            statuses: self.statuses.iter().copied().map(Into::into).collect(),
            min_priority: self.min_priority.map(Into::into),
            epic: self.epic.clone(),
            sprint: self.sprint.clone(),
            exclude_done: self.exclude_done,
        }
    }
}

/// Arguments for the `tree` command
#[derive(Parser, Debug, Clone)]
pub struct TreeArgs {
    /// Story ID at the root of the tree
    #[arg(value_parser = validate_story_id)]
    pub story_id: String,

    /// Show what depends on the story instead of what it depends on
    #[arg(long)]
    pub dependents: bool,

    /// Maximum depth below the root (defaults to the configured limit)
    #[arg(short, long, value_parser = validate_depth)]
    pub depth: Option<usize>,

    /// Stories to show without expanding (comma-separated)
    #[arg(long, value_delimiter = ',', value_parser = validate_story_id)]
    pub collapse: Vec<String>,
}

impl TreeArgs {
    /// The root story ID.
    pub fn root(&self) -> StoryId {
        StoryId::new(self.story_id.clone())
    }
}
