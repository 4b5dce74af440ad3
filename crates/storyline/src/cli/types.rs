//! CLI value enums and domain type conversions.

use clap::ValueEnum;

use crate::analysis::TieBreak;
use crate::domain::{Priority, StoryStatus};

/// Story status for CLI arguments
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoryStatusArg {
    /// Not yet scheduled
    Backlog,
    /// Scheduled, not started
    Todo,
    /// Being worked on
    #[value(name = "in-progress", alias = "in_progress")]
    InProgress,
    /// Completed
    Done,
    /// Flagged as blocked
    Blocked,
}

impl From<StoryStatusArg> for StoryStatus {
    fn from(arg: StoryStatusArg) -> Self {
        match arg {
            StoryStatusArg::Backlog => Self::Backlog,
            StoryStatusArg::Todo => Self::Todo,
            StoryStatusArg::InProgress => Self::InProgress,
            StoryStatusArg::Done => Self::Done,
            StoryStatusArg::Blocked => Self::Blocked,
        }
    }
}

/// Priority for CLI arguments
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriorityArg {
    /// Low priority
    Low,
    /// Medium priority
    Medium,
    /// High priority
    High,
    /// Critical priority
    Critical,
}

impl From<PriorityArg> for Priority {
    fn from(arg: PriorityArg) -> Self {
        match arg {
            PriorityArg::Low => Self::Low,
            PriorityArg::Medium => Self::Medium,
            PriorityArg::High => Self::High,
            PriorityArg::Critical => Self::Critical,
        }
    }
}

/// Critical path tie-break rule for CLI arguments
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TieBreakArg {
    /// Smallest story ID wins
    Lexicographic,
    /// First story in input order wins
    InputOrder,
}

impl From<TieBreakArg> for TieBreak {
    fn from(arg: TieBreakArg) -> Self {
        match arg {
            TieBreakArg::Lexicographic => Self::Lexicographic,
            TieBreakArg::InputOrder => Self::InputOrder,
        }
    }
}
