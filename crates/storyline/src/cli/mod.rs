//! CLI argument parsing and command dispatch.
//!
//! This module provides the command-line interface for storyline using clap's derive API.
//!
//! # Commands
//!
//! - `analyze`: Summary of levels, critical path, blocked stories and cycles
//! - `levels`: Every story with its dependency level
//! - `critical-path`: The longest dependency chain
//! - `blocked`: Stories waiting on unfinished work
//! - `ready`: Stories that can be started now
//! - `cycles`: Circular dependency groups
//! - `tree`: Dependency tree rooted at one story
//!
//! # Global Flags
//!
//! - `--json`: Output in JSON format (applies to all commands)
//! - `--stories`: Path of the JSONL story file
//! - `--config`: Path of the YAML configuration file
//! - `--status`, `--min-priority`, `--epic`, `--sprint`, `--exclude-done`: story filters
//!
//! # Example
//!
//! ```bash
//! storyline analyze
//! storyline --stories backlog.jsonl critical-path --exclude-done
//! storyline tree S-12 --dependents --depth 3
//! storyline --json blocked --sprint 2026-10
//! ```

mod args;
mod execute;
mod types;
mod validators;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use args::{FilterArgs, TreeArgs};
pub use types::{PriorityArg, StoryStatusArg, TieBreakArg};
pub use validators::{validate_depth, validate_story_id};

use crate::source::DEFAULT_STORIES_FILE;

/// Storyline - dependency analysis for user stories
///
/// Reads stories from a JSONL file and reports dependency levels, the
/// critical path, blocked work and circular dependencies.
#[derive(Parser, Debug)]
#[command(name = "storyline")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output in JSON format for programmatic use
    #[arg(long, global = true)]
    pub json: bool,

    /// Path of the JSONL story file
    #[arg(short = 'f', long = "stories", global = true, default_value = DEFAULT_STORIES_FILE)]
    pub stories: PathBuf,

    /// Path of the configuration file (defaults to ./storyline.yaml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Critical path tie-break rule, overriding the configuration
    #[arg(long, value_enum, global = true)]
    pub tie_break: Option<TieBreakArg>,

    /// Story filters
    #[command(flatten)]
    pub filter: FilterArgs,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Summarize the dependency analysis
    ///
    /// Shows level counts, the critical path, blocked stories and cycles.
    Analyze,

    /// Show every story with its dependency level
    ///
    /// Level 0 stories have no dependencies; higher levels can only start
    /// after the levels beneath them.
    Levels,

    /// Show the critical path
    ///
    /// The longest chain of dependencies, from the deepest story down to a
    /// story with no dependencies, with its total and remaining points.
    CriticalPath,

    /// Show blocked stories
    ///
    /// Lists stories with at least one unfinished dependency, along with
    /// their blockers.
    Blocked,

    /// Show stories ready to work on
    ///
    /// Lists unfinished stories whose dependencies are all done.
    Ready,

    /// Show circular dependencies
    Cycles,

    /// Show the dependency tree of a story
    ///
    /// Expands what the story depends on, or with `--dependents` what
    /// depends on it.
    Tree(TreeArgs),
}

impl Cli {
    /// Parse CLI arguments from command line
    pub fn parse_args() -> Self {
        <Self as Parser>::parse()
    }

    /// Parse CLI arguments from an iterator (for testing)
    pub fn try_parse_from<I, T>(iter: I) -> std::result::Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        <Self as Parser>::try_parse_from(iter)
    }

    /// Execute the CLI command
    pub async fn execute(&self) -> Result<()> {
        use crate::app::App;
        use crate::output::{self, OutputMode};
        use crate::source::JsonlStorySource;

        let Some(command) = &self.command else {
            println!("Storyline story dependency analysis");
            println!("Use --help for more information");
            return Ok(());
        };

        let output_mode = if self.json {
            OutputMode::Json
        } else {
            OutputMode::Text
        };

        let source = JsonlStorySource::new(&self.stories);
        let mut app = App::load(&source, self.config.as_deref()).await?;
        if let Some(tie_break) = self.tie_break {
            app.set_tie_break(tie_break.into());
        }
        output::print_load_warnings(app.warnings())?;

        let filter = self.filter.to_filter();
        match command {
            Commands::Analyze => execute::execute_analyze(&app, &filter, output_mode),
            Commands::Levels => execute::execute_levels(&app, &filter, output_mode),
            Commands::CriticalPath => execute::execute_critical_path(&app, &filter, output_mode),
            Commands::Blocked => execute::execute_blocked(&app, &filter, output_mode),
            Commands::Ready => execute::execute_ready(&app, &filter, output_mode),
            Commands::Cycles => execute::execute_cycles(&app, &filter, output_mode),
            Commands::Tree(args) => execute::execute_tree(&app, args, &filter, output_mode),
        }
    }
}
