//! Application context for CLI command execution.
//!
//! # Example
//!
//! ```no_run
//! use storyline::app::App;
//! use storyline::source::JsonlStorySource;
//! use std::path::Path;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> anyhow::Result<()> {
//!     let source = JsonlStorySource::new("stories.jsonl");
//!     let app = App::load(&source, Some(Path::new("storyline.yaml"))).await?;
//!     println!("{} stories", app.stories().len());
//!     Ok(())
//! }
//! ```

use crate::analysis::{Analysis, TieBreak};
use crate::config::{AnalysisConfig, CONFIG_FILE_NAME};
use crate::domain::{Story, StoryFilter};
use crate::error::Result;
use crate::source::{LoadWarning, StorySource};
use std::path::Path;

/// Loaded stories plus the configuration to analyze them with.
#[derive(Debug)]
pub struct App {
    stories: Vec<Story>,
    warnings: Vec<LoadWarning>,
    config: AnalysisConfig,
    source: String,
}

impl App {
    /// Load configuration and stories.
    ///
    /// With an explicit `config_path` the file must exist. Without one,
    /// `storyline.yaml` in the working directory is used if present.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the source
    /// cannot be read.
    pub async fn load(source: &dyn StorySource, config_path: Option<&Path>) -> Result<Self> {
        let config = match config_path {
            Some(path) => AnalysisConfig::load(path).await?,
            None => AnalysisConfig::load_or_default(Path::new(CONFIG_FILE_NAME)).await?,
        };
        Self::with_config(source, config).await
    }

    /// Load stories using an already built configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the source cannot be read.
    pub async fn with_config(source: &dyn StorySource, config: AnalysisConfig) -> Result<Self> {
        let loaded = source.load().await?;
        Ok(Self {
            stories: loaded.stories,
            warnings: loaded.warnings,
            config,
            source: source.describe(),
        })
    }

    /// Every loaded story, unfiltered.
    pub fn stories(&self) -> &[Story] {
        &self.stories
    }

    /// Problems found while loading.
    pub fn warnings(&self) -> &[LoadWarning] {
        &self.warnings
    }

    /// Active configuration.
    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Override the configured critical path tie-break.
    pub fn set_tie_break(&mut self, tie_break: TieBreak) {
        self.config.tie_break = tie_break;
    }

    /// Description of the story source.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Combine the configured filter with a command-line filter.
    pub fn effective_filter(&self, overlay: &StoryFilter) -> StoryFilter {
        self.config.filter.merged_with(overlay)
    }

    /// Run the analysis over the view selected by `overlay`.
    pub fn analyze(&self, overlay: &StoryFilter) -> Analysis {
        Analysis::run(&self.stories, &self.effective_filter(overlay), &self.config)
    }
}
