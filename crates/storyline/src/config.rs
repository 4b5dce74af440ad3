//! Configuration for storyline.
//!
//! Settings are read from a YAML file (`storyline.yaml` by default):
//!
//! ```yaml
//! tie-break: lexicographic   # or input-order
//! max-tree-depth: 16
//! filter:
//!   exclude-done: true
//!   min-priority: medium
//! ```
//!
//! Every key is optional. A missing file means defaults.

use crate::analysis::TieBreak;
use crate::domain::StoryFilter;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;

/// Default configuration file name, looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "storyline.yaml";

/// Default depth limit for `tree` output.
pub const DEFAULT_MAX_TREE_DEPTH: usize = 16;

/// Analysis settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct AnalysisConfig {
    /// Tie-break rule for critical path selection
    pub tie_break: TieBreak,

    /// Depth limit for dependency trees
    pub max_tree_depth: Option<usize>,

    /// Filter applied before any command-line filter flags
    pub filter: StoryFilter,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            tie_break: TieBreak::default(),
            max_tree_depth: Some(DEFAULT_MAX_TREE_DEPTH),
            filter: StoryFilter::default(),
        }
    }
}

impl AnalysisConfig {
    /// Parse configuration from YAML text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] for unknown keys, bad values, or a zero
    /// tree depth.
    pub fn from_yaml(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self =
            serde_yaml::from_str(content).map_err(|e| Error::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is invalid.
    pub async fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).await?;
        let config = Self::from_yaml(&content)?;
        tracing::debug!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Load configuration from a file, falling back to defaults if it does
    /// not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or is invalid.
    pub async fn load_or_default(path: &Path) -> Result<Self> {
        match fs::try_exists(path).await {
            Ok(true) => Self::load(path).await,
            Ok(false) => {
                tracing::debug!(path = %path.display(), "No configuration file, using defaults");
                Ok(Self::default())
            }
            Err(e) => Err(Error::Io(e)),
        }
    }

    /// Serialize the configuration as YAML.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    fn validate(&self) -> Result<()> {
        if self.max_tree_depth == Some(0) {
            return Err(Error::Config("max-tree-depth must be at least 1".to_string()));
        }
        Ok(())
    }
}
