//! Story dependency analysis.
//!
//! Given a story list this module computes, from scratch on every call:
//!
//! - [`graph`]: the dependency graph (dependencies and dependents per story)
//! - [`levels`]: per-story levels and cycle flags
//! - [`critical_path`]: the longest dependency chain
//! - [`blocked`]: stories waiting on unfinished dependencies, and ready ones
//! - [`cycles`]: the individual dependency cycles
//! - [`tree`]: a dependency tree around one story, for display
//!
//! Everything here is synchronous and pure: no caching, no shared state.
//! Malformed references and cycles never fail the computation; they are
//! skipped or flagged on the result.
//!
//! # Example
//!
//! ```
//! use storyline::analysis::{Analysis, TieBreak};
//! use storyline::config::AnalysisConfig;
//! use storyline::domain::{Story, StoryFilter, StoryStatus};
//!
//! let stories = vec![
//!     Story::new("A", Vec::<&str>::new()).with_status(StoryStatus::Todo),
//!     Story::new("B", ["A"]),
//!     Story::new("C", ["B"]),
//! ];
//! let analysis = Analysis::run(&stories, &StoryFilter::default(), &AnalysisConfig::default());
//!
//! let path: Vec<&str> = analysis.critical_path.stories.iter().map(|s| s.id.as_str()).collect();
//! assert_eq!(path, vec!["A", "B", "C"]);
//! assert_eq!(analysis.blocked.len(), 2);
//! ```

pub mod blocked;
pub mod critical_path;
pub mod cycles;
pub mod graph;
pub mod levels;
pub mod tree;

pub use blocked::{blocked_in_view, blocked_stories, blockers_of, ready_stories};
pub use critical_path::{CriticalPath, TieBreak, critical_path, summarize_path};
pub use cycles::{Cycle, find_cycles};
pub use graph::{DependencyGraph, DependencyNode};
pub use levels::resolve_levels;
pub use tree::{TreeDirection, TreeNode, TreeOptions, dependency_tree};

use crate::config::AnalysisConfig;
use crate::domain::{Story, StoryFilter};
use std::collections::BTreeMap;

/// Build the dependency graph for `stories` and resolve its levels.
pub fn analyze_graph(stories: &[Story]) -> DependencyGraph {
    let mut graph = DependencyGraph::build(stories);
    resolve_levels(&mut graph);
    graph
}

/// Full analysis of one story view.
#[derive(Debug, Clone)]
pub struct Analysis {
    /// Resolved graph over the filtered view
    pub graph: DependencyGraph,

    /// Longest dependency chain in the view
    pub critical_path: CriticalPath,

    /// Stories of the view blocked by unfinished dependencies
    pub blocked: Vec<Story>,

    /// Stories of the view that can be started now
    pub ready: Vec<Story>,

    /// Dependency cycles inside the view
    pub cycles: Vec<Cycle>,

    /// Number of stories before filtering
    pub total_stories: usize,
}

impl Analysis {
    /// Run every analysis over the stories selected by `filter`.
    ///
    /// The graph, levels, critical path and cycles only see the filtered
    /// view. Blocked and ready stories are drawn from the view but judged
    /// against the statuses of the full list.
    pub fn run(all: &[Story], filter: &StoryFilter, config: &AnalysisConfig) -> Self {
        let view = filter.apply(all);
        let graph = analyze_graph(&view);
        let critical_path = summarize_path(critical_path(&graph, config.tie_break));
        let blocked = blocked_in_view(&view, all);
        let ready = ready_stories(&view, all);
        let cycles = find_cycles(&graph);

        tracing::debug!(
            total = all.len(),
            view = view.len(),
            critical_path = critical_path.len(),
            blocked = blocked.len(),
            cycles = cycles.len(),
            "Analysis complete"
        );

        Self {
            graph,
            critical_path,
            blocked,
            ready,
            cycles,
            total_stories: all.len(),
        }
    }

    /// Highest level in the view, `None` when the view is empty.
    pub fn max_level(&self) -> Option<usize> {
        self.graph.nodes().iter().map(|n| n.level).max()
    }

    /// Number of stories per level.
    pub fn level_histogram(&self) -> BTreeMap<usize, usize> {
        let mut histogram = BTreeMap::new();
        for node in self.graph.nodes() {
            *histogram.entry(node.level).or_insert(0) += 1;
        }
        histogram
    }

    /// Nodes flagged as part of a cycle.
    pub fn circular_nodes(&self) -> impl Iterator<Item = &DependencyNode> {
        self.graph.nodes().iter().filter(|n| n.has_circular)
    }
}
