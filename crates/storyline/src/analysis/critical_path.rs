//! Critical path extraction.
//!
//! The critical path is the longest dependency chain in a resolved graph,
//! returned root first. It is found by starting at the deepest node and
//! repeatedly stepping to its deepest dependency.

use super::graph::{DependencyGraph, DependencyNode};
use crate::domain::Story;
use serde::{Deserialize, Serialize};

/// Rule for choosing between nodes of equal level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TieBreak {
    /// Smallest story ID wins
    #[default]
    Lexicographic,

    /// First node in input (or declaration) order wins
    InputOrder,
}

/// The critical path together with its totals.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CriticalPath {
    /// Stories from the root to the deepest story
    pub stories: Vec<Story>,

    /// Sum of story points along the path
    pub total_points: f64,

    /// Number of stories not yet done along the path
    pub remaining: usize,
}

impl CriticalPath {
    /// Number of stories on the path.
    pub fn len(&self) -> usize {
        self.stories.len()
    }

    /// Whether the path is empty (only for an empty graph).
    pub fn is_empty(&self) -> bool {
        self.stories.is_empty()
    }
}

/// Extract the critical path from a graph whose levels have been resolved.
///
/// Each step moves to a dependency whose level is strictly below the current
/// node's, so the walk terminates on cyclic graphs too, and the result always
/// holds `1 + max(level)` stories.
pub fn critical_path(graph: &DependencyGraph, tie_break: TieBreak) -> Vec<Story> {
    let Some(mut current) = deepest(graph.nodes().iter(), tie_break) else {
        return Vec::new();
    };

    let mut path = vec![current.story.clone()];
    loop {
        let candidates = current
            .dependencies
            .iter()
            .filter_map(|id| graph.get(id))
            .filter(|dep| dep.level < current.level);
        let Some(next) = deepest(candidates, tie_break) else {
            break;
        };
        path.push(next.story.clone());
        current = next;
    }

    path.reverse();
    path
}

/// Summarize a path into a [`CriticalPath`].
pub fn summarize_path(stories: Vec<Story>) -> CriticalPath {
    let total_points = stories.iter().map(Story::points).sum();
    let remaining = stories.iter().filter(|s| !s.status.is_done()).count();
    CriticalPath {
        stories,
        total_points,
        remaining,
    }
}

fn deepest<'a>(
    nodes: impl Iterator<Item = &'a DependencyNode>,
    tie_break: TieBreak,
) -> Option<&'a DependencyNode> {
    nodes.fold(None, |best, node| match best {
        None => Some(node),
        Some(best) if node.level > best.level => Some(node),
        Some(best)
            if node.level == best.level
                && tie_break == TieBreak::Lexicographic
                && node.id() < best.id() =>
        {
            Some(node)
        }
        keep => keep,
    })
}
