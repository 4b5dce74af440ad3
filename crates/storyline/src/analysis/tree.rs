//! Dependency tree expansion for display.
//!
//! Expands the dependencies (or dependents) of one story into a tree. Every
//! story is expanded at most once, so the tree holds at most one node per
//! story plus one per link. A story met again on its own branch is emitted as
//! a leaf marked `cycle`; one already expanded on another branch is emitted as
//! a leaf marked `seen`. Expand/collapse state is an explicit [`TreeOptions`]
//! input rather than anything held by the graph.

use super::graph::{DependencyGraph, DependencyNode};
use crate::domain::{Priority, StoryId, StoryStatus};
use serde::Serialize;
use std::collections::HashSet;

/// Which links the tree follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TreeDirection {
    /// What the root depends on
    #[default]
    Dependencies,

    /// What depends on the root
    Dependents,
}

/// Explicit view state for tree expansion.
#[derive(Debug, Clone, Default)]
pub struct TreeOptions {
    /// Which links to follow
    pub direction: TreeDirection,

    /// Maximum depth below the root (`None` = unlimited)
    pub max_depth: Option<usize>,

    /// Stories shown but not expanded
    pub collapsed: HashSet<StoryId>,
}

/// A node of an expanded dependency tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TreeNode {
    /// Story ID
    pub id: StoryId,
    /// Story title
    pub title: String,
    /// Story status
    pub status: StoryStatus,
    /// Story priority
    pub priority: Priority,
    /// Resolved level of the story
    pub level: usize,
    /// The story already appears higher up on this branch
    pub cycle: bool,
    /// The story was expanded elsewhere in the tree
    pub seen: bool,
    /// Children exist but were not expanded (collapsed or depth limit)
    pub truncated: bool,
    /// Expanded children
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    fn leaf(node: &DependencyNode) -> Self {
        Self {
            id: node.story.id.clone(),
            title: node.story.title.clone(),
            status: node.story.status,
            priority: node.story.priority,
            level: node.level,
            cycle: false,
            seen: false,
            truncated: false,
            children: Vec::new(),
        }
    }

    /// Total number of nodes in this subtree, including itself.
    pub fn size(&self) -> usize {
        1 + self.children.iter().map(TreeNode::size).sum::<usize>()
    }
}

/// Expand the tree rooted at `root`, or `None` if it is not in the graph.
pub fn dependency_tree(
    graph: &DependencyGraph,
    root: &StoryId,
    options: &TreeOptions,
) -> Option<TreeNode> {
    let node = graph.get(root)?;
    let mut walk = Walk {
        graph,
        options,
        branch: HashSet::new(),
        expanded: HashSet::new(),
    };
    Some(walk.expand(node, 0))
}

struct Walk<'a> {
    graph: &'a DependencyGraph,
    options: &'a TreeOptions,
    /// Stories on the path from the root to the node being expanded
    branch: HashSet<&'a StoryId>,
    /// Stories whose children are already in the tree
    expanded: HashSet<&'a StoryId>,
}

impl<'a> Walk<'a> {
    fn links(&self, node: &'a DependencyNode) -> &'a [StoryId] {
        match self.options.direction {
            TreeDirection::Dependencies => &node.dependencies,
            TreeDirection::Dependents => &node.dependents,
        }
    }

    fn expand(&mut self, node: &'a DependencyNode, depth: usize) -> TreeNode {
        let mut out = TreeNode::leaf(node);
        let links = self.links(node);
        if links.is_empty() {
            return out;
        }

        let depth_exhausted = self.options.max_depth.is_some_and(|max| depth >= max);
        if depth_exhausted || self.options.collapsed.contains(node.id()) {
            out.truncated = true;
            return out;
        }

        let graph = self.graph;
        self.branch.insert(node.id());
        self.expanded.insert(node.id());
        for child in links.iter().filter_map(|id| graph.get(id)) {
            if self.branch.contains(child.id()) {
                let mut repeat = TreeNode::leaf(child);
                repeat.cycle = true;
                out.children.push(repeat);
            } else if self.expanded.contains(child.id()) {
                let mut repeat = TreeNode::leaf(child);
                repeat.seen = true;
                out.children.push(repeat);
            } else {
                out.children.push(self.expand(child, depth + 1));
            }
        }
        self.branch.remove(node.id());

        out
    }
}
