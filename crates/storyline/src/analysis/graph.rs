//! Dependency graph construction.
//!
//! Builds the derived view of a story list: one node per story, with the
//! resolved dependency and dependent links. The graph has no lifecycle of its
//! own; it is rebuilt from scratch whenever the story list changes.
//!
//! # Edge Direction
//!
//! Edges point from **dependent -> dependency**: if `B` lists `A` in its
//! `dependencies`, the edge is `B -> A`, `A` appears in `B.dependencies` and
//! `B` appears in `A.dependents`.

use crate::domain::{Story, StoryId};
use petgraph::graph::{DiGraph, NodeIndex};
use std::collections::HashMap;

/// A story together with its computed position in the dependency graph.
#[derive(Debug, Clone, PartialEq)]
pub struct DependencyNode {
    /// The wrapped story
    pub story: Story,

    /// Length of the longest dependency chain ending at this story
    pub level: usize,

    /// Whether the story takes part in a dependency cycle
    pub has_circular: bool,

    /// Resolved dependencies, in declaration order
    pub dependencies: Vec<StoryId>,

    /// Stories that depend on this one, in input order
    pub dependents: Vec<StoryId>,
}

impl DependencyNode {
    fn new(story: Story) -> Self {
        Self {
            story,
            level: 0,
            has_circular: false,
            dependencies: Vec::new(),
            dependents: Vec::new(),
        }
    }

    /// Shorthand for the story ID.
    pub fn id(&self) -> &StoryId {
        &self.story.id
    }
}

/// Dependency graph over a set of stories.
///
/// Nodes keep the order of the input list, which is also the order the
/// level resolver starts its traversals in.
#[derive(Debug, Clone, Default)]
pub struct DependencyGraph {
    nodes: Vec<DependencyNode>,

    /// Story ID to position in `nodes`
    index: HashMap<StoryId, usize>,

    /// Resolved dependency positions per node, in declaration order
    pub(super) adjacency: Vec<Vec<usize>>,

    /// Mirror of the edges for petgraph algorithms.
    ///
    /// Node `i` of this graph is `nodes[i]`.
    pub(super) edges: DiGraph<usize, ()>,
}

impl DependencyGraph {
    /// Build the graph for `stories`.
    ///
    /// Dependencies naming a story outside the input are skipped; they
    /// usually point at stories hidden by the current filter. A story listed
    /// twice keeps its first occurrence, and a dependency declared twice is
    /// linked once. Levels are left at zero until
    /// [`resolve_levels`](super::levels::resolve_levels) runs.
    pub fn build(stories: &[Story]) -> Self {
        let mut graph = Self {
            nodes: Vec::with_capacity(stories.len()),
            index: HashMap::with_capacity(stories.len()),
            adjacency: Vec::with_capacity(stories.len()),
            edges: DiGraph::with_capacity(stories.len(), 0),
        };

        for story in stories {
            if graph.index.contains_key(&story.id) {
                tracing::warn!(story = %story.id, "Duplicate story id, keeping first occurrence");
                continue;
            }
            let position = graph.nodes.len();
            graph.index.insert(story.id.clone(), position);
            graph.nodes.push(DependencyNode::new(story.clone()));
            graph.adjacency.push(Vec::new());
            graph.edges.add_node(position);
        }

        let mut dangling = 0usize;
        for from in 0..graph.nodes.len() {
            let declared = graph.nodes[from].story.dependencies.clone();
            for dep_id in &declared {
                let Some(&to) = graph.index.get(dep_id) else {
                    tracing::debug!(
                        story = %graph.nodes[from].story.id,
                        dependency = %dep_id,
                        "Skipping dependency outside the story set"
                    );
                    dangling += 1;
                    continue;
                };
                if graph.adjacency[from].contains(&to) {
                    continue;
                }

                graph.adjacency[from].push(to);
                graph.edges.add_edge(NodeIndex::new(from), NodeIndex::new(to), ());

                let from_id = graph.nodes[from].story.id.clone();
                graph.nodes[from].dependencies.push(dep_id.clone());
                graph.nodes[to].dependents.push(from_id);
            }
        }

        tracing::debug!(
            nodes = graph.nodes.len(),
            edges = graph.edges.edge_count(),
            dangling,
            "Built dependency graph"
        );
        graph
    }

    /// Number of stories in the graph.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the graph has no stories.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Whether `id` is part of the graph.
    pub fn contains(&self, id: &StoryId) -> bool {
        self.index.contains_key(id)
    }

    /// Look up a node by story ID.
    pub fn get(&self, id: &StoryId) -> Option<&DependencyNode> {
        self.index.get(id).map(|&i| &self.nodes[i])
    }

    /// All nodes, in input order.
    pub fn nodes(&self) -> &[DependencyNode] {
        &self.nodes
    }

    pub(super) fn nodes_mut(&mut self) -> &mut [DependencyNode] {
        &mut self.nodes
    }

    /// Resolve a list of IDs to the stories present in the graph.
    pub fn resolve<'a>(&'a self, ids: &'a [StoryId]) -> impl Iterator<Item = &'a Story> + 'a {
        ids.iter().filter_map(|id| self.get(id)).map(|node| &node.story)
    }

    /// Number of resolved dependency edges.
    pub fn edge_count(&self) -> usize {
        self.edges.edge_count()
    }
}
