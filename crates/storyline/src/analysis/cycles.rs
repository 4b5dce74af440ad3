//! Cycle reporting.
//!
//! Cycles are the strongly connected components of the dependency graph
//! (petgraph's Tarjan implementation). The level resolver flags exactly the
//! members of these components.

use super::graph::DependencyGraph;
use crate::domain::StoryId;
use petgraph::algo::tarjan_scc;
use serde::Serialize;

/// A group of stories that depend on each other in a loop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Cycle {
    /// Member story IDs, sorted
    pub members: Vec<StoryId>,
}

/// Strongly connected components that form a cycle, as node positions.
///
/// A component counts if it has more than one member, or a single member
/// that depends on itself.
pub(super) fn cyclic_components(graph: &DependencyGraph) -> Vec<Vec<usize>> {
    tarjan_scc(&graph.edges)
        .into_iter()
        .filter(|component| match component.as_slice() {
            [single] => graph.edges.contains_edge(*single, *single),
            _ => true,
        })
        .map(|component| component.into_iter().map(|ix| graph.edges[ix]).collect())
        .collect()
}

/// Find every dependency cycle in the graph.
///
/// Members are sorted by ID and cycles by their first member.
pub fn find_cycles(graph: &DependencyGraph) -> Vec<Cycle> {
    let mut cycles: Vec<Cycle> = cyclic_components(graph)
        .into_iter()
        .map(|component| {
            let mut members: Vec<StoryId> = component
                .into_iter()
                .map(|position| graph.nodes()[position].id().clone())
                .collect();
            members.sort();
            Cycle { members }
        })
        .collect();

    cycles.sort_by(|a, b| a.members.cmp(&b.members));
    cycles
}
