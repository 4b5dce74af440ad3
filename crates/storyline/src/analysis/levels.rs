//! Level and cycle resolution.
//!
//! Assigns every node its level (the length of the longest dependency chain
//! ending at it) and flags the nodes that sit on a dependency cycle.
//!
//! # Algorithm
//!
//! Depth-first traversal with an explicit stack, started from every node not
//! yet finalized, in graph order. Nodes are `Visiting` while on the stack and
//! `Visited` once their level is final, so each node is expanded once and the
//! whole pass is O(V + E).
//!
//! Reaching a `Visiting` node means the walk closed a cycle, and the closing
//! edge is not followed: it contributes no depth. A back edge alone does not
//! reveal every story on the cycle (the cycle may also pass through nodes
//! finalized earlier), so `has_circular` is taken from the cyclic strongly
//! connected components instead. A story that depends on itself is the
//! one-node case.

use super::cycles::cyclic_components;
use super::graph::DependencyGraph;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    Unvisited,
    Visiting,
    Visited,
}

#[derive(Debug)]
struct Frame {
    node: usize,
    /// Next position in the node's adjacency list to explore
    next: usize,
    /// Level accumulated from finalized dependencies so far
    level: usize,
}

impl Frame {
    fn new(node: usize) -> Self {
        Self {
            node,
            next: 0,
            level: 0,
        }
    }
}

/// Compute `level` and `has_circular` for every node in place.
///
/// Running it again on the same graph yields the same result.
pub fn resolve_levels(graph: &mut DependencyGraph) {
    let count = graph.len();
    let mut marks = vec![Mark::Unvisited; count];
    let mut levels = vec![0usize; count];
    let mut stack: Vec<Frame> = Vec::new();

    for root in 0..count {
        if marks[root] != Mark::Unvisited {
            continue;
        }
        marks[root] = Mark::Visiting;
        stack.push(Frame::new(root));

        while let Some(frame) = stack.last_mut() {
            let node = frame.node;
            let Some(&dep) = graph.adjacency[node].get(frame.next) else {
                // All dependencies explored: finalize this node
                let level = frame.level;
                stack.pop();
                levels[node] = level;
                marks[node] = Mark::Visited;
                if let Some(parent) = stack.last_mut() {
                    parent.level = parent.level.max(level + 1);
                }
                continue;
            };
            frame.next += 1;

            match marks[dep] {
                Mark::Unvisited => {
                    marks[dep] = Mark::Visiting;
                    stack.push(Frame::new(dep));
                }
                // Back edge: closes a cycle, adds no depth
                Mark::Visiting => {}
                Mark::Visited => {
                    frame.level = frame.level.max(levels[dep] + 1);
                }
            }
        }
    }

    let mut circular = vec![false; count];
    for component in cyclic_components(graph) {
        for position in component {
            circular[position] = true;
        }
    }

    let mut flagged = 0usize;
    for (i, node) in graph.nodes_mut().iter_mut().enumerate() {
        node.level = levels[i];
        node.has_circular = circular[i];
        flagged += usize::from(circular[i]);
    }

    tracing::debug!(
        nodes = count,
        max_level = levels.iter().max().copied().unwrap_or(0),
        circular = flagged,
        "Resolved dependency levels"
    );
}
