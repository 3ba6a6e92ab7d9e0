//! Topological ordering of circuit nodes.
//!
//! Produces a total order such that every driver precedes everything it
//! drives, using Kahn's algorithm over the fan-in counts. The ready set is
//! a min-heap keyed on node index, so simultaneously-ready nodes are
//! consumed in ascending index order: the order is deterministic and
//! reproducible for identical graphs regardless of insertion order.

use crate::error::AnalysisError;
use crate::graph::CircuitGraph;
use crate::ids::NodeId;
use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// Computes a topological order of all nodes in the graph.
///
/// For every edge (u→v), u precedes v in the returned order. Fails with
/// [`AnalysisError::CombinationalLoop`] if the graph contains a cycle,
/// naming the lowest-indexed node whose dependencies never resolved.
/// The graph is not mutated.
pub fn topological_order(graph: &CircuitGraph) -> Result<Vec<NodeId>, AnalysisError> {
    let mut in_degree: Vec<usize> = graph.nodes().iter().map(|n| n.fanin.len()).collect();

    let mut ready: BinaryHeap<Reverse<u32>> = BinaryHeap::new();
    for node in graph.nodes() {
        if node.fanin.is_empty() {
            ready.push(Reverse(node.id.as_raw()));
        }
    }

    let mut order = Vec::with_capacity(graph.node_count());
    while let Some(Reverse(raw)) = ready.pop() {
        let id = NodeId::from_raw(raw);
        order.push(id);
        for &succ in &graph.node(id).fanout {
            let degree = &mut in_degree[succ.index()];
            *degree -= 1;
            if *degree == 0 {
                ready.push(Reverse(succ.as_raw()));
            }
        }
    }

    if order.len() < graph.node_count() {
        // Every unprocessed node sits on or downstream of a cycle.
        for node in graph.nodes() {
            if in_degree[node.id.index()] > 0 {
                return Err(AnalysisError::CombinationalLoop {
                    name: node.name.clone(),
                });
            }
        }
    }

    Ok(order)
}
