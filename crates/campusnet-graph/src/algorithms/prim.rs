//! Prim's minimum spanning tree.
//!
//! Grows a single tree from a start node. A binary heap holds candidate
//! `(weight, node, predecessor)` entries; entries whose node was committed
//! after they were pushed are discarded when popped (lazy deletion) instead
//! of being updated in place.
//!
//! Only the component containing the start node is covered. On a
//! disconnected graph this differs from [`kruskal`](super::kruskal::kruskal),
//! which returns a forest over every component.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use tracing::{debug, trace};

use crate::models::{Edge, Graph, NodeId, SpanningTree};
use crate::{GraphError, Result};

use super::MstAlgorithm;

/// Prim configuration.
#[derive(Debug, Clone, Default)]
pub struct PrimConfig {
    /// Node to grow the tree from. Defaults to the first registered node.
    pub start: Option<NodeId>,
}

impl PrimConfig {
    /// Create new Prim configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the start node.
    pub fn with_start(mut self, start: NodeId) -> Self {
        self.start = Some(start);
        self
    }
}

/// Heap entry: a node that could join the tree via `predecessor`.
#[derive(Debug, Clone, Copy)]
struct Candidate {
    weight: f64,
    /// Push order, breaks weight ties so runs are reproducible.
    seq: u64,
    node: NodeId,
    predecessor: Option<NodeId>,
}

impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Candidate {}

impl Ord for Candidate {
    /// Reversed so that `BinaryHeap` pops the lightest, then oldest, entry.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .weight
            .total_cmp(&self.weight)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Minimum spanning tree via Prim's algorithm, started at the first node.
///
/// An empty graph yields an empty tree.
///
/// Time: O(E log E) with lazy deletion (O(E log V) for simple graphs).
pub fn prim(graph: &Graph) -> SpanningTree {
    match graph.node_ids().next() {
        Some(start) => grow(graph, start),
        None => SpanningTree::new(MstAlgorithm::Prim),
    }
}

/// Prim's algorithm with configuration.
///
/// # Errors
///
/// Returns [`GraphError::InvalidNodeId`] if the configured start node is not
/// in the graph.
pub fn prim_with_config(graph: &Graph, config: &PrimConfig) -> Result<SpanningTree> {
    match config.start {
        Some(start) if !graph.contains(start) => Err(GraphError::InvalidNodeId(start.get())),
        Some(start) => Ok(grow(graph, start)),
        None => Ok(prim(graph)),
    }
}

fn grow(graph: &Graph, start: NodeId) -> SpanningTree {
    let n = graph.node_count();

    let mut tree = SpanningTree::with_capacity(MstAlgorithm::Prim, n);
    let mut committed = vec![false; n];
    let mut remaining = n;
    let mut heap = BinaryHeap::with_capacity(2 * graph.edge_count() + 1);
    let mut seq = 0u64;
    let mut stale = 0usize;

    heap.push(Candidate {
        weight: 0.0,
        seq,
        node: start,
        predecessor: None,
    });

    while let Some(candidate) = heap.pop() {
        let node = candidate.node;
        if committed[node.index()] {
            stale += 1;
            continue;
        }

        committed[node.index()] = true;
        remaining -= 1;
        tree.push_node(node);

        if let Some(predecessor) = candidate.predecessor {
            trace!(
                source = %predecessor,
                target = %node,
                weight = candidate.weight,
                "prim: edge accepted"
            );
            tree.push_edge(Edge::new(predecessor, node, candidate.weight));
        }

        if remaining == 0 {
            break;
        }

        for (neighbor, weight) in graph.neighbors(node) {
            if !committed[neighbor.index()] {
                seq += 1;
                heap.push(Candidate {
                    weight,
                    seq,
                    node: neighbor,
                    predecessor: Some(node),
                });
            }
        }
    }

    debug!(
        nodes = n,
        edges = graph.edge_count(),
        start = %start,
        reached = tree.node_count(),
        stale_entries = stale,
        total_weight = tree.total_weight,
        "prim: spanning tree complete"
    );

    tree
}
