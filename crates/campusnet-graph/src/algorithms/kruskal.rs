//! Kruskal's minimum spanning forest.
//!
//! Edges are visited in ascending weight order and kept whenever they join
//! two different sets of a [`UnionFind`]. Every edge is scanned, so a
//! disconnected graph yields one minimum tree per component.

use tracing::{debug, trace};

use crate::models::{Graph, SpanningTree};

use super::union_find::UnionFind;
use super::MstAlgorithm;

/// Minimum spanning forest via Kruskal's algorithm.
///
/// The result covers every node of `graph`. Edges of equal weight are
/// considered in insertion order, so repeated runs select the same edges.
///
/// Time: O(E log E) for sorting + O(E α(V)) for union-find.
pub fn kruskal(graph: &Graph) -> SpanningTree {
    let n = graph.node_count();
    let mut tree = SpanningTree::with_capacity(MstAlgorithm::Kruskal, n);
    for id in graph.node_ids() {
        tree.push_node(id);
    }

    // Stable sort: ties keep insertion order
    let mut edges: Vec<_> = graph.edges().iter().collect();
    edges.sort_by(|a, b| a.weight.total_cmp(&b.weight));

    let mut uf = UnionFind::new(n);
    for edge in edges {
        if uf.union(edge.source, edge.target) {
            trace!(
                source = %edge.source,
                target = %edge.target,
                weight = edge.weight,
                "kruskal: edge accepted"
            );
            tree.push_edge(*edge);
        }
    }

    debug!(
        nodes = n,
        edges = graph.edge_count(),
        selected = tree.edge_count(),
        components = uf.num_components(),
        total_weight = tree.total_weight,
        "kruskal: spanning forest complete"
    );

    tree
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Edge, NodeId, Position};

    fn graph_with(names: &[&str], links: &[(&str, &str, f64)]) -> Graph {
        let mut graph = Graph::new();
        for name in names {
            graph.add_node(*name, Position::default()).unwrap();
        }
        for (a, b, w) in links {
            graph.add_edge(a, b, *w).unwrap();
        }
        graph
    }

    #[test]
    fn test_triangle() {
        let graph = graph_with(
            &["A", "B", "C"],
            &[("A", "B", 1.0), ("B", "C", 2.0), ("A", "C", 3.0)],
        );

        let tree = kruskal(&graph);
        assert_eq!(tree.total_weight, 3.0);
        assert_eq!(
            tree.edges,
            vec![
                Edge::new(NodeId(0), NodeId(1), 1.0),
                Edge::new(NodeId(1), NodeId(2), 2.0),
            ]
        );
        assert!(tree.is_spanning(&graph));
        assert_eq!(tree.algorithm, MstAlgorithm::Kruskal);
    }

    #[test]
    fn test_ties_follow_insertion_order() {
        let graph = graph_with(
            &["A", "B", "C"],
            &[("A", "B", 1.0), ("B", "C", 1.0), ("A", "C", 1.0)],
        );

        let tree = kruskal(&graph);
        assert_eq!(tree.total_weight, 2.0);
        assert_eq!(tree.edges[0], graph.edges()[0]);
        assert_eq!(tree.edges[1], graph.edges()[1]);
    }

    #[test]
    fn test_disconnected_graph_yields_forest() {
        let graph = graph_with(
            &["A", "B", "C", "D"],
            &[("A", "B", 1.0), ("C", "D", 1.0)],
        );

        let tree = kruskal(&graph);
        assert_eq!(tree.edge_count(), 2);
        assert_eq!(tree.node_count(), 4);
        assert_eq!(tree.total_weight, 2.0);
        assert!(tree.is_forest());
    }

    #[test]
    fn test_empty_graph() {
        let tree = kruskal(&Graph::new());
        assert!(tree.is_empty());
        assert_eq!(tree.edge_count(), 0);
        assert_eq!(tree.total_weight, 0.0);
    }

    #[test]
    fn test_nodes_without_edges() {
        let graph = graph_with(&["A", "B", "C"], &[]);

        let tree = kruskal(&graph);
        assert_eq!(tree.node_count(), 3);
        assert_eq!(tree.edge_count(), 0);
        assert_eq!(tree.total_weight, 0.0);
    }

    #[test]
    fn test_skips_heavier_cycle_edge() {
        // Square with a heavy diagonal
        let graph = graph_with(
            &["A", "B", "C", "D"],
            &[
                ("A", "B", 1.0),
                ("B", "C", 1.0),
                ("C", "D", 1.0),
                ("D", "A", 4.0),
                ("A", "C", 5.0),
            ],
        );

        let tree = kruskal(&graph);
        assert_eq!(tree.total_weight, 3.0);
        assert!(tree.edges.iter().all(|e| e.weight == 1.0));
    }

    #[test]
    fn test_repeated_runs_are_identical() {
        let graph = graph_with(
            &["A", "B", "C", "D"],
            &[
                ("A", "B", 2.0),
                ("B", "C", 2.0),
                ("C", "D", 2.0),
                ("D", "A", 2.0),
            ],
        );

        assert_eq!(kruskal(&graph), kruskal(&graph));
    }
}
