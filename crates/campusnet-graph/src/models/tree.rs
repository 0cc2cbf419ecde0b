//! Spanning tree (or forest) produced by an MST algorithm.

use std::collections::hash_map::Entry;
use std::collections::{HashMap, VecDeque};

use serde::Serialize;

use super::graph::{Edge, Graph};
use super::node::NodeId;
use crate::algorithms::union_find::UnionFind;
use crate::algorithms::MstAlgorithm;
use crate::Result;

/// Relative tolerance used when comparing total weights of two trees.
const WEIGHT_TOLERANCE: f64 = 1e-9;

/// Selected nodes and edges of a minimum spanning tree.
///
/// `nodes` lists every node the algorithm covered, in the order it covered
/// them. `edges` lists selected edges in selection order, and
/// `total_weight` is their summed weight. A fresh value is returned for
/// every algorithm run.
#[derive(Debug, Clone, PartialEq)]
pub struct SpanningTree {
    /// Algorithm that produced this tree.
    pub algorithm: MstAlgorithm,
    /// Covered nodes.
    pub nodes: Vec<NodeId>,
    /// Selected edges.
    pub edges: Vec<Edge>,
    /// Sum of selected edge weights.
    pub total_weight: f64,
}

impl SpanningTree {
    /// Empty result for the given algorithm.
    pub fn new(algorithm: MstAlgorithm) -> Self {
        Self {
            algorithm,
            nodes: Vec::new(),
            edges: Vec::new(),
            total_weight: 0.0,
        }
    }

    pub(crate) fn with_capacity(algorithm: MstAlgorithm, nodes: usize) -> Self {
        Self {
            algorithm,
            nodes: Vec::with_capacity(nodes),
            edges: Vec::with_capacity(nodes.saturating_sub(1)),
            total_weight: 0.0,
        }
    }

    pub(crate) fn push_node(&mut self, node: NodeId) {
        self.nodes.push(node);
    }

    pub(crate) fn push_edge(&mut self, edge: Edge) {
        self.total_weight += edge.weight;
        self.edges.push(edge);
    }

    /// Number of covered nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of selected edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Check if the tree covers no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Check if a node is covered.
    pub fn contains_node(&self, node: NodeId) -> bool {
        self.nodes.contains(&node)
    }

    /// Check whether every node of `graph` is covered exactly once.
    pub fn is_spanning(&self, graph: &Graph) -> bool {
        if self.nodes.len() != graph.node_count() {
            return false;
        }
        let mut seen = vec![false; graph.node_count()];
        for node in &self.nodes {
            match seen.get_mut(node.index()) {
                Some(slot) if !*slot => *slot = true,
                _ => return false,
            }
        }
        true
    }

    /// Check that the selected edges contain no cycle.
    ///
    /// Replays every edge through a fresh [`UnionFind`]; a union that finds
    /// both endpoints already connected means a cycle.
    pub fn is_forest(&self) -> bool {
        let n = self
            .nodes
            .iter()
            .chain(self.edges.iter().flat_map(|e| [&e.source, &e.target]))
            .map(|id| id.index() + 1)
            .max()
            .unwrap_or(0);

        let mut uf = UnionFind::new(n);
        self.edges.iter().all(|e| uf.union(e.source, e.target))
    }

    /// Check whether two trees have the same total weight, up to rounding.
    pub fn same_weight(&self, other: &SpanningTree) -> bool {
        // Exact match first: overflowed totals are both infinite
        if self.total_weight == other.total_weight {
            return true;
        }
        if !self.total_weight.is_finite() || !other.total_weight.is_finite() {
            return false;
        }
        let scale = self.total_weight.abs().max(other.total_weight.abs()).max(1.0);
        (self.total_weight - other.total_weight).abs() <= WEIGHT_TOLERANCE * scale
    }

    /// The unique path between two nodes along tree edges.
    ///
    /// Returns `None` if either node is not covered or the nodes lie in
    /// different trees of a forest.
    pub fn path(&self, from: NodeId, to: NodeId) -> Option<Vec<NodeId>> {
        if !self.contains_node(from) || !self.contains_node(to) {
            return None;
        }

        let mut links: HashMap<NodeId, Vec<NodeId>> = HashMap::new();
        for edge in &self.edges {
            links.entry(edge.source).or_default().push(edge.target);
            links.entry(edge.target).or_default().push(edge.source);
        }

        let mut previous: HashMap<NodeId, NodeId> = HashMap::new();
        let mut queue = VecDeque::from([from]);
        previous.insert(from, from);

        while let Some(node) = queue.pop_front() {
            if node == to {
                let mut path = vec![to];
                let mut current = to;
                while current != from {
                    current = previous[&current];
                    path.push(current);
                }
                path.reverse();
                return Some(path);
            }

            for &next in links.get(&node).into_iter().flatten() {
                if let Entry::Vacant(slot) = previous.entry(next) {
                    slot.insert(node);
                    queue.push_back(next);
                }
            }
        }

        None
    }

    /// Name-resolved report for renderers and JSON output.
    pub fn report(&self, graph: &Graph) -> Result<TreeReport> {
        let nodes = self
            .nodes
            .iter()
            .map(|&id| graph.name(id).map(str::to_string))
            .collect::<Result<Vec<_>>>()?;

        let edges = self
            .edges
            .iter()
            .map(|edge| -> Result<TreeEdgeReport> {
                Ok(TreeEdgeReport {
                    a: graph.name(edge.source)?.to_string(),
                    b: graph.name(edge.target)?.to_string(),
                    weight: edge.weight,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(TreeReport {
            algorithm: self.algorithm.name().to_string(),
            nodes,
            edges,
            total_weight: self.total_weight,
        })
    }
}

/// Serializable spanning tree with node names.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TreeReport {
    pub algorithm: String,
    pub nodes: Vec<String>,
    pub edges: Vec<TreeEdgeReport>,
    pub total_weight: f64,
}

/// One selected link in a [`TreeReport`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TreeEdgeReport {
    pub a: String,
    pub b: String,
    pub weight: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::graph::Position;

    fn chain(n: u32) -> SpanningTree {
        let mut tree = SpanningTree::new(MstAlgorithm::Kruskal);
        for i in 0..n {
            tree.push_node(NodeId(i));
        }
        for i in 1..n {
            tree.push_edge(Edge::new(NodeId(i - 1), NodeId(i), i as f64));
        }
        tree
    }

    #[test]
    fn test_empty_tree() {
        let tree = SpanningTree::new(MstAlgorithm::Prim);
        assert!(tree.is_empty());
        assert_eq!(tree.edge_count(), 0);
        assert_eq!(tree.total_weight, 0.0);
        assert!(tree.is_forest());
        assert!(tree.is_spanning(&Graph::new()));
    }

    #[test]
    fn test_push_edge_accumulates_weight() {
        let tree = chain(4);
        assert_eq!(tree.node_count(), 4);
        assert_eq!(tree.edge_count(), 3);
        assert_eq!(tree.total_weight, 6.0);
    }

    #[test]
    fn test_cycle_detected() {
        let mut tree = chain(3);
        assert!(tree.is_forest());

        tree.push_edge(Edge::new(NodeId(2), NodeId(0), 1.0));
        assert!(!tree.is_forest());
    }

    #[test]
    fn test_path_along_chain() {
        let tree = chain(5);

        assert_eq!(
            tree.path(NodeId(1), NodeId(4)),
            Some(vec![NodeId(1), NodeId(2), NodeId(3), NodeId(4)])
        );
        assert_eq!(
            tree.path(NodeId(3), NodeId(0)),
            Some(vec![NodeId(3), NodeId(2), NodeId(1), NodeId(0)])
        );
        assert_eq!(tree.path(NodeId(2), NodeId(2)), Some(vec![NodeId(2)]));
        assert_eq!(tree.path(NodeId(0), NodeId(9)), None);
    }

    #[test]
    fn test_path_across_forest_is_none() {
        let mut tree = SpanningTree::new(MstAlgorithm::Kruskal);
        for i in 0..4 {
            tree.push_node(NodeId(i));
        }
        tree.push_edge(Edge::new(NodeId(0), NodeId(1), 1.0));
        tree.push_edge(Edge::new(NodeId(2), NodeId(3), 1.0));

        assert!(tree.path(NodeId(0), NodeId(1)).is_some());
        assert_eq!(tree.path(NodeId(0), NodeId(3)), None);
    }

    #[test]
    fn test_is_spanning() {
        let mut graph = Graph::new();
        for name in ["A", "B", "C"] {
            graph.add_node(name, Position::default()).unwrap();
        }

        assert!(chain(3).is_spanning(&graph));
        assert!(!chain(2).is_spanning(&graph));

        let mut repeated = chain(2);
        repeated.push_node(NodeId(0));
        assert!(!repeated.is_spanning(&graph));
    }

    #[test]
    fn test_same_weight_tolerates_rounding() {
        let mut a = SpanningTree::new(MstAlgorithm::Kruskal);
        let mut b = SpanningTree::new(MstAlgorithm::Prim);
        a.total_weight = 0.1 + 0.2;
        b.total_weight = 0.3;
        assert!(a.same_weight(&b));

        b.total_weight = 0.31;
        assert!(!a.same_weight(&b));
    }

    #[test]
    fn test_same_weight_with_overflowed_totals() {
        let mut graph = Graph::new();
        for name in ["A", "B", "C"] {
            graph.add_node(name, Position::default()).unwrap();
        }
        graph.add_edge("A", "B", f64::MAX).unwrap();
        graph.add_edge("B", "C", f64::MAX).unwrap();

        let k = crate::kruskal(&graph);
        let p = crate::prim(&graph);
        assert_eq!(k.total_weight, f64::INFINITY);
        assert_eq!(p.total_weight, f64::INFINITY);
        assert!(k.same_weight(&p));

        let mut finite = SpanningTree::new(MstAlgorithm::Prim);
        finite.total_weight = f64::MAX;
        assert!(!k.same_weight(&finite));
    }

    #[test]
    fn test_report_uses_names() {
        let mut graph = Graph::new();
        let a = graph.add_node("Library", Position::default()).unwrap();
        let b = graph.add_node("Admin", Position::default()).unwrap();
        graph.add_edge_by_id(a, b, 50000.0).unwrap();

        let mut tree = SpanningTree::new(MstAlgorithm::Prim);
        tree.push_node(a);
        tree.push_node(b);
        tree.push_edge(Edge::new(a, b, 50000.0));

        let report = tree.report(&graph).unwrap();
        assert_eq!(report.algorithm, "prim");
        assert_eq!(report.nodes, vec!["Library", "Admin"]);
        assert_eq!(report.edges[0].a, "Library");
        assert_eq!(report.edges[0].b, "Admin");
        assert_eq!(report.total_weight, 50000.0);

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["edges"][0]["weight"], 50000.0);
    }
}
