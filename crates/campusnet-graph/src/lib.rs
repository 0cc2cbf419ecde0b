//! Minimum spanning tree engine for campus network planning.
//!
//! Sites (buildings) are nodes, candidate links are weighted undirected
//! edges, and the cheapest set of links that keeps every site reachable is a
//! minimum spanning tree. This crate provides:
//!
//! - **Graph**: named nodes with renderer positions and validated, costed edges
//! - **Union-Find**: disjoint sets with path compression and union by rank
//! - **Kruskal**: edge sorting plus union-find, yields a spanning forest
//! - **Prim**: lazy-deletion binary heap growth from a start node
//! - **SpanningTree**: the selected edges, total weight and tree paths
//!
//! # Example
//!
//! ```
//! use campusnet_graph::{kruskal, prim, Graph, Position};
//!
//! let mut graph = Graph::new();
//! for name in ["A", "B", "C"] {
//!     graph.add_node(name, Position::default()).unwrap();
//! }
//! graph.add_edge("A", "B", 1.0).unwrap();
//! graph.add_edge("B", "C", 2.0).unwrap();
//! graph.add_edge("A", "C", 3.0).unwrap();
//!
//! let tree = kruskal(&graph);
//! assert_eq!(tree.edge_count(), 2);
//! assert_eq!(tree.total_weight, 3.0);
//! assert_eq!(prim(&graph).total_weight, tree.total_weight);
//! ```

pub mod algorithms;
pub mod models;
pub mod sample;

// Re-export main types
pub use algorithms::components::{component_count, connected_components};
pub use algorithms::kruskal::kruskal;
pub use algorithms::prim::{prim, prim_with_config, PrimConfig};
pub use algorithms::union_find::{DisjointSet, UnionFind};
pub use algorithms::MstAlgorithm;
pub use models::graph::{Edge, EdgeId, Graph, Node, Position};
pub use models::node::{ComponentId, NodeId};
pub use models::tree::{SpanningTree, TreeEdgeReport, TreeReport};
pub use sample::sample_campus;

/// Graph construction error types.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GraphError {
    /// Node ID outside the graph.
    #[error("Invalid node ID: {0}")]
    InvalidNodeId(u32),

    /// Node name that was never registered.
    #[error("Unknown node: {0}")]
    UnknownNode(String),

    /// Node name registered twice.
    #[error("Duplicate node: {0}")]
    DuplicateNode(String),

    /// Second edge between the same unordered pair.
    #[error("Duplicate edge between {a} and {b}")]
    DuplicateEdge { a: String, b: String },

    /// Edge from a node to itself.
    #[error("Self loop on node: {0}")]
    SelfLoop(String),

    /// Negative, NaN or infinite edge weight.
    #[error("Invalid weight {weight} on edge {a} - {b}")]
    InvalidWeight { a: String, b: String, weight: f64 },
}

/// Result type for graph operations.
pub type Result<T> = std::result::Result<T, GraphError>;
