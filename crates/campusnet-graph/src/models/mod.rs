//! Graph data models.
//!
//! This module provides the core data structures:
//! - [`Graph`]: named sites and validated undirected edges
//! - [`SpanningTree`]: result of a spanning tree computation
//! - [`NodeId`], [`ComponentId`]: index types

pub mod graph;
pub mod node;
pub mod tree;

pub use graph::{Edge, EdgeId, Graph, Node, Position};
pub use node::{ComponentId, NodeId};
pub use tree::{SpanningTree, TreeEdgeReport, TreeReport};
