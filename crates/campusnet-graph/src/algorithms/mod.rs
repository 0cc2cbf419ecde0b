//! Graph algorithms.
//!
//! This module provides:
//! - [`union_find`]: Disjoint set data structure
//! - [`components`]: Connected component labelling
//! - [`kruskal`]: Kruskal's minimum spanning forest
//! - [`prim`]: Prim's minimum spanning tree

pub mod components;
pub mod kruskal;
pub mod prim;
pub mod union_find;

pub use components::{component_count, connected_components};
pub use kruskal::kruskal;
pub use prim::{prim, prim_with_config, PrimConfig};
pub use union_find::{DisjointSet, UnionFind};

use serde::Serialize;

use crate::models::{Graph, SpanningTree};

/// Minimum spanning tree algorithm selector.
///
/// Both variants accept the same [`Graph`]; on a connected graph they
/// produce trees of equal total weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MstAlgorithm {
    /// Edge sorting + union-find. Covers every component.
    Kruskal,
    /// Heap-driven growth from the first node. Covers its component only.
    Prim,
}

impl MstAlgorithm {
    /// All algorithms, in a fixed order.
    pub const ALL: [MstAlgorithm; 2] = [MstAlgorithm::Kruskal, MstAlgorithm::Prim];

    /// Run the algorithm with default settings.
    pub fn run(self, graph: &Graph) -> SpanningTree {
        match self {
            MstAlgorithm::Kruskal => kruskal(graph),
            MstAlgorithm::Prim => prim(graph),
        }
    }

    /// Lowercase algorithm name.
    pub const fn name(self) -> &'static str {
        match self {
            MstAlgorithm::Kruskal => "kruskal",
            MstAlgorithm::Prim => "prim",
        }
    }
}

impl std::fmt::Display for MstAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
