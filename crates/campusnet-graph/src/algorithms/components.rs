//! Connected components of a site graph.

use crate::models::{ComponentId, Graph};

use super::union_find::UnionFind;

/// Label every node of `graph` with its connected component.
///
/// Returns a vector where `result[i]` is the component of node i. Labels are
/// assigned 0, 1, 2, ... in order of each component's first node.
pub fn connected_components(graph: &Graph) -> Vec<ComponentId> {
    union_all(graph).component_ids()
}

/// Number of connected components (0 for an empty graph).
pub fn component_count(graph: &Graph) -> usize {
    union_all(graph).num_components()
}

fn union_all(graph: &Graph) -> UnionFind {
    let mut uf = UnionFind::new(graph.node_count());
    for edge in graph.edges() {
        uf.union(edge.source, edge.target);
    }
    uf
}
