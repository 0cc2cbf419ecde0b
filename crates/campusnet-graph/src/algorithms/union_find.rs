//! Disjoint sets for cycle detection while a spanning forest is built.
//!
//! `find` walks to the root iteratively and then rewrites every visited
//! parent pointer to the root, so deep chains never grow the call stack.

use std::cmp::Ordering;

use crate::models::{ComponentId, NodeId};

/// Disjoint sets over dense node ids.
///
/// Path compression in [`find`](Self::find) and union by rank keep every
/// operation near constant amortized time.
#[derive(Debug, Clone)]
pub struct UnionFind {
    /// `parent[i] == i` marks a set representative.
    parent: Vec<u32>,
    /// Upper bound on the height below each representative.
    rank: Vec<u8>,
    /// Number of disjoint sets.
    sets: usize,
}

/// Alias under the textbook name.
pub type DisjointSet = UnionFind;

impl UnionFind {
    /// One singleton set per node id in `0..n`.
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n as u32).collect(),
            rank: vec![0; n],
            sets: n,
        }
    }

    /// Number of registered nodes.
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Check if no node is registered.
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Number of disjoint sets.
    pub fn num_components(&self) -> usize {
        self.sets
    }

    /// Representative of the set holding `x`.
    ///
    /// Every node visited on the way up is re-pointed at the representative.
    ///
    /// # Panics
    ///
    /// Panics if `x` was never registered (`x >= len()`).
    pub fn find(&mut self, x: NodeId) -> NodeId {
        let mut root = x.get();
        while self.parent[root as usize] != root {
            root = self.parent[root as usize];
        }

        let mut node = x.get();
        while node != root {
            node = std::mem::replace(&mut self.parent[node as usize], root);
        }

        NodeId(root)
    }

    /// Merge the sets holding `x` and `y`.
    ///
    /// Returns false when both already share a set, i.e. an edge `x - y`
    /// would close a cycle.
    pub fn union(&mut self, x: NodeId, y: NodeId) -> bool {
        let (a, b) = (self.find(x).index(), self.find(y).index());
        if a == b {
            return false;
        }

        let (child, parent) = match self.rank[a].cmp(&self.rank[b]) {
            Ordering::Less => (a, b),
            Ordering::Greater => (b, a),
            Ordering::Equal => {
                self.rank[a] = self.rank[a].saturating_add(1);
                (b, a)
            }
        };
        self.parent[child] = parent as u32;
        self.sets -= 1;
        true
    }

    /// Component label for every node.
    ///
    /// Labels are dense and assigned in order of each set's lowest node id.
    pub fn component_ids(&mut self) -> Vec<ComponentId> {
        let mut labels = vec![ComponentId::UNASSIGNED; self.len()];
        let mut next = 0u32;

        for i in 0..self.len() {
            let root = self.find(NodeId(i as u32)).index();
            if !labels[root].is_assigned() {
                labels[root] = ComponentId::new(next);
                next += 1;
            }
            labels[i] = labels[root];
        }

        labels
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_singleton_sets() {
        let mut uf = UnionFind::new(5);
        assert_eq!(uf.num_components(), 5);
        assert_eq!(uf.len(), 5);

        // Each node is its own representative
        for i in 0..5 {
            assert_eq!(uf.find(NodeId(i)), NodeId(i));
        }
    }

    #[test]
    fn test_union_basic() {
        let mut uf = UnionFind::new(5);

        assert!(uf.union(NodeId(0), NodeId(1)));
        assert_eq!(uf.num_components(), 4);
        assert_eq!(uf.find(NodeId(0)), uf.find(NodeId(1)));

        assert!(uf.union(NodeId(2), NodeId(3)));
        assert_eq!(uf.num_components(), 3);

        assert!(uf.union(NodeId(0), NodeId(2)));
        assert_eq!(uf.num_components(), 2);
        assert_eq!(uf.find(NodeId(1)), uf.find(NodeId(3)));
        assert_ne!(uf.find(NodeId(0)), uf.find(NodeId(4)));
    }

    #[test]
    fn test_union_same_set_reports_cycle() {
        let mut uf = UnionFind::new(3);

        uf.union(NodeId(0), NodeId(1));
        uf.union(NodeId(1), NodeId(2));

        assert!(!uf.union(NodeId(0), NodeId(2)));
        assert!(!uf.union(NodeId(2), NodeId(2)));
        assert_eq!(uf.num_components(), 1);
    }

    #[test]
    fn test_path_compression_flattens_chain() {
        let mut uf = UnionFind::new(10);

        // Chain each new singleton onto the growing set
        for i in 0..9 {
            uf.union(NodeId(i), NodeId(i + 1));
        }

        let root = uf.find(NodeId(9));
        for i in 0..10 {
            assert_eq!(uf.find(NodeId(i)), root);
            // After find, every node points directly at the root
            assert_eq!(uf.parent[i as usize], root.0);
        }
    }

    #[test]
    fn test_deep_chain_does_not_overflow() {
        // Build a worst-case parent chain by hand and compress it
        let n = 200_000u32;
        let mut uf = UnionFind::new(n as usize);
        for i in 1..n {
            uf.parent[i as usize] = i - 1;
        }

        assert_eq!(uf.find(NodeId(n - 1)), NodeId(0));
        assert_eq!(uf.parent[(n - 1) as usize], 0);
        assert_eq!(uf.parent[(n / 2) as usize], 0);
    }

    #[test]
    fn test_component_ids() {
        let mut uf = UnionFind::new(5);

        uf.union(NodeId(0), NodeId(1));
        uf.union(NodeId(2), NodeId(3));

        let ids = uf.component_ids();

        assert_eq!(ids[0], ids[1]);
        assert_eq!(ids[2], ids[3]);
        assert_ne!(ids[4], ids[0]);
        assert_ne!(ids[4], ids[2]);
        // Labelled in order of first appearance
        assert_eq!(ids[0], ComponentId(0));
        assert_eq!(ids[2], ComponentId(1));
        assert_eq!(ids[4], ComponentId(2));
        assert_eq!(uf.num_components(), 3);
    }

    #[test]
    fn test_empty_union_find() {
        let mut uf = UnionFind::new(0);
        assert!(uf.is_empty());
        assert_eq!(uf.num_components(), 0);
        assert!(uf.component_ids().is_empty());
    }

    #[test]
    #[should_panic]
    fn test_find_unregistered_node_panics() {
        let mut uf = UnionFind::new(2);
        uf.find(NodeId(2));
    }
}
