//! Weighted undirected site graph.
//!
//! Nodes are registered by name and receive dense [`NodeId`]s in
//! registration order. Edges are validated when they are added: both
//! endpoints must exist, the endpoints must differ, the weight must be a
//! finite non-negative number and at most one edge may join an unordered
//! pair. Algorithms only ever see a `&Graph`, so a graph handed to them is
//! never modified.

use std::collections::HashMap;

use serde::Serialize;

use super::node::NodeId;
use crate::{GraphError, Result};

/// Renderer coordinates of a site. Not used by any algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A registered site.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Node {
    pub name: String,
    pub position: Position,
}

/// Edge identifier (index in insertion order).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeId(pub u32);

impl EdgeId {
    /// Position in the edge list.
    pub const fn index(&self) -> usize {
        self.0 as usize
    }
}

/// Undirected weighted edge. `source` and `target` carry no direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub source: NodeId,
    pub target: NodeId,
    pub weight: f64,
}

impl Edge {
    pub const fn new(source: NodeId, target: NodeId, weight: f64) -> Self {
        Self {
            source,
            target,
            weight,
        }
    }

    /// The endpoint opposite `node`, if `node` is an endpoint.
    pub fn other(&self, node: NodeId) -> Option<NodeId> {
        if node == self.source {
            Some(self.target)
        } else if node == self.target {
            Some(self.source)
        } else {
            None
        }
    }

    /// Check whether this edge joins `a` and `b` in either orientation.
    pub fn connects(&self, a: NodeId, b: NodeId) -> bool {
        (self.source == a && self.target == b) || (self.source == b && self.target == a)
    }

    /// Endpoints ordered as (smaller, larger).
    pub fn key(&self) -> (NodeId, NodeId) {
        pair_key(self.source, self.target)
    }
}

fn pair_key(a: NodeId, b: NodeId) -> (NodeId, NodeId) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

/// Simple undirected graph with named nodes.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    nodes: Vec<Node>,
    by_name: HashMap<String, NodeId>,
    edges: Vec<Edge>,
    by_pair: HashMap<(NodeId, NodeId), EdgeId>,
    /// Incident edges per node, in insertion order.
    incident: Vec<Vec<EdgeId>>,
}

impl Graph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty graph with room for the given number of nodes and edges.
    pub fn with_capacity(nodes: usize, edges: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(nodes),
            by_name: HashMap::with_capacity(nodes),
            edges: Vec::with_capacity(edges),
            by_pair: HashMap::with_capacity(edges),
            incident: Vec::with_capacity(nodes),
        }
    }

    /// Register a site.
    ///
    /// Names are unique; registering the same name twice is rejected.
    pub fn add_node(&mut self, name: impl Into<String>, position: Position) -> Result<NodeId> {
        let name = name.into();
        if self.by_name.contains_key(&name) {
            return Err(GraphError::DuplicateNode(name));
        }

        let id = NodeId::from(self.nodes.len());
        self.by_name.insert(name.clone(), id);
        self.nodes.push(Node { name, position });
        self.incident.push(Vec::new());
        Ok(id)
    }

    /// Register a link between two named sites.
    pub fn add_edge(&mut self, a: &str, b: &str, weight: f64) -> Result<EdgeId> {
        let a = self.node_id(a)?;
        let b = self.node_id(b)?;
        self.add_edge_by_id(a, b, weight)
    }

    /// Register a link between two node IDs.
    ///
    /// # Errors
    ///
    /// - [`GraphError::InvalidNodeId`] if either endpoint is not in the graph
    /// - [`GraphError::SelfLoop`] if both endpoints are the same node
    /// - [`GraphError::InvalidWeight`] if the weight is negative, NaN or infinite
    /// - [`GraphError::DuplicateEdge`] if the pair is already linked
    pub fn add_edge_by_id(&mut self, a: NodeId, b: NodeId, weight: f64) -> Result<EdgeId> {
        let name_a = self.name(a)?.to_string();
        let name_b = self.name(b)?.to_string();

        if a == b {
            return Err(GraphError::SelfLoop(name_a));
        }

        if !weight.is_finite() || weight < 0.0 {
            return Err(GraphError::InvalidWeight {
                a: name_a,
                b: name_b,
                weight,
            });
        }

        let key = pair_key(a, b);
        if self.by_pair.contains_key(&key) {
            return Err(GraphError::DuplicateEdge {
                a: name_a,
                b: name_b,
            });
        }

        let id = EdgeId(self.edges.len() as u32);
        self.edges.push(Edge::new(a, b, weight));
        self.by_pair.insert(key, id);
        self.incident[a.index()].push(id);
        self.incident[b.index()].push(id);
        Ok(id)
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Check if the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Check whether `id` refers to a registered node.
    pub fn contains(&self, id: NodeId) -> bool {
        id.index() < self.nodes.len()
    }

    /// Look up a node by ID.
    pub fn node(&self, id: NodeId) -> Result<&Node> {
        self.nodes
            .get(id.index())
            .ok_or(GraphError::InvalidNodeId(id.get()))
    }

    /// Resolve a node name to its ID.
    pub fn node_id(&self, name: &str) -> Result<NodeId> {
        self.by_name
            .get(name)
            .copied()
            .ok_or_else(|| GraphError::UnknownNode(name.to_string()))
    }

    /// Name of a node.
    pub fn name(&self, id: NodeId) -> Result<&str> {
        self.node(id).map(|node| node.name.as_str())
    }

    /// All nodes in registration order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// All node IDs in registration order.
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.nodes.len()).map(NodeId::from)
    }

    /// All edges in insertion order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Look up an edge by ID.
    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.get(id.index())
    }

    /// The edge joining `a` and `b`, if any.
    pub fn find_edge(&self, a: NodeId, b: NodeId) -> Option<&Edge> {
        self.by_pair
            .get(&pair_key(a, b))
            .and_then(|id| self.edge(*id))
    }

    /// Neighbors of a node with the joining edge weight, in edge insertion order.
    ///
    /// Unknown nodes have no neighbors.
    pub fn neighbors(&self, id: NodeId) -> impl Iterator<Item = (NodeId, f64)> + '_ {
        self.incident
            .get(id.index())
            .map(Vec::as_slice)
            .unwrap_or(&[])
            .iter()
            .filter_map(move |edge_id| {
                let edge = &self.edges[edge_id.index()];
                edge.other(id).map(|other| (other, edge.weight))
            })
    }

    /// Number of edges touching a node.
    pub fn degree(&self, id: NodeId) -> usize {
        self.incident.get(id.index()).map_or(0, Vec::len)
    }

    /// Sum of all edge weights.
    pub fn total_weight(&self) -> f64 {
        self.edges.iter().map(|e| e.weight).sum()
    }
}
