//! Fuzz target for graph construction and spanning tree computation.
//!
//! Applies random node/edge registrations (including invalid ones) and
//! checks that both algorithms return forests with consistent weights.

#![no_main]

use arbitrary::Arbitrary;
use campusnet_graph::{component_count, kruskal, prim, Graph, NodeId, Position};
use libfuzzer_sys::fuzz_target;

/// Operations that can be performed on the graph.
#[derive(Debug, Arbitrary)]
enum GraphOp {
    AddNode { name_idx: u8, x: f32, y: f32 },
    AddEdge { a: u8, b: u8, weight: f64 },
    AddEdgeByName { a: u8, b: u8, weight: u16 },
}

/// Fuzz input: a sequence of operations to apply to the graph.
#[derive(Debug, Arbitrary)]
struct FuzzInput {
    ops: Vec<GraphOp>,
}

const NAMES: &[&str] = &[
    "Library", "Admin", "Science", "Arts", "Gym", "Dorm A", "Dorm B", "Cafeteria", "Lab", "Pool",
];

fuzz_target!(|input: FuzzInput| {
    // Limit operations to prevent timeout
    if input.ops.len() > 200 {
        return;
    }

    let mut graph = Graph::new();

    for op in &input.ops {
        // Errors are expected for invalid input; only panics are bugs
        match op {
            GraphOp::AddNode { name_idx, x, y } => {
                let name = NAMES[*name_idx as usize % NAMES.len()];
                let _ = graph.add_node(name, Position::new(*x as f64, *y as f64));
            }
            GraphOp::AddEdge { a, b, weight } => {
                let _ = graph.add_edge_by_id(NodeId(*a as u32), NodeId(*b as u32), *weight);
            }
            GraphOp::AddEdgeByName { a, b, weight } => {
                let a = NAMES[*a as usize % NAMES.len()];
                let b = NAMES[*b as usize % NAMES.len()];
                let _ = graph.add_edge(a, b, *weight as f64);
            }
        }
    }

    for edge in graph.edges() {
        assert!(edge.weight.is_finite() && edge.weight >= 0.0);
        assert_ne!(edge.source, edge.target);
    }

    let forest = kruskal(&graph);
    let tree = prim(&graph);

    assert!(forest.is_forest());
    assert!(tree.is_forest());
    assert!(forest.is_spanning(&graph));
    assert_eq!(
        forest.edge_count(),
        graph.node_count() - component_count(&graph)
    );

    if component_count(&graph) == 1 {
        assert!(forest.same_weight(&tree));
    }
});
