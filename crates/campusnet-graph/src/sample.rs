//! Sample campus network.
//!
//! Ten buildings and fifteen candidate links, costs in dollars.

use crate::models::{Graph, Position};
use crate::Result;

/// Buildings with their map coordinates.
pub const BUILDINGS: [(&str, f64, f64); 10] = [
    ("Library", 2.0, 8.0),
    ("Admin", 5.0, 9.0),
    ("Science", 8.0, 7.0),
    ("Engineering", 6.0, 5.0),
    ("Arts", 3.0, 6.0),
    ("Student Center", 1.0, 4.0),
    ("Dorm A", 4.0, 2.0),
    ("Dorm B", 7.0, 3.0),
    ("Gym", 9.0, 1.0),
    ("Cafeteria", 5.0, 1.0),
];

/// Candidate links and their installation cost.
pub const CONNECTIONS: [(&str, &str, f64); 15] = [
    ("Library", "Admin", 50_000.0),
    ("Library", "Arts", 35_000.0),
    ("Admin", "Science", 60_000.0),
    ("Admin", "Engineering", 45_000.0),
    ("Science", "Engineering", 30_000.0),
    ("Science", "Gym", 80_000.0),
    ("Engineering", "Arts", 40_000.0),
    ("Engineering", "Dorm B", 55_000.0),
    ("Arts", "Student Center", 25_000.0),
    ("Student Center", "Dorm A", 20_000.0),
    ("Dorm A", "Dorm B", 35_000.0),
    ("Dorm A", "Cafeteria", 15_000.0),
    ("Dorm B", "Gym", 40_000.0),
    ("Dorm B", "Cafeteria", 30_000.0),
    ("Gym", "Cafeteria", 50_000.0),
];

/// Build the sample campus graph.
pub fn sample_campus() -> Result<Graph> {
    build(&BUILDINGS, &CONNECTIONS)
}

/// Build a graph from building and link tables.
pub fn build(
    buildings: &[(&str, f64, f64)],
    connections: &[(&str, &str, f64)],
) -> Result<Graph> {
    let mut graph = Graph::with_capacity(buildings.len(), connections.len());
    for &(name, x, y) in buildings {
        graph.add_node(name, Position::new(x, y))?;
    }
    for &(a, b, cost) in connections {
        graph.add_edge(a, b, cost)?;
    }
    Ok(graph)
}
