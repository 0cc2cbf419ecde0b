//! CLI command implementations.

pub mod mst;
pub mod network;

use campusnet_graph::MstAlgorithm;
use clap::ValueEnum;

/// Which spanning tree algorithm(s) to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AlgorithmChoice {
    /// Kruskal's edge-sorting algorithm
    Kruskal,
    /// Prim's priority-queue algorithm
    Prim,
    /// Run both and compare totals
    Both,
}

impl AlgorithmChoice {
    /// Algorithms to run, in report order.
    pub fn algorithms(self) -> Vec<MstAlgorithm> {
        match self {
            AlgorithmChoice::Kruskal => vec![MstAlgorithm::Kruskal],
            AlgorithmChoice::Prim => vec![MstAlgorithm::Prim],
            AlgorithmChoice::Both => MstAlgorithm::ALL.to_vec(),
        }
    }
}

/// Report output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output
    Text,
    /// JSON for programmatic consumption
    Json,
}

/// Format a cost as dollars with thousands separators, e.g. `$280,000.00`.
pub fn format_currency(value: f64) -> String {
    let cents = (value.abs() * 100.0).round() as u128;
    let whole = (cents / 100).to_string();
    let frac = cents % 100;

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if value < 0.0 { "-" } else { "" };
    format!("{}${}.{:02}", sign, grouped, frac)
}
