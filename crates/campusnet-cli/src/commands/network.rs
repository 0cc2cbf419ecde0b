//! `campusnet network` command - Show the full candidate network.

use campusnet_graph::{component_count, sample_campus, Graph, Node};
use colored::Colorize;
use serde::Serialize;

use crate::error::CliResult;

use super::{format_currency, OutputFormat};

#[derive(Debug, Serialize)]
struct NetworkReport<'a> {
    buildings: &'a [Node],
    links: Vec<LinkReport<'a>>,
    components: usize,
    total_cost: f64,
}

#[derive(Debug, Serialize)]
struct LinkReport<'a> {
    a: &'a str,
    b: &'a str,
    cost: f64,
}

/// Execute the `network` command.
pub fn execute(format: OutputFormat) -> CliResult<()> {
    let graph = sample_campus()?;
    let report = build_report(&graph)?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Text => print_text(&report),
    }
    Ok(())
}

fn build_report(graph: &Graph) -> CliResult<NetworkReport<'_>> {
    let mut links = Vec::with_capacity(graph.edge_count());
    for edge in graph.edges() {
        links.push(LinkReport {
            a: graph.name(edge.source)?,
            b: graph.name(edge.target)?,
            cost: edge.weight,
        });
    }

    Ok(NetworkReport {
        buildings: graph.nodes(),
        links,
        components: component_count(graph),
        total_cost: graph.total_weight(),
    })
}

fn print_text(report: &NetworkReport<'_>) {
    println!("{} {}", "→".bright_cyan(), "Campus Network".bright_white().underline());
    println!();

    println!("  Buildings:");
    for node in report.buildings {
        println!(
            "    {} {} ({:>4}, {:>4})",
            "•".dimmed(),
            format!("{:<16}", node.name).bright_white(),
            node.position.x,
            node.position.y
        );
    }
    println!();

    println!("  Candidate links:");
    for link in &report.links {
        println!(
            "    {:>16} ── {:<16} {:>14}",
            link.a,
            link.b,
            format_currency(link.cost)
        );
    }
    println!();

    println!(
        "  {} {} link(s), {} component(s), {} if every link were built",
        "•".dimmed(),
        report.links.len().to_string().bright_white(),
        report.components.to_string().bright_white(),
        format_currency(report.total_cost).yellow()
    );
    println!();
}
