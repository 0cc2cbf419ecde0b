//! `campusnet mst` command - Compute and report minimum spanning trees.

use campusnet_graph::{
    kruskal, prim_with_config, sample_campus, Edge, Graph, MstAlgorithm, NodeId, PrimConfig,
    SpanningTree, TreeReport,
};
use colored::Colorize;
use serde::Serialize;
use tracing::{info, warn};

use crate::error::{CliError, CliResult};

use super::{format_currency, AlgorithmChoice, OutputFormat};

/// Options for the `mst` command.
#[derive(Debug, Clone)]
pub struct MstOptions {
    pub algorithm: AlgorithmChoice,
    pub start: Option<String>,
    pub format: OutputFormat,
    pub path: Option<(String, String)>,
}

/// One algorithm's result as emitted in JSON output.
#[derive(Debug, Serialize)]
struct MstOutput {
    #[serde(flatten)]
    tree: TreeReport,
    #[serde(skip_serializing_if = "Option::is_none")]
    path: Option<Vec<String>>,
}

/// Execute the `mst` command against the sample campus.
pub fn execute(options: &MstOptions) -> CliResult<()> {
    let graph = sample_campus()?;
    info!(
        buildings = graph.node_count(),
        links = graph.edge_count(),
        "Loaded sample campus"
    );

    let trees = compute(&graph, options)?;

    if let [first, second] = trees.as_slice() {
        if !first.same_weight(second) {
            warn!(
                kruskal = first.total_weight,
                prim = second.total_weight,
                "Totals differ; the network is not fully connected"
            );
        }
    }

    let route = options
        .path
        .as_ref()
        .map(|(from, to)| Ok::<_, CliError>((graph.node_id(from)?, graph.node_id(to)?)))
        .transpose()?;

    let mut outputs = Vec::with_capacity(trees.len());
    for tree in &trees {
        let path = match route {
            Some((from, to)) => Some(route_in(&graph, tree, from, to)?),
            None => None,
        };
        outputs.push((tree, path));
    }

    match options.format {
        OutputFormat::Json => print_json(&graph, &outputs),
        OutputFormat::Text => {
            for (tree, path) in &outputs {
                print_text(&graph, tree, path.as_deref())?;
            }
            Ok(())
        }
    }
}

/// Run the selected algorithms.
fn compute(graph: &Graph, options: &MstOptions) -> CliResult<Vec<SpanningTree>> {
    let config = match &options.start {
        Some(name) => PrimConfig::new().with_start(graph.node_id(name)?),
        None => PrimConfig::new(),
    };

    options
        .algorithm
        .algorithms()
        .into_iter()
        .map(|algorithm| -> CliResult<SpanningTree> {
            match algorithm {
                MstAlgorithm::Kruskal => Ok(kruskal(graph)),
                MstAlgorithm::Prim => Ok(prim_with_config(graph, &config)?),
            }
        })
        .collect()
}

fn route_in(
    graph: &Graph,
    tree: &SpanningTree,
    from: NodeId,
    to: NodeId,
) -> CliResult<Vec<NodeId>> {
    tree.path(from, to).ok_or_else(|| CliError::NoRoute {
        from: graph.name(from).unwrap_or("?").to_string(),
        to: graph.name(to).unwrap_or("?").to_string(),
        algorithm: tree.algorithm.name().to_string(),
    })
}

fn print_json(graph: &Graph, outputs: &[(&SpanningTree, Option<Vec<NodeId>>)]) -> CliResult<()> {
    let reports = outputs
        .iter()
        .map(|(tree, path)| -> CliResult<MstOutput> {
            let path = path
                .as_ref()
                .map(|ids| {
                    ids.iter()
                        .map(|&id| graph.name(id).map(str::to_string))
                        .collect::<Result<Vec<_>, _>>()
                })
                .transpose()?;
            Ok(MstOutput {
                tree: tree.report(graph)?,
                path,
            })
        })
        .collect::<CliResult<Vec<_>>>()?;

    println!("{}", serde_json::to_string_pretty(&reports)?);
    Ok(())
}

fn print_text(graph: &Graph, tree: &SpanningTree, path: Option<&[NodeId]>) -> CliResult<()> {
    let title = match tree.algorithm {
        MstAlgorithm::Kruskal => "Kruskal's MST",
        MstAlgorithm::Prim => "Prim's MST",
    };
    println!("{} {}", "→".bright_cyan(), title.bright_white().underline());
    println!(
        "  {} {} building(s), {} link(s)",
        "•".dimmed(),
        tree.node_count().to_string().bright_white(),
        tree.edge_count().to_string().bright_white()
    );
    println!();

    for edge in &tree.edges {
        let line = format!(
            "{:>16} ── {:<16} {:>14}",
            graph.name(edge.source)?,
            graph.name(edge.target)?,
            format_currency(edge.weight)
        );
        if on_route(edge, path) {
            println!("    {}", line.bright_red().bold());
        } else {
            println!("    {}", line);
        }
    }

    println!();
    println!(
        "  {} Total Cost: {}",
        "✓".bright_green(),
        format_currency(tree.total_weight).bright_green().bold()
    );

    if let Some(path) = path {
        let names = path
            .iter()
            .map(|&id| graph.name(id))
            .collect::<Result<Vec<_>, _>>()?;
        println!(
            "  {} Route: {}",
            "•".dimmed(),
            names.join(" → ").bright_red()
        );
    }
    println!();

    Ok(())
}

/// Whether `edge` joins two consecutive nodes of `path`.
fn on_route(edge: &Edge, path: Option<&[NodeId]>) -> bool {
    path.is_some_and(|p| p.windows(2).any(|pair| edge.connects(pair[0], pair[1])))
}
