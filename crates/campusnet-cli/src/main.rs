//! campusnet CLI - Minimum cost link planning for the sample campus network.
//!
//! # Commands
//!
//! - `campusnet mst` - Compute the minimum spanning tree (Kruskal, Prim or both)
//! - `campusnet network` - Show the full candidate network
//! - `campusnet completions <shell>` - Generate shell completions
//!
//! # Examples
//!
//! ```bash
//! # Compare both algorithms
//! campusnet mst --algorithm both
//!
//! # Grow Prim's tree from the gym and highlight a route
//! campusnet mst --algorithm prim --start Gym --path Library Gym
//!
//! # Machine-readable output
//! campusnet mst --format json
//! ```

use clap::{Parser, Subcommand};
use colored::Colorize;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod commands;
mod error;

use commands::{mst, network, AlgorithmChoice, OutputFormat};

/// campusnet - campus network spanning tree planner
#[derive(Parser)]
#[command(name = "campusnet")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the minimum cost set of links connecting every building
    Mst {
        /// Algorithm to run
        #[arg(short, long, value_enum, default_value = "both")]
        algorithm: AlgorithmChoice,

        /// Building to grow Prim's tree from (default: first building)
        #[arg(short, long)]
        start: Option<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,

        /// Highlight the tree route between two buildings
        #[arg(short, long, num_args = 2, value_names = ["FROM", "TO"])]
        path: Option<Vec<String>>,
    },

    /// Show every building and candidate link
    Network {
        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

fn setup_logging(verbose: bool, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();
}

fn print_banner() {
    println!(
        "\n  {} {}\n",
        "campusnet".bright_cyan().bold(),
        format!("v{}", env!("CARGO_PKG_VERSION")).dimmed()
    );
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let result = match cli.command {
        Commands::Mst {
            algorithm,
            start,
            format,
            path,
        } => {
            if !cli.quiet && format == OutputFormat::Text {
                print_banner();
            }
            let options = mst::MstOptions {
                algorithm,
                start,
                format,
                path: path.and_then(|p| match p.as_slice() {
                    [from, to] => Some((from.clone(), to.clone())),
                    _ => None,
                }),
            };
            mst::execute(&options)
        }

        Commands::Network { format } => {
            if !cli.quiet && format == OutputFormat::Text {
                print_banner();
            }
            network::execute(format)
        }

        Commands::Completions { shell } => {
            use clap::CommandFactory;
            clap_complete::generate(
                shell,
                &mut Cli::command(),
                "campusnet",
                &mut std::io::stdout(),
            );
            Ok(())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}
