//! Error types for the campusnet CLI.

use campusnet_graph::GraphError;
use thiserror::Error;

/// CLI result type alias.
pub type CliResult<T> = Result<T, CliError>;

/// CLI error type.
#[derive(Error, Debug)]
pub enum CliError {
    /// Graph construction or lookup error.
    #[error(transparent)]
    Graph(#[from] GraphError),

    /// JSON encoding error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Requested route does not exist in the computed tree.
    #[error("No route from {from} to {to} in the {algorithm} tree")]
    NoRoute {
        from: String,
        to: String,
        algorithm: String,
    },
}
