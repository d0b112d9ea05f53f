//! Error types for loading graphs and computing shortest paths.

use thiserror::Error;

/// Result type for shortest-path operations.
pub type Result<T> = std::result::Result<T, SsspError>;

/// Shortest-path error types.
#[derive(Error, Debug)]
pub enum SsspError {
    /// A row that cannot become an edge.
    #[error("Invalid edge on line {line}: {reason}")]
    InvalidEdge { line: usize, reason: String },

    /// The requested source is not a vertex of the graph.
    #[error("Unknown source vertex: {0}")]
    UnknownSource(String),

    /// The predecessor chain loops back on itself.
    #[error("Cycle detected in predecessor chain at vertex {vertex}")]
    CycleDetected { vertex: String },

    /// A relaxation still improved after all passes.
    #[error("Negative cycle reachable from the source through vertex {vertex}")]
    NegativeCycle { vertex: String },

    /// The header row lacks a required column.
    #[error("Missing column in header: {0}")]
    MissingColumn(String),

    /// IO error while reading input.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
