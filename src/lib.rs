pub mod distance;
pub mod error;
pub mod graph;
pub mod ingest;
pub mod paths;
pub mod relaxation;

#[cfg(feature = "petgraph")]
pub mod petgraph_utils;

pub use distance::Distance;
pub use error::{Result, SsspError};
pub use graph::{Directedness, Edge, Graph, GraphConfig, InvalidRowPolicy};
pub use ingest::{IngestConfig, Row, read_rows};
pub use paths::{ShortestPaths, get_path, get_paths};
pub use relaxation::{Relaxation, RelaxationOptions, compute, compute_with};

#[cfg(feature = "tokio")]
pub use ingest::load_rows;
