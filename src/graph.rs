use crate::error::{Result, SsspError};
use crate::ingest::Row;

#[cfg(not(feature = "hashbrown"))]
use std::collections::HashMap;

#[cfg(feature = "hashbrown")]
use hashbrown::HashMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Whether an edge may be relaxed in both directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Directedness {
    #[default]
    Undirected,
    Directed,
}

/// What to do with a row that cannot become an edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InvalidRowPolicy {
    /// Fail the whole build on the first bad row.
    #[default]
    Reject,
    /// Drop the row and log a warning.
    Skip,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GraphConfig {
    pub invalid_rows: InvalidRowPolicy,
    pub allow_negative_weights: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Edge {
    pub from: usize,
    pub to: usize,
    pub distance: i64,
    /// Extra input columns, carried along unused.
    pub attributes: Vec<(String, String)>,
}

/// Vertices are string labels with dense ids in order of first appearance.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Graph {
    vertices: Vec<String>,
    index: HashMap<String, usize>,
    edges: Vec<Edge>,
}

impl Graph {
    pub fn new() -> Self {
        Graph::default()
    }

    /// Build a graph from ingested rows, validating each one.
    pub fn from_rows<I>(rows: I, config: &GraphConfig) -> Result<Graph>
    where
        I: IntoIterator<Item = Row>,
    {
        let mut graph = Graph::new();
        let mut skipped = 0usize;

        for row in rows {
            match validate(&row, config) {
                Ok(distance) => {
                    let from = graph.intern(&row.from);
                    let to = graph.intern(&row.to);
                    graph.edges.push(Edge {
                        from,
                        to,
                        distance,
                        attributes: row.attributes,
                    });
                }
                Err(err) => match config.invalid_rows {
                    InvalidRowPolicy::Reject => return Err(err),
                    InvalidRowPolicy::Skip => {
                        log::warn!("Skipping row: {}", err);
                        skipped += 1;
                    }
                },
            }
        }

        log::info!(
            "Graph built with {} vertices and {} edges ({} rows skipped).",
            graph.vertex_count(),
            graph.edge_count(),
            skipped
        );
        Ok(graph)
    }

    /// Add an edge, creating its endpoints if needed. Returns the edge index.
    pub fn add_edge(&mut self, from: &str, to: &str, distance: i64) -> usize {
        let from = self.intern(from);
        let to = self.intern(to);
        self.edges.push(Edge {
            from,
            to,
            distance,
            attributes: Vec::new(),
        });
        self.edges.len() - 1
    }

    fn intern(&mut self, label: &str) -> usize {
        if let Some(&id) = self.index.get(label) {
            return id;
        }
        let id = self.vertices.len();
        self.vertices.push(label.to_string());
        self.index.insert(label.to_string(), id);
        id
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn vertex_id(&self, label: &str) -> Option<usize> {
        self.index.get(label).copied()
    }

    pub fn label(&self, id: usize) -> Option<&str> {
        self.vertices.get(id).map(String::as_str)
    }

    pub fn vertices(&self) -> &[String] {
        &self.vertices
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Cheapest direct edge from `a` to `b`.
    pub fn weight_between(&self, a: usize, b: usize, directedness: Directedness) -> Option<i64> {
        self.edges
            .iter()
            .filter(|e| {
                (e.from == a && e.to == b)
                    || (directedness == Directedness::Undirected && e.from == b && e.to == a)
            })
            .map(|e| e.distance)
            .min()
    }

    #[cfg(feature = "petgraph")]
    pub fn to_petgraph(&self) -> petgraph::Graph<String, i64, petgraph::Undirected> {
        let mut pg_graph = petgraph::Graph::new_undirected();
        let nodes: Vec<_> = self
            .vertices
            .iter()
            .map(|label| pg_graph.add_node(label.clone()))
            .collect();

        for edge in &self.edges {
            pg_graph.add_edge(nodes[edge.from], nodes[edge.to], edge.distance);
        }
        pg_graph
    }
}

fn validate(row: &Row, config: &GraphConfig) -> Result<i64> {
    let invalid = |reason: String| SsspError::InvalidEdge {
        line: row.line,
        reason,
    };

    if row.from.is_empty() {
        return Err(invalid("missing `from` vertex".to_string()));
    }
    if row.to.is_empty() {
        return Err(invalid("missing `to` vertex".to_string()));
    }

    let distance: i64 = row
        .distance
        .parse()
        .map_err(|_| invalid(format!("distance {:?} is not an integer", row.distance)))?;

    if distance < 0 && !config.allow_negative_weights {
        return Err(invalid(format!("negative distance {distance}")));
    }
    Ok(distance)
}
