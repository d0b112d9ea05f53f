//! Bellman-Ford style relaxation over an edge list.
//!
//! Every pass scans all edges in input order and relaxes each one in both
//! directions (only forward when running [`Directedness::Directed`]). The loop
//! always runs exactly `|V|` passes; there is no early exit once the tables
//! stop changing.

use crate::distance::Distance;
use crate::error::{Result, SsspError};
use crate::graph::{Directedness, Graph};
use crate::paths::ShortestPaths;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RelaxationOptions {
    pub directedness: Directedness,
    /// Run one extra pass after the `|V|` passes and fail with
    /// [`SsspError::NegativeCycle`] if it still improves anything.
    pub detect_negative_cycles: bool,
}

/// Compute distances and predecessors from `source`, treating edges as undirected.
pub fn compute<'g>(graph: &'g Graph, source: &str) -> Result<ShortestPaths<'g>> {
    compute_with(graph, source, &RelaxationOptions::default())
}

pub fn compute_with<'g>(
    graph: &'g Graph,
    source: &str,
    options: &RelaxationOptions,
) -> Result<ShortestPaths<'g>> {
    if graph.is_empty() {
        log::debug!("Empty graph, nothing to relax");
        return Ok(ShortestPaths::empty(graph, *options));
    }

    let mut relaxation = Relaxation::new(graph, source, *options)?;
    let mut relaxations = 0usize;
    for _ in 0..graph.vertex_count() {
        relaxations += relaxation.pass();
    }

    log::info!(
        "Relaxation from {} finished after {} passes with {} improvements",
        source,
        relaxation.passes(),
        relaxations
    );

    if options.detect_negative_cycles {
        relaxation.check_negative_cycles()?;
    }

    Ok(relaxation.finish())
}

/// Relaxation state for one source, advanced one full pass at a time.
pub struct Relaxation<'g> {
    graph: &'g Graph,
    options: RelaxationOptions,
    source: usize,
    distances: Vec<Distance>,
    predecessors: Vec<Option<usize>>,
    passes: usize,
}

impl<'g> Relaxation<'g> {
    pub fn new(graph: &'g Graph, source: &str, options: RelaxationOptions) -> Result<Self> {
        let source = graph
            .vertex_id(source)
            .ok_or_else(|| SsspError::UnknownSource(source.to_string()))?;

        let n = graph.vertex_count();
        let mut distances = vec![Distance::INFINITY; n];
        distances[source] = Distance::ZERO;

        Ok(Relaxation {
            graph,
            options,
            source,
            distances,
            predecessors: vec![None; n],
            passes: 0,
        })
    }

    /// Scan every edge once. Returns how many relaxations improved a distance.
    pub fn pass(&mut self) -> usize {
        self.passes += 1;
        log::debug!("Relaxation pass {}", self.passes);

        let graph = self.graph;
        let mut improved = 0;
        for edge in graph.edges() {
            log::trace!(
                "Checking edge {:?} -> {:?} ({})",
                graph.label(edge.from),
                graph.label(edge.to),
                edge.distance
            );
            if self.check(edge.from, edge.to, edge.distance) {
                improved += 1;
            }
            if self.options.directedness == Directedness::Undirected
                && self.check(edge.to, edge.from, edge.distance)
            {
                improved += 1;
            }
        }
        improved
    }

    fn check(&mut self, from: usize, to: usize, weight: i64) -> bool {
        let candidate = self.distances[from].add_weight(weight);
        if candidate < self.distances[to] {
            self.distances[to] = candidate;
            self.predecessors[to] = Some(from);
            true
        } else {
            false
        }
    }

    fn check_negative_cycles(&mut self) -> Result<()> {
        let before = self.distances.clone();
        if self.pass() == 0 {
            return Ok(());
        }
        let vertex = before
            .iter()
            .zip(&self.distances)
            .position(|(old, new)| new < old)
            .and_then(|id| self.graph.label(id))
            .unwrap_or_default()
            .to_string();
        Err(SsspError::NegativeCycle { vertex })
    }

    pub fn passes(&self) -> usize {
        self.passes
    }

    pub fn source(&self) -> usize {
        self.source
    }

    pub fn distances(&self) -> &[Distance] {
        &self.distances
    }

    pub fn predecessors(&self) -> &[Option<usize>] {
        &self.predecessors
    }

    pub fn finish(self) -> ShortestPaths<'g> {
        ShortestPaths::new(
            self.graph,
            self.options,
            self.source,
            self.distances,
            self.predecessors,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> Graph {
        let mut graph = Graph::new();
        graph.add_edge("A", "B", 4);
        graph.add_edge("B", "C", 1);
        graph.add_edge("A", "C", 10);
        graph
    }

    #[test]
    fn triangle_from_a() {
        let graph = triangle();
        let result = compute(&graph, "A").unwrap();

        assert_eq!(result.distance("A"), Some(Distance::new(0)));
        assert_eq!(result.distance("B"), Some(Distance::new(4)));
        assert_eq!(result.distance("C"), Some(Distance::new(5)));
        assert_eq!(result.predecessor("A"), None);
        assert_eq!(result.predecessor("B"), Some("A"));
        assert_eq!(result.predecessor("C"), Some("B"));
    }

    #[test]
    fn edges_work_in_both_directions() {
        let graph = triangle();
        let result = compute(&graph, "C").unwrap();

        assert_eq!(result.distance("B"), Some(Distance::new(1)));
        assert_eq!(result.distance("A"), Some(Distance::new(5)));
        assert_eq!(result.predecessor("A"), Some("B"));
    }

    #[test]
    fn directed_mode_only_relaxes_forward() {
        let graph = triangle();
        let options = RelaxationOptions {
            directedness: Directedness::Directed,
            ..RelaxationOptions::default()
        };
        let result = compute_with(&graph, "C", &options).unwrap();

        assert_eq!(result.distance("C"), Some(Distance::ZERO));
        assert_eq!(result.distance("A"), Some(Distance::INFINITY));
        assert_eq!(result.distance("B"), Some(Distance::INFINITY));
    }

    #[test]
    fn unknown_source_fails_fast() {
        let graph = triangle();
        let err = compute(&graph, "Z").unwrap_err();
        assert!(matches!(err, SsspError::UnknownSource(ref v) if v == "Z"));
    }

    #[test]
    fn empty_graph_gives_empty_tables() {
        let graph = Graph::new();
        let result = compute(&graph, "A").unwrap();
        assert_eq!(result.distances().count(), 0);
        assert_eq!(result.predecessors().count(), 0);
    }

    #[test]
    fn runs_exactly_one_pass_per_vertex() {
        let graph = triangle();
        let mut relaxation = Relaxation::new(&graph, "A", RelaxationOptions::default()).unwrap();
        for _ in 0..graph.vertex_count() {
            relaxation.pass();
        }
        assert_eq!(relaxation.passes(), 3);
        // Converged after the first pass here, later passes change nothing.
        assert_eq!(relaxation.pass(), 0);
    }

    #[test]
    fn negative_cycle_detection_is_opt_in() {
        let mut graph = Graph::new();
        graph.add_edge("A", "B", 1);
        graph.add_edge("B", "C", -3);
        graph.add_edge("C", "B", 1);

        let directed = RelaxationOptions {
            directedness: Directedness::Directed,
            detect_negative_cycles: false,
        };
        assert!(compute_with(&graph, "A", &directed).is_ok());

        let checked = RelaxationOptions {
            detect_negative_cycles: true,
            ..directed
        };
        let err = compute_with(&graph, "A", &checked).unwrap_err();
        assert!(matches!(err, SsspError::NegativeCycle { .. }));
    }

    #[test]
    fn negative_weights_without_cycles_pass_the_check() {
        let mut graph = Graph::new();
        graph.add_edge("A", "B", 4);
        graph.add_edge("A", "C", 1);
        graph.add_edge("B", "C", -2);
        let options = RelaxationOptions {
            directedness: Directedness::Directed,
            detect_negative_cycles: true,
        };
        let result = compute_with(&graph, "A", &options).unwrap();
        assert_eq!(result.distance("C"), Some(Distance::new(1)));
    }
}
