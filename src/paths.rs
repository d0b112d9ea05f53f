//! Path reconstruction from a predecessor table.

use crate::distance::Distance;
use crate::error::{Result, SsspError};
use crate::graph::Graph;
use crate::relaxation::RelaxationOptions;

/// Walk predecessors from `vertex` back towards `source`.
///
/// The returned path starts at `vertex` and ends at `source`. A vertex
/// without predecessor ends the walk, so the source itself and unreached
/// vertices both yield `[.., source]`. A predecessor chain that revisits a
/// vertex fails with [`SsspError::CycleDetected`] instead of looping.
pub fn get_path(
    predecessors: &[Option<usize>],
    vertex: usize,
    source: usize,
) -> Result<Vec<usize>> {
    walk(predecessors, vertex, source).map_err(|at| SsspError::CycleDetected {
        vertex: at.to_string(),
    })
}

/// Err carries the first vertex seen twice.
fn walk(
    predecessors: &[Option<usize>],
    vertex: usize,
    source: usize,
) -> std::result::Result<Vec<usize>, usize> {
    let mut visited = vec![false; predecessors.len()];
    let mut path = Vec::new();
    let mut current = vertex;

    while let Some(pred) = predecessors.get(current).copied().flatten() {
        if std::mem::replace(&mut visited[current], true) {
            return Err(current);
        }
        path.push(current);
        current = pred;
    }
    path.push(source);
    Ok(path)
}

/// [`get_path`] for every vertex, indexed by vertex id.
pub fn get_paths(predecessors: &[Option<usize>], source: usize) -> Result<Vec<Vec<usize>>> {
    (0..predecessors.len())
        .map(|vertex| get_path(predecessors, vertex, source))
        .collect()
}

/// Final distance and predecessor tables for one source.
#[derive(Debug, Clone)]
pub struct ShortestPaths<'g> {
    graph: &'g Graph,
    options: RelaxationOptions,
    source: Option<usize>,
    distances: Vec<Distance>,
    predecessors: Vec<Option<usize>>,
}

impl<'g> ShortestPaths<'g> {
    pub(crate) fn new(
        graph: &'g Graph,
        options: RelaxationOptions,
        source: usize,
        distances: Vec<Distance>,
        predecessors: Vec<Option<usize>>,
    ) -> Self {
        ShortestPaths {
            graph,
            options,
            source: Some(source),
            distances,
            predecessors,
        }
    }

    pub(crate) fn empty(graph: &'g Graph, options: RelaxationOptions) -> Self {
        ShortestPaths {
            graph,
            options,
            source: None,
            distances: Vec::new(),
            predecessors: Vec::new(),
        }
    }

    pub fn graph(&self) -> &'g Graph {
        self.graph
    }

    pub fn options(&self) -> &RelaxationOptions {
        &self.options
    }

    pub fn source(&self) -> Option<&'g str> {
        self.source.and_then(|id| self.graph.label(id))
    }

    pub fn distance_table(&self) -> &[Distance] {
        &self.distances
    }

    pub fn predecessor_table(&self) -> &[Option<usize>] {
        &self.predecessors
    }

    /// `None` if `vertex` is not in the graph.
    pub fn distance(&self, vertex: &str) -> Option<Distance> {
        let id = self.graph.vertex_id(vertex)?;
        self.distances.get(id).copied()
    }

    pub fn predecessor(&self, vertex: &str) -> Option<&'g str> {
        let id = self.graph.vertex_id(vertex)?;
        let pred = (*self.predecessors.get(id)?)?;
        self.graph.label(pred)
    }

    pub fn is_reachable(&self, vertex: &str) -> bool {
        self.distance(vertex).is_some_and(|d| d.is_finite())
    }

    /// `(vertex, distance)` in vertex order.
    pub fn distances(&self) -> impl Iterator<Item = (&'g str, Distance)> + '_ {
        self.graph
            .vertices()
            .iter()
            .zip(&self.distances)
            .map(|(label, d)| (label.as_str(), *d))
    }

    /// `(vertex, predecessor)` in vertex order.
    pub fn predecessors(&self) -> impl Iterator<Item = (&'g str, Option<&'g str>)> + '_ {
        let graph = self.graph;
        graph
            .vertices()
            .iter()
            .zip(&self.predecessors)
            .map(move |(label, pred)| (label.as_str(), pred.and_then(|p| graph.label(p))))
    }

    /// Path from `vertex` back to the source, or `Ok(None)` when `vertex`
    /// is unknown or unreachable.
    pub fn path_to(&self, vertex: &str) -> Result<Option<Vec<&'g str>>> {
        let Some(source) = self.source else {
            return Ok(None);
        };
        let Some(id) = self.graph.vertex_id(vertex) else {
            return Ok(None);
        };
        if !self.distances[id].is_finite() {
            return Ok(None);
        }
        match walk(&self.predecessors, id, source) {
            Ok(path) => Ok(Some(self.labels(&path))),
            Err(at) => Err(SsspError::CycleDetected {
                vertex: self.graph.label(at).unwrap_or_default().to_string(),
            }),
        }
    }

    /// Every vertex with its path, `None` for unreachable vertices.
    pub fn paths(&self) -> Result<Vec<(&'g str, Option<Vec<&'g str>>)>> {
        self.graph
            .vertices()
            .iter()
            .map(|label| Ok::<_, SsspError>((label.as_str(), self.path_to(label)?)))
            .collect()
    }

    /// Sum of edge weights along a destination-first path. `None` if two
    /// consecutive vertices share no edge.
    pub fn path_cost(&self, path: &[&str]) -> Option<i64> {
        path.windows(2).try_fold(0i64, |acc, pair| {
            let a = self.graph.vertex_id(pair[1])?;
            let b = self.graph.vertex_id(pair[0])?;
            let weight = self.graph.weight_between(a, b, self.options.directedness)?;
            acc.checked_add(weight)
        })
    }

    fn labels(&self, path: &[usize]) -> Vec<&'g str> {
        path.iter().filter_map(|&id| self.graph.label(id)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::relaxation::compute;

    #[test]
    fn path_unwinds_to_source() {
        // A <- B <- C
        let predecessors = vec![None, Some(0), Some(1)];
        assert_eq!(get_path(&predecessors, 2, 0).unwrap(), vec![2, 1, 0]);
        assert_eq!(get_path(&predecessors, 0, 0).unwrap(), vec![0]);
    }

    #[test]
    fn vertex_without_predecessor_yields_source() {
        let predecessors = vec![None, Some(0), None];
        assert_eq!(get_path(&predecessors, 2, 0).unwrap(), vec![0]);
    }

    #[test]
    fn cyclic_table_is_detected() {
        let predecessors = vec![None, Some(2), Some(1)];
        let err = get_path(&predecessors, 1, 0).unwrap_err();
        assert!(matches!(err, SsspError::CycleDetected { .. }));
    }

    #[test]
    fn self_loop_is_detected() {
        let predecessors = vec![None, Some(1)];
        assert!(get_path(&predecessors, 1, 0).is_err());
    }

    #[test]
    fn batch_paths_cover_every_vertex() {
        let predecessors = vec![None, Some(0), Some(1), Some(0)];
        let paths = get_paths(&predecessors, 0).unwrap();
        assert_eq!(paths, vec![vec![0], vec![1, 0], vec![2, 1, 0], vec![3, 0]]);
    }

    #[test]
    fn labelled_paths_and_unreachable_vertices() {
        let mut graph = Graph::new();
        graph.add_edge("A", "B", 2);
        graph.add_edge("X", "Y", 1);
        let result = compute(&graph, "A").unwrap();

        assert_eq!(result.path_to("B").unwrap(), Some(vec!["B", "A"]));
        assert_eq!(result.path_to("A").unwrap(), Some(vec!["A"]));
        assert_eq!(result.path_to("X").unwrap(), None);
        assert_eq!(result.path_to("nowhere").unwrap(), None);
        assert!(!result.is_reachable("Y"));

        let paths = result.paths().unwrap();
        assert_eq!(paths.len(), 4);
        assert_eq!(paths[3], ("Y", None));
    }

    #[test]
    fn path_cost_sums_edge_weights() {
        let mut graph = Graph::new();
        graph.add_edge("A", "B", 4);
        graph.add_edge("B", "C", 1);
        let result = compute(&graph, "A").unwrap();

        assert_eq!(result.path_cost(&["C", "B", "A"]), Some(5));
        assert_eq!(result.path_cost(&["A"]), Some(0));
        assert_eq!(result.path_cost(&["C", "A"]), None);
    }
}
