use crate::Graph;
use crate::relaxation::{RelaxationOptions, compute_with};
use crate::graph::Directedness;
use petgraph::visit::{EdgeRef, GraphProp, IntoEdgeReferences, IntoNodeIdentifiers, NodeIndexable};
use std::collections::HashMap;
use std::hash::Hash;

/// Run the relaxation engine on any petgraph graph, the same way petgraph's own
/// `bellman_ford` or `dijkstra` are called. Directed petgraph graphs are relaxed
/// forward only.
///
/// Returns the distance to every reachable node; unreachable nodes are absent.
pub fn bellman_ford_paths<G>(graph: G, start: G::NodeId) -> HashMap<G::NodeId, i64>
where
    G: IntoEdgeReferences + IntoNodeIdentifiers + NodeIndexable + GraphProp,
    G::NodeId: Eq + Hash + Copy,
    G::EdgeWeight: Into<i64> + Copy,
{
    let mut our_graph = Graph::new();
    let mut node_map = HashMap::new();
    let mut reverse_node_map = Vec::new();

    for node in graph.node_identifiers() {
        let label = graph.to_index(node).to_string();
        node_map.insert(node, label.clone());
        reverse_node_map.push((node, label));
    }

    for edge in graph.edge_references() {
        let source = &node_map[&edge.source()];
        let target = &node_map[&edge.target()];
        our_graph.add_edge(source, target, (*edge.weight()).into());
    }

    let options = RelaxationOptions {
        directedness: if graph.is_directed() {
            Directedness::Directed
        } else {
            Directedness::Undirected
        },
        ..RelaxationOptions::default()
    };

    let mut result = HashMap::new();
    // Isolated start node: no edges touch it, so it never entered `our_graph`.
    if our_graph.vertex_id(&node_map[&start]).is_none() {
        result.insert(start, 0);
        return result;
    }

    let Ok(paths) = compute_with(&our_graph, &node_map[&start], &options) else {
        return result;
    };

    for (node, label) in reverse_node_map {
        if let Some(cost) = paths.distance(&label).and_then(|d| d.get()) {
            result.insert(node, cost);
        }
    }
    result
}
