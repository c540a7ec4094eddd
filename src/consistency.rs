//! The one routine that checks every structural invariant of a graph.
//!
//! Production paths never call this; tests do, and so does every mutation
//! when the `paranoid` feature is enabled.

use std::collections::{HashMap, HashSet};

use crate::{error::ConsistencyError, graph::Graph, tracing_support::info_span};

pub(crate) fn check_consistency(graph: &Graph) -> Result<(), ConsistencyError> {
    let _span = info_span!("check_consistency").entered();
    let vertices = graph.vertices();
    let edges = graph.edges();
    let runs = edges.runs();

    for (key, vertex) in vertices.iter() {
        if vertex.parent_graph() != Some(graph.id()) {
            return Err(ConsistencyError::WrongParent {
                vertex: key,
                found: vertex.parent_graph(),
                expected: graph.id(),
            });
        }
    }

    for (slot, owner) in runs.run_owners() {
        if !vertices.contains(owner) {
            return Err(ConsistencyError::OrphanRun { slot });
        }
    }

    // Every run lists only live edges incident to its vertex, each once.
    let mut reachable = 0;
    for vertex in vertices.keys() {
        let mut counts = HashMap::new();
        for edge in runs.iter(vertex) {
            reachable += 1;
            let Some(record) = edges.get(edge) else {
                return Err(ConsistencyError::DeadEdgeInRun { vertex, edge });
            };
            if !record.touches(vertex) {
                return Err(ConsistencyError::ForeignEdgeInRun { vertex, edge });
            }
            *counts.entry(edge).or_insert(0usize) += 1;
        }
        if let Some((&edge, &count)) = counts.iter().find(|&(_, &count)| count > 1) {
            return Err(ConsistencyError::DuplicateRunEntry {
                vertex,
                edge,
                count,
            });
        }
    }

    // Every edge is listed in the runs of both of its vertices.
    for (edge, record) in edges.iter() {
        if record.parent_graph() != Some(graph.id()) {
            return Err(ConsistencyError::WrongEdgeParent {
                edge,
                found: record.parent_graph(),
                expected: graph.id(),
            });
        }
        let (vertex1, vertex2) = record.vertices();
        for vertex in [vertex1, vertex2] {
            if !vertices.contains(vertex) {
                return Err(ConsistencyError::DanglingEndpoint { vertex, edge });
            }
            if !runs.run_contains(vertex, edge) {
                return Err(ConsistencyError::EdgeMissingFromRun { vertex, edge });
            }
        }
    }

    if runs.live_nodes() != reachable {
        return Err(ConsistencyError::RunNodeLeak {
            live: runs.live_nodes(),
            reachable,
        });
    }

    if graph.perform_extra_validations() {
        let mut seen = HashSet::new();
        for (_, vertex) in vertices.iter() {
            if !seen.insert(vertex.id()) {
                return Err(ConsistencyError::DuplicateVertexId(vertex.id()));
            }
        }
        let mut seen = HashSet::new();
        for (_, edge) in edges.iter() {
            if !seen.insert(edge.id()) {
                return Err(ConsistencyError::DuplicateEdgeId(edge.id()));
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::GraphConfig, directedness::GraphDirectedness, ids::VertexId, vertex::Vertex,
    };

    #[test]
    fn test_fresh_and_populated_graphs_are_consistent() {
        let mut graph = Graph::new(GraphConfig::new(GraphDirectedness::Mixed));
        assert_eq!(check_consistency(&graph), Ok(()));
        let a = graph.vertices_mut().add_new().unwrap();
        let b = graph.vertices_mut().add_new().unwrap();
        graph.edges_mut().connect(a, b, true).unwrap();
        graph.edges_mut().connect(b, a, false).unwrap();
        graph.edges_mut().connect(a, a, false).unwrap();
        assert_eq!(check_consistency(&graph), Ok(()));
        graph.vertices_mut().remove(a);
        assert_eq!(check_consistency(&graph), Ok(()));
    }

    #[test]
    fn test_detects_wrong_parent() {
        let mut graph = Graph::default();
        let a = graph.vertices_mut().add_new().unwrap();
        graph.vertices.get_mut(a).unwrap().set_parent_graph(None);
        assert_eq!(
            check_consistency(&graph),
            Err(ConsistencyError::WrongParent {
                vertex: a,
                found: None,
                expected: graph.id(),
            })
        );
    }

    #[test]
    fn test_detects_duplicate_ids_only_with_extra_validations() {
        let mut graph = Graph::default();
        graph.set_perform_extra_validations(false);
        graph.vertices_mut().add(Vertex::with_id(VertexId(1 << 40))).unwrap();
        graph.vertices_mut().add(Vertex::with_id(VertexId(1 << 40))).unwrap();
        assert_eq!(check_consistency(&graph), Ok(()));
        graph.set_perform_extra_validations(true);
        assert_eq!(
            check_consistency(&graph),
            Err(ConsistencyError::DuplicateVertexId(VertexId(1 << 40)))
        );
    }

    #[test]
    fn test_detects_desynchronized_run() {
        let mut graph = Graph::default();
        let a = graph.vertices_mut().add_new().unwrap();
        let b = graph.vertices_mut().add_new().unwrap();
        let e = graph.edges_mut().connect(a, b, false).unwrap();
        assert!(graph.edges.runs_mut().remove_from_group(b, e));
        assert_eq!(
            check_consistency(&graph),
            Err(ConsistencyError::EdgeMissingFromRun { vertex: b, edge: e })
        );
    }
}
