mod common;

use std::collections::HashSet;

use common::{ArbGraph, check, has_duplicates, incident_by_scan};
use netmap::prelude::*;

fn prop_graph_is_consistent(arb: ArbGraph) -> bool {
    arb.build().check_consistency().is_ok()
}

#[test]
fn test_graph_is_consistent() {
    check(prop_graph_is_consistent as fn(ArbGraph) -> bool);
}

/// Walking a vertex's run yields exactly its incident edges, each once.
fn prop_run_integrity(arb: ArbGraph) -> bool {
    let graph = arb.build();
    graph.vertices().keys().all(|key| {
        let run = graph.vertex(key).unwrap().incident_edges();
        !has_duplicates(run.iter().copied())
            && run.into_iter().collect::<HashSet<_>>() == incident_by_scan(&graph, key)
    })
}

#[test]
fn test_run_integrity() {
    check(prop_run_integrity as fn(ArbGraph) -> bool);
}

/// A non-self-loop edge is in the runs of both of its vertices; a self-loop
/// is in the run of its vertex once.
fn prop_symmetry(arb: ArbGraph) -> bool {
    let graph = arb.build();
    graph.edges().iter().all(|(key, edge)| {
        let count = |vertex| {
            graph
                .vertex(vertex)
                .unwrap()
                .incident_edges()
                .into_iter()
                .filter(|&listed| listed == key)
                .count()
        };
        let (vertex1, vertex2) = edge.vertices();
        count(vertex1) == 1 && count(vertex2) == 1
    })
}

#[test]
fn test_symmetry() {
    check(prop_symmetry as fn(ArbGraph) -> bool);
}

/// The degree matches the run length, and incoming and outgoing edges
/// together make up the incident edges.  In an undirected graph every
/// incident edge is both incoming and outgoing.
fn prop_degree_consistency(arb: ArbGraph) -> bool {
    let graph = arb.build();
    graph.vertices().keys().all(|key| {
        let vertex = graph.vertex(key).unwrap();
        let incident = vertex.incident_edges();
        let incoming = vertex.incoming_edges();
        let outgoing = vertex.outgoing_edges();
        let both: HashSet<_> = incoming.iter().chain(&outgoing).copied().collect();
        let undirected_ok = graph.directedness() != GraphDirectedness::Undirected
            || (incoming.len() == vertex.degree() && outgoing.len() == vertex.degree());
        vertex.degree() == incident.len()
            && both == incident.iter().copied().collect()
            && undirected_ok
    })
}

#[test]
fn test_degree_consistency() {
    check(prop_degree_consistency as fn(ArbGraph) -> bool);
}

/// Removing a vertex removes every edge incident to it, and no remaining run
/// mentions it or its former edges.
fn prop_cascade_removal(arb: ArbGraph, pick: usize) -> bool {
    let mut graph = arb.build();
    let vertices: Vec<_> = graph.vertices().keys().collect();
    if vertices.is_empty() {
        return true;
    }
    let victim = vertices[pick % vertices.len()];
    let former = graph.vertex(victim).unwrap().incident_edges();
    let edges_before = graph.edges().len();
    assert!(graph.vertices_mut().remove(victim));

    graph.edges().len() == edges_before - former.len()
        && former.iter().all(|&edge| !graph.edges().contains(edge))
        && graph.edges().iter().all(|(_, edge)| !edge.touches(victim))
        && graph.vertices().keys().all(|key| {
            let vertex = graph.vertex(key).unwrap();
            vertex.incident_edges().iter().all(|edge| !former.contains(edge))
                && !vertex.adjacent_vertices().contains(&victim)
        })
        && graph.check_consistency().is_ok()
}

#[test]
fn test_cascade_removal() {
    check(prop_cascade_removal as fn(ArbGraph, usize) -> bool);
}

/// After a clear both collections are empty and queries on old keys find
/// nothing.  Clearing again changes nothing.
fn prop_idempotent_clear(arb: ArbGraph) -> bool {
    let mut graph = arb.build();
    let old: Vec<_> = graph.vertices().keys().collect();
    graph.clear();
    let cleared = graph.vertices().is_empty()
        && graph.edges().is_empty()
        && old.iter().all(|&a| {
            old.iter()
                .all(|&b| graph.connecting_edges(a, b).is_empty() && graph.vertex(a).is_none())
        });
    graph.clear();
    cleared && graph.vertices().is_empty() && graph.check_consistency().is_ok()
}

#[test]
fn test_idempotent_clear() {
    check(prop_idempotent_clear as fn(ArbGraph) -> bool);
}

/// Connecting edges agree with a scan of every edge, and self-loops show up
/// only when both vertices are the same.
fn prop_connecting_edges(arb: ArbGraph) -> bool {
    let graph = arb.build();
    let vertices: Vec<_> = graph.vertices().keys().collect();
    vertices.iter().all(|&a| {
        vertices.iter().all(|&b| {
            let found: HashSet<_> = graph.connecting_edges(a, b).into_iter().collect();
            let expected: HashSet<_> = graph
                .edges()
                .iter()
                .filter(|(_, edge)| {
                    let (v1, v2) = edge.vertices();
                    (v1 == a && v2 == b) || (v1 == b && v2 == a)
                })
                .map(|(key, _)| key)
                .collect();
            found == expected
        })
    })
}

#[test]
fn test_connecting_edges() {
    check(prop_connecting_edges as fn(ArbGraph) -> bool);
}

/// Neighbors are listed once each, however many edges lead to them.
fn prop_neighbors_are_unique(arb: ArbGraph) -> bool {
    let graph = arb.build();
    graph.vertices().keys().all(|key| {
        let vertex = graph.vertex(key).unwrap();
        !has_duplicates(vertex.predecessor_vertices())
            && !has_duplicates(vertex.successor_vertices())
            && !has_duplicates(vertex.adjacent_vertices())
    })
}

#[test]
fn test_neighbors_are_unique() {
    check(prop_neighbors_are_unique as fn(ArbGraph) -> bool);
}

/// Restrictions hold in every graph built under them.
fn prop_restrictions_hold(arb: ArbGraph) -> bool {
    let graph = arb.build();
    let restrictions = graph.restrictions();
    let edges: Vec<_> = graph.edges().iter().map(|(_, edge)| edge).collect();
    let self_loops_ok =
        restrictions.allows_self_loops() || edges.iter().all(|edge| !edge.is_self_loop());
    let parallel_ok = restrictions.allows_parallel_edges()
        || edges.iter().enumerate().all(|(i, a)| {
            edges[i + 1..].iter().all(|b| !a.is_parallel_to(b))
        });
    let directedness_ok = edges
        .iter()
        .all(|edge| graph.directedness().accepts_edge(edge.is_directed()));
    self_loops_ok && parallel_ok && directedness_ok
}

#[test]
fn test_restrictions_hold() {
    check(prop_restrictions_hold as fn(ArbGraph) -> bool);
}

/// A copy has the same shape under the returned key maps.
fn prop_copy_preserves_shape(arb: ArbGraph) -> bool {
    use std::collections::HashMap;

    let graph = arb.build();
    let mut vertex_map = HashMap::new();
    let mut edge_map = HashMap::new();
    let copy = netmap::GraphCopier::new(&graph)
        .with_vertex_map(&mut vertex_map)
        .with_edge_map(&mut edge_map)
        .copy();
    copy.check_consistency().is_ok()
        && copy.vertices().len() == graph.vertices().len()
        && copy.edges().len() == graph.edges().len()
        && graph.edges().iter().all(|(key, edge)| {
            let copied = copy.edges().get(edge_map[&key]).unwrap();
            let (v1, v2) = edge.vertices();
            copied.vertices() == (vertex_map[&v1], vertex_map[&v2])
                && copied.is_directed() == edge.is_directed()
        })
        && graph.vertices().keys().all(|key| {
            let original: Vec<_> = graph
                .vertex(key)
                .unwrap()
                .incident_edges()
                .into_iter()
                .map(|edge| edge_map[&edge])
                .collect();
            copy.vertex(vertex_map[&key]).unwrap().incident_edges() == original
        })
}

#[test]
fn test_copy_preserves_shape() {
    check(prop_copy_preserves_shape as fn(ArbGraph) -> bool);
}

/// Renaming and tagging every vertex and edge through the write views leaves
/// the runs intact, so every edge and vertex can still be removed.
fn prop_write_views_keep_runs_intact(arb: ArbGraph) -> bool {
    let mut graph = arb.build();
    let vertices: Vec<_> = graph.vertices().keys().collect();
    let edges: Vec<_> = graph.edges().keys().collect();
    for (i, &key) in vertices.iter().enumerate() {
        let mut vertex = graph.vertex_mut(key).unwrap();
        vertex.set_name(Some(format!("v{i}")));
        vertex.metadata_mut().set_tag(i);
    }
    for (i, &key) in edges.iter().enumerate() {
        let mut edge = graph.edge_mut(key).unwrap();
        edge.set_name(Some(format!("e{i}")));
        edge.metadata_mut().set_value("index", i);
    }
    if graph.check_consistency().is_err() {
        return false;
    }
    let half = edges.len() / 2;
    for &edge in &edges[..half] {
        if !graph.edges_mut().remove(edge) {
            return false;
        }
    }
    for &vertex in &vertices {
        if !graph.vertices_mut().remove(vertex) {
            return false;
        }
    }
    graph.vertices().is_empty() && graph.edges().is_empty() && graph.check_consistency().is_ok()
}

#[test]
fn test_write_views_keep_runs_intact() {
    check(prop_write_views_keep_runs_intact as fn(ArbGraph) -> bool);
}
