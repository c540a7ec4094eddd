#![allow(dead_code)]

use std::collections::HashSet;
use std::hash::Hash;

use netmap::{prelude::*, tracing_support::init_tracing};
use quickcheck::{Arbitrary, Gen, QuickCheck, Testable};

/// One step in building a random graph.  Indices are taken modulo the number
/// of live vertices or edges when the step is applied.
#[derive(Clone, Copy, Debug)]
pub enum Op {
    AddVertex,
    AddEdge {
        from: usize,
        to: usize,
        directed: bool,
    },
    RemoveVertex(usize),
    RemoveEdge(usize),
}

impl Arbitrary for Op {
    fn arbitrary(g: &mut Gen) -> Self {
        match u8::arbitrary(g) % 10 {
            0..=2 => Op::AddVertex,
            3..=7 => Op::AddEdge {
                from: usize::arbitrary(g),
                to: usize::arbitrary(g),
                directed: bool::arbitrary(g),
            },
            8 => Op::RemoveVertex(usize::arbitrary(g)),
            _ => Op::RemoveEdge(usize::arbitrary(g)),
        }
    }
}

/// A random graph, described by its configuration and the operations that
/// build it so that quickcheck can shrink it.
#[derive(Clone, Debug)]
pub struct ArbGraph {
    pub config: GraphConfig,
    pub ops: Vec<Op>,
}

impl Arbitrary for ArbGraph {
    fn arbitrary(g: &mut Gen) -> Self {
        let directedness = *g
            .choose(&[
                GraphDirectedness::Directed,
                GraphDirectedness::Undirected,
                GraphDirectedness::Mixed,
            ])
            .unwrap();
        let restrictions = *g
            .choose(&[
                GraphRestrictions::NONE,
                GraphRestrictions::NO_SELF_LOOPS,
                GraphRestrictions::NO_PARALLEL_EDGES,
                GraphRestrictions::SIMPLE,
            ])
            .unwrap();
        let config = GraphConfig::new(directedness)
            .with_restrictions(restrictions)
            .with_extra_validations(bool::arbitrary(g));

        // A few vertices up front so that early edges have somewhere to go.
        let num_vertices = usize::arbitrary(g) % 8;
        let num_ops = usize::arbitrary(g) % 80;
        let ops = std::iter::repeat_n(Op::AddVertex, num_vertices)
            .chain((0..num_ops).map(|_| Op::arbitrary(g)))
            .collect();
        ArbGraph { config, ops }
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        let config = self.config;
        Box::new(self.ops.shrink().map(move |ops| ArbGraph { config, ops }))
    }
}

impl ArbGraph {
    pub fn build(&self) -> Graph {
        init_tracing();
        let mut graph = Graph::new(self.config);
        for op in &self.ops {
            apply(&mut graph, *op);
        }
        graph
    }
}

pub fn apply(graph: &mut Graph, op: Op) {
    match op {
        Op::AddVertex => {
            graph.vertices_mut().add_new().unwrap();
        }
        Op::AddEdge { from, to, directed } => {
            let vertices: Vec<_> = graph.vertices().keys().collect();
            if vertices.is_empty() {
                return;
            }
            let directed = match graph.directedness() {
                GraphDirectedness::Directed => true,
                GraphDirectedness::Undirected => false,
                GraphDirectedness::Mixed => directed,
            };
            let from = vertices[from % vertices.len()];
            let to = vertices[to % vertices.len()];
            match graph.edges_mut().connect(from, to, directed) {
                Ok(_) | Err(GraphError::SelfLoopNotAllowed | GraphError::ParallelEdgeNotAllowed) => {}
                Err(err) => panic!("unexpected error: {err}"),
            }
        }
        Op::RemoveVertex(index) => {
            let vertices: Vec<_> = graph.vertices().keys().collect();
            if !vertices.is_empty() {
                assert!(graph.vertices_mut().remove(vertices[index % vertices.len()]));
            }
        }
        Op::RemoveEdge(index) => {
            let edges: Vec<_> = graph.edges().keys().collect();
            if !edges.is_empty() {
                assert!(graph.edges_mut().remove(edges[index % edges.len()]));
            }
        }
    }
}

/// Runs a property with more cases when the `slow_tests` feature is on.
pub fn check<A: Testable>(property: A) {
    let tests = if cfg!(feature = "slow_tests") { 2000 } else { 100 };
    QuickCheck::new().tests(tests).quickcheck(property);
}

pub fn has_duplicates<T: Eq + Hash>(items: impl IntoIterator<Item = T>) -> bool {
    let mut seen = HashSet::new();
    for item in items {
        if !seen.insert(item) {
            return true;
        }
    }
    false
}

/// The edges incident to `vertex`, found by scanning every edge rather than
/// the vertex's run.
pub fn incident_by_scan(graph: &Graph, vertex: VertexKey) -> HashSet<EdgeKey> {
    graph
        .edges()
        .iter()
        .filter(|(_, edge)| edge.touches(vertex))
        .map(|(key, _)| key)
        .collect()
}

/// Builds a graph with one vertex per name.
pub fn named_graph(config: GraphConfig, names: &[&str]) -> (Graph, Vec<VertexKey>) {
    init_tracing();
    let mut graph = Graph::new(config);
    let vertices = names
        .iter()
        .map(|name| graph.vertices_mut().add(Vertex::new().named(*name)).unwrap())
        .collect();
    (graph, vertices)
}
