use std::ops::Deref;

use crate::{
    edge::Edge,
    graph::Graph,
    ids::{EdgeKey, VertexKey},
    metadata::Metadata,
    vertex_ref::VertexRef,
};

/// An edge of a graph, together with the graph it lives in.  Dereferences to
/// the [`Edge`] record.
#[derive(Clone, Copy, Debug)]
pub struct EdgeRef<'g> {
    graph: &'g Graph,
    key: EdgeKey,
    edge: &'g Edge,
}

impl<'g> EdgeRef<'g> {
    pub(crate) fn new(graph: &'g Graph, key: EdgeKey, edge: &'g Edge) -> Self {
        Self { graph, key, edge }
    }

    pub fn graph(&self) -> &'g Graph {
        self.graph
    }

    pub fn key(&self) -> EdgeKey {
        self.key
    }

    pub fn edge(&self) -> &'g Edge {
        self.edge
    }

    pub fn back_vertex(&self) -> VertexRef<'g> {
        self.vertex_ref(self.edge.back_vertex())
    }

    pub fn front_vertex(&self) -> VertexRef<'g> {
        self.vertex_ref(self.edge.front_vertex())
    }

    /// The vertex at the other end from `vertex`, or `None` if `vertex` is not
    /// on this edge.
    pub fn adjacent_vertex(&self, vertex: VertexKey) -> Option<VertexRef<'g>> {
        self.edge
            .adjacent_vertex(vertex)
            .map(|other| self.vertex_ref(other))
    }

    fn vertex_ref(&self, vertex: VertexKey) -> VertexRef<'g> {
        match self.graph.vertex(vertex) {
            Some(vertex) => vertex,
            None => panic!("{:?} has a dangling vertex {vertex:?}", self.key),
        }
    }
}

impl Deref for EdgeRef<'_> {
    type Target = Edge;

    fn deref(&self) -> &Edge {
        self.edge
    }
}

impl PartialEq for EdgeRef<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for EdgeRef<'_> {}

/// Write access to an edge of a graph.  Only the name and metadata can be
/// changed; the vertices, directedness and ID are fixed once the edge is
/// listed in their runs.
#[derive(Debug)]
pub struct EdgeMut<'g> {
    key: EdgeKey,
    edge: &'g mut Edge,
}

impl<'g> EdgeMut<'g> {
    pub(crate) fn new(key: EdgeKey, edge: &'g mut Edge) -> Self {
        Self { key, edge }
    }

    pub fn key(&self) -> EdgeKey {
        self.key
    }

    pub fn set_name(&mut self, name: Option<String>) {
        self.edge.set_name(name);
    }

    pub fn metadata_mut(&mut self) -> &mut Metadata {
        self.edge.metadata_mut()
    }
}

impl Deref for EdgeMut<'_> {
    type Target = Edge;

    fn deref(&self) -> &Edge {
        self.edge
    }
}
