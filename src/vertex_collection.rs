//! The vertices of a graph.

use std::ops::Deref;

use crate::{
    error::{GraphError, Result},
    events::GraphEvent,
    graph::Graph,
    graph_id::GraphId,
    id_vec::IdVec,
    ids::{VertexId, VertexKey},
    tracing_support::debug,
    vertex::{DefaultVertexFactory, Vertex, VertexFactory},
};

/// The vertices of one graph, in insertion order.
///
/// This type only answers questions; vertices are added and removed through
/// [`Graph::vertices_mut`].  Lookups by key are O(1); lookups by ID or name
/// scan the collection.
#[derive(Debug)]
pub struct VertexCollection {
    graph_id: GraphId,
    vertices: IdVec<Vertex>,
}

impl VertexCollection {
    pub(crate) fn new(graph_id: GraphId) -> Self {
        Self {
            graph_id,
            vertices: IdVec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Always false: a collection does no locking of its own.  Wrap the
    /// owning graph in a lock to share it between threads.
    pub fn is_synchronized(&self) -> bool {
        false
    }

    pub fn contains(&self, vertex: VertexKey) -> bool {
        self.get(vertex).is_some()
    }

    pub fn contains_id(&self, id: VertexId) -> bool {
        self.find_by_id(id).is_some()
    }

    pub fn contains_name(&self, name: &str) -> bool {
        self.find_by_name(name).is_some()
    }

    pub fn find_by_id(&self, id: VertexId) -> Option<VertexKey> {
        self.iter()
            .find(|(_, vertex)| vertex.id() == id)
            .map(|(key, _)| key)
    }

    /// Finds the first vertex, in insertion order, with the given name.
    pub fn find_by_name(&self, name: &str) -> Option<VertexKey> {
        self.iter()
            .find(|(_, vertex)| vertex.name() == Some(name))
            .map(|(key, _)| key)
    }

    /// Returns the vertex for `key`, or `None` if the key is stale or was
    /// issued by another graph.
    pub fn get(&self, vertex: VertexKey) -> Option<&Vertex> {
        if vertex.graph_id() != self.graph_id {
            return None;
        }
        self.vertices.get(vertex.key())
    }

    /// Iterates in insertion order.  Use `.rev()` or [`Self::iter_rev`] for
    /// the reverse order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (VertexKey, &Vertex)> + '_ {
        let graph_id = self.graph_id;
        self.vertices
            .iter()
            .map(move |(key, vertex)| (VertexKey::new(key, graph_id), vertex))
    }

    pub fn iter_rev(&self) -> impl Iterator<Item = (VertexKey, &Vertex)> + '_ {
        self.iter().rev()
    }

    pub fn keys(&self) -> impl DoubleEndedIterator<Item = VertexKey> + '_ {
        self.iter().map(|(key, _)| key)
    }

    pub(crate) fn get_mut(&mut self, vertex: VertexKey) -> Option<&mut Vertex> {
        if vertex.graph_id() != self.graph_id {
            return None;
        }
        self.vertices.get_mut(vertex.key())
    }

    /// Checks that `vertex` names a member, reporting `param` otherwise.
    pub(crate) fn check_member(&self, vertex: VertexKey, param: &'static str) -> Result<()> {
        if self.contains(vertex) {
            Ok(())
        } else {
            Err(GraphError::VertexNotInGraph { param })
        }
    }

    fn insert(&mut self, mut vertex: Vertex) -> VertexKey {
        vertex.set_parent_graph(Some(self.graph_id));
        VertexKey::new(self.vertices.insert(vertex), self.graph_id)
    }

    fn remove(&mut self, vertex: VertexKey) -> Option<Vertex> {
        let mut vertex = self.vertices.remove(vertex.key())?;
        vertex.set_parent_graph(None);
        Some(vertex)
    }

    fn clear(&mut self) {
        for (_, vertex) in self.vertices.iter_mut() {
            vertex.set_parent_graph(None);
        }
        self.vertices.clear();
    }
}

/// Adds and removes the vertices of a graph.  Obtained from
/// [`Graph::vertices_mut`]; read access is available through `Deref`.
pub struct VerticesMut<'g> {
    graph: &'g mut Graph,
}

impl<'g> VerticesMut<'g> {
    pub(crate) fn new(graph: &'g mut Graph) -> Self {
        Self { graph }
    }

    /// Moves `vertex` into the graph and returns its key.
    ///
    /// Fails if the vertex already belongs to a graph, or, when the graph
    /// performs extra validations, if another member has the same ID.
    pub fn add(&mut self, vertex: Vertex) -> Result<VertexKey> {
        if let Some(graph) = vertex.parent_graph() {
            return Err(GraphError::VertexAlreadyInGraph { graph });
        }
        if self.graph.perform_extra_validations() && self.graph.vertices.contains_id(vertex.id()) {
            return Err(GraphError::DuplicateVertexId { id: vertex.id() });
        }
        let id = vertex.id();
        let key = self.graph.vertices.insert(vertex);
        debug!(graph = ?self.graph.id(), ?key, %id, "added vertex");
        self.graph.after_mutation(GraphEvent::VertexAdded { vertex: key, id });
        Ok(key)
    }

    /// Creates a vertex with `factory` and adds it.
    pub fn add_with(&mut self, factory: &dyn VertexFactory) -> Result<VertexKey> {
        self.add(factory.create_vertex())
    }

    /// Creates a plain vertex and adds it.
    pub fn add_new(&mut self) -> Result<VertexKey> {
        self.add_with(&DefaultVertexFactory)
    }

    /// Removes a vertex and every edge incident to it.  Returns false if the
    /// vertex is not a member.
    pub fn remove(&mut self, vertex: VertexKey) -> bool {
        self.take(vertex).is_some()
    }

    pub fn remove_by_id(&mut self, id: VertexId) -> bool {
        match self.graph.vertices.find_by_id(id) {
            Some(vertex) => self.remove(vertex),
            None => false,
        }
    }

    /// Removes the first vertex, in insertion order, with the given name.
    pub fn remove_by_name(&mut self, name: &str) -> bool {
        match self.graph.vertices.find_by_name(name) {
            Some(vertex) => self.remove(vertex),
            None => false,
        }
    }

    /// Removes a vertex and every edge incident to it, and returns the
    /// detached vertex so that it can be added to another graph.
    pub fn take(&mut self, vertex: VertexKey) -> Option<Vertex> {
        if !self.graph.vertices.contains(vertex) {
            return None;
        }
        let removed_edges = self.graph.edges.remove_all_from_group(vertex);
        let detached = self.graph.vertices.remove(vertex)?;
        let id = detached.id();
        debug!(graph = ?self.graph.id(), ?vertex, %id, removed_edges, "removed vertex");
        self.graph
            .after_mutation(GraphEvent::VertexRemoved { vertex, id });
        Some(detached)
    }

    /// Removes every vertex, and with them every edge.
    pub fn clear(&mut self) {
        self.graph.vertices.clear();
        self.graph.edges.clear_all();
        debug!(graph = ?self.graph.id(), "cleared vertices");
        self.graph.check_after_mutation();
    }
}

impl Deref for VerticesMut<'_> {
    type Target = VertexCollection;

    fn deref(&self) -> &VertexCollection {
        &self.graph.vertices
    }
}
