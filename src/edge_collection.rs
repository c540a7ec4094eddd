//! The edges of a graph and the incidence runs of its vertices.

use std::{collections::HashSet, ops::Deref};

use crate::{
    config::GraphConfig,
    edge::{DefaultEdgeFactory, Edge, EdgeFactory},
    error::{GraphError, Result},
    events::GraphEvent,
    graph::Graph,
    graph_id::GraphId,
    id_vec::IdVec,
    ids::{EdgeId, EdgeKey, VertexKey},
    incidence::Runs,
    tracing_support::debug,
    vertex_collection::VertexCollection,
};

/// The edges of one graph, in insertion order, together with the run of
/// incident edges of every vertex.
///
/// Edges are added and removed through [`Graph::edges_mut`].  Vertex-level
/// adjacency queries are exposed through [`VertexRef`](crate::VertexRef).
#[derive(Debug)]
pub struct EdgeCollection {
    graph_id: GraphId,
    edges: IdVec<Edge>,
    runs: Runs,
    perform_extra_validations: bool,
}

impl EdgeCollection {
    pub(crate) fn new(graph_id: GraphId, perform_extra_validations: bool) -> Self {
        Self {
            graph_id,
            edges: IdVec::new(),
            runs: Runs::new(),
            perform_extra_validations,
        }
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Always false: a collection does no locking of its own.  Wrap the
    /// owning graph in a lock to share it between threads.
    pub fn is_synchronized(&self) -> bool {
        false
    }

    /// Returns true if `edge` is a member of this collection.
    ///
    /// The edge is looked up in the run of its first vertex, and, when the
    /// graph performs extra validations, in the run of its second vertex too.
    ///
    /// # Panics
    ///
    /// Panics if a live edge is missing from the run of one of its vertices.
    pub fn contains(&self, edge: EdgeKey) -> bool {
        let Some(record) = self.get(edge) else {
            return false;
        };
        let (vertex1, vertex2) = record.vertices();
        let in_first = self.runs.run_contains(vertex1, edge);
        assert!(
            in_first,
            "{edge:?} is live but missing from the run of {vertex1:?}"
        );
        if self.perform_extra_validations && vertex1 != vertex2 {
            let in_second = self.runs.run_contains(vertex2, edge);
            assert!(
                in_second,
                "{edge:?} is in the run of {vertex1:?} but not in the run of {vertex2:?}"
            );
        }
        true
    }

    pub fn contains_id(&self, id: EdgeId) -> bool {
        self.find_by_id(id).is_some()
    }

    pub fn contains_name(&self, name: &str) -> bool {
        self.find_by_name(name).is_some()
    }

    pub fn find_by_id(&self, id: EdgeId) -> Option<EdgeKey> {
        self.iter()
            .find(|(_, edge)| edge.id() == id)
            .map(|(key, _)| key)
    }

    /// Finds the first edge, in insertion order, with the given name.
    pub fn find_by_name(&self, name: &str) -> Option<EdgeKey> {
        self.iter()
            .find(|(_, edge)| edge.name() == Some(name))
            .map(|(key, _)| key)
    }

    /// Returns the edge for `key`, or `None` if the key is stale or was issued
    /// by another graph.
    pub fn get(&self, edge: EdgeKey) -> Option<&Edge> {
        if edge.graph_id() != self.graph_id {
            return None;
        }
        self.edges.get(edge.key())
    }

    pub(crate) fn get_mut(&mut self, edge: EdgeKey) -> Option<&mut Edge> {
        if edge.graph_id() != self.graph_id {
            return None;
        }
        self.edges.get_mut(edge.key())
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (EdgeKey, &Edge)> + '_ {
        let graph_id = self.graph_id;
        self.edges
            .iter()
            .map(move |(key, edge)| (EdgeKey::new(key, graph_id), edge))
    }

    pub fn keys(&self) -> impl DoubleEndedIterator<Item = EdgeKey> + '_ {
        self.iter().map(|(key, _)| key)
    }

    /// The edges connecting `vertex1` and `vertex2`, in the run order of
    /// `vertex1`.  A self-loop is only returned when both arguments are the
    /// same vertex.  Vertices without incident edges, including vertices of
    /// other graphs, have no connecting edges.
    pub fn connecting_edges(&self, vertex1: VertexKey, vertex2: VertexKey) -> Vec<EdgeKey> {
        self.runs
            .iter(vertex1)
            .filter(|&edge| self.endpoint(edge).adjacent_vertex(vertex1) == Some(vertex2))
            .collect()
    }

    /// The edges in the run of `vertex`, most recently added first.
    pub(crate) fn incident_edges(&self, vertex: VertexKey) -> Vec<EdgeKey> {
        self.runs.iter(vertex).collect()
    }

    /// Scans the run of `vertex` once.  A directed edge is incoming when
    /// `vertex` is its front vertex and outgoing when `vertex` is its back
    /// vertex (so a directed self-loop is both); an undirected edge is both.
    pub(crate) fn incoming_or_outgoing_edges(
        &self,
        vertex: VertexKey,
        include_incoming: bool,
        include_outgoing: bool,
    ) -> Vec<EdgeKey> {
        if !include_incoming && !include_outgoing {
            return Vec::new();
        }
        self.runs
            .iter(vertex)
            .filter(|&edge| {
                self.qualifies(self.endpoint(edge), vertex, include_incoming, include_outgoing)
            })
            .collect()
    }

    /// Like [`Self::incoming_or_outgoing_edges`], but returns the vertex at the
    /// other end of each qualifying edge.  A vertex reached through several
    /// parallel edges is listed once; keys identify vertices uniquely within
    /// a graph, so they serve as the de-duplication set.
    pub(crate) fn predecessor_or_successor_vertices(
        &self,
        vertex: VertexKey,
        include_predecessors: bool,
        include_successors: bool,
    ) -> Vec<VertexKey> {
        let mut seen = HashSet::new();
        let mut result = Vec::new();
        for edge in self.runs.iter(vertex) {
            let record = self.endpoint(edge);
            if !self.qualifies(record, vertex, include_predecessors, include_successors) {
                continue;
            }
            let Some(adjacent) = record.adjacent_vertex(vertex) else {
                panic!("{edge:?} is in the run of {vertex:?} but does not touch it");
            };
            if seen.insert(adjacent) {
                result.push(adjacent);
            }
        }
        result
    }

    /// The number of entries in the run of `vertex`.  A self-loop counts once.
    pub(crate) fn degree(&self, vertex: VertexKey) -> usize {
        self.runs.len(vertex)
    }

    pub(crate) fn adjacent_vertices(&self, vertex: VertexKey) -> Vec<VertexKey> {
        self.predecessor_or_successor_vertices(vertex, true, true)
    }

    pub(crate) fn run_contains(&self, vertex: VertexKey, edge: EdgeKey) -> bool {
        self.runs.run_contains(vertex, edge)
    }

    pub(crate) fn runs(&self) -> &Runs {
        &self.runs
    }

    #[cfg(test)]
    pub(crate) fn runs_mut(&mut self) -> &mut Runs {
        &mut self.runs
    }

    pub(crate) fn set_perform_extra_validations(&mut self, value: bool) {
        self.perform_extra_validations = value;
    }

    /// Validates `edge` against `vertices` and `config`, then stores it and
    /// lists it in the runs of its vertices.  Nothing is changed on error.
    pub(crate) fn insert(
        &mut self,
        vertices: &VertexCollection,
        config: &GraphConfig,
        mut edge: Edge,
    ) -> Result<EdgeKey> {
        if let Some(graph) = edge.parent_graph() {
            return Err(GraphError::EdgeAlreadyInGraph { graph });
        }
        let (vertex1, vertex2) = edge.vertices();
        vertices.check_member(vertex1, "vertex1")?;
        vertices.check_member(vertex2, "vertex2")?;
        if edge.is_self_loop() && !config.restrictions.allows_self_loops() {
            return Err(GraphError::SelfLoopNotAllowed);
        }
        if !config.directedness.accepts_edge(edge.is_directed()) {
            return Err(GraphError::DirectednessMismatch {
                graph: config.directedness,
                edge_is_directed: edge.is_directed(),
            });
        }
        if config.perform_extra_validations && self.contains_id(edge.id()) {
            return Err(GraphError::DuplicateEdgeId { id: edge.id() });
        }
        if !config.restrictions.allows_parallel_edges()
            && self
                .connecting_edges(vertex1, vertex2)
                .into_iter()
                .any(|existing| self.endpoint(existing).is_parallel_to(&edge))
        {
            return Err(GraphError::ParallelEdgeNotAllowed);
        }

        edge.set_parent_graph(Some(self.graph_id));
        let key = EdgeKey::new(self.edges.insert(edge), self.graph_id);
        self.runs.add_to_group(vertex1, key);
        if vertex1 != vertex2 {
            self.runs.add_to_group(vertex2, key);
        }
        Ok(key)
    }

    /// Unlists `edge` from the runs of its vertices and removes it.
    ///
    /// # Panics
    ///
    /// Panics if the edge is missing from either run.  Both runs are checked
    /// before either is changed.
    pub(crate) fn delete(&mut self, edge: EdgeKey) -> Option<Edge> {
        let (vertex1, vertex2) = self.get(edge)?.vertices();
        if !self.runs.run_contains(vertex1, edge) {
            panic!("{edge:?} is missing from the run of {vertex1:?}");
        }
        if vertex1 != vertex2 && !self.runs.run_contains(vertex2, edge) {
            panic!("{edge:?} was in the run of {vertex1:?} but is missing from the run of {vertex2:?}");
        }
        self.runs.remove_from_group(vertex1, edge);
        if vertex1 != vertex2 {
            self.runs.remove_from_group(vertex2, edge);
        }
        let mut removed = self.edges.remove(edge.key())?;
        removed.set_parent_graph(None);
        Some(removed)
    }

    /// Removes every edge incident to `vertex`: each one is unlisted from the
    /// run of its other vertex, then the run of `vertex` is discarded.  Used
    /// only when `vertex` itself is being removed.  Returns the number of
    /// edges removed.
    ///
    /// # Panics
    ///
    /// Panics if an edge in the run is not live or is missing from the run of
    /// its other vertex.  Every run is checked before any is changed.
    pub(crate) fn remove_all_from_group(&mut self, vertex: VertexKey) -> usize {
        let incident = self.incident_edges(vertex);
        let mut others = Vec::with_capacity(incident.len());
        for &edge in &incident {
            let Some(other) = self.endpoint(edge).adjacent_vertex(vertex) else {
                panic!("{edge:?} is in the run of {vertex:?} but does not touch it");
            };
            if other != vertex && !self.runs.run_contains(other, edge) {
                panic!("{edge:?} was in the run of {vertex:?} but is missing from the run of {other:?}");
            }
            others.push(other);
        }
        for (&edge, &other) in incident.iter().zip(&others) {
            if other != vertex {
                self.runs.remove_from_group(other, edge);
            }
        }
        self.runs.take_run(vertex);
        for &edge in &incident {
            self.edges.remove(edge.key());
        }
        incident.len()
    }

    /// Drops every edge and every run.
    pub(crate) fn clear_all(&mut self) {
        for (_, edge) in self.edges.iter_mut() {
            edge.set_parent_graph(None);
        }
        self.edges.clear();
        self.runs.clear();
    }

    /// The record of an edge found in a run.
    fn endpoint(&self, edge: EdgeKey) -> &Edge {
        match self.edges.get(edge.key()) {
            Some(record) => record,
            None => panic!("a run lists {edge:?}, which is not a live edge"),
        }
    }

    fn qualifies(
        &self,
        edge: &Edge,
        vertex: VertexKey,
        include_incoming: bool,
        include_outgoing: bool,
    ) -> bool {
        if !edge.is_directed() {
            return include_incoming || include_outgoing;
        }
        (include_incoming && edge.front_vertex() == vertex)
            || (include_outgoing && edge.back_vertex() == vertex)
    }
}

/// Adds and removes the edges of a graph.  Obtained from
/// [`Graph::edges_mut`]; read access is available through `Deref`.
pub struct EdgesMut<'g> {
    graph: &'g mut Graph,
}

impl<'g> EdgesMut<'g> {
    pub(crate) fn new(graph: &'g mut Graph) -> Self {
        Self { graph }
    }

    /// Moves `edge` into the graph and returns its key.
    ///
    /// The checks run in this order, before anything is changed: the edge is
    /// not already in a graph, both vertices belong to this graph, a self-loop
    /// is allowed, the directedness suits the graph, the ID is unused (with
    /// extra validations only), and no parallel edge exists if the graph
    /// forbids them.
    pub fn add(&mut self, edge: Edge) -> Result<EdgeKey> {
        let id = edge.id();
        let key = self
            .graph
            .edges
            .insert(&self.graph.vertices, &self.graph.config, edge)?;
        debug!(graph = ?self.graph.id(), ?key, %id, "added edge");
        self.graph.after_mutation(GraphEvent::EdgeAdded { edge: key, id });
        Ok(key)
    }

    /// Creates an edge with `factory` and adds it.
    pub fn add_with(
        &mut self,
        factory: &dyn EdgeFactory,
        vertex1: VertexKey,
        vertex2: VertexKey,
        directed: bool,
    ) -> Result<EdgeKey> {
        self.add(factory.create_edge(vertex1, vertex2, directed))
    }

    /// Creates a plain edge between two vertices and adds it.
    pub fn connect(&mut self, vertex1: VertexKey, vertex2: VertexKey, directed: bool) -> Result<EdgeKey> {
        self.add_with(&DefaultEdgeFactory, vertex1, vertex2, directed)
    }

    /// Like [`Self::connect`], with the edge directed exactly when the graph
    /// is directed.
    pub fn connect_default(&mut self, vertex1: VertexKey, vertex2: VertexKey) -> Result<EdgeKey> {
        let directed = self.graph.directedness().default_edge_is_directed();
        self.connect(vertex1, vertex2, directed)
    }

    /// Removes an edge.  Returns false if it is not a member.
    pub fn remove(&mut self, edge: EdgeKey) -> bool {
        self.take(edge).is_some()
    }

    pub fn remove_by_id(&mut self, id: EdgeId) -> bool {
        match self.graph.edges.find_by_id(id) {
            Some(edge) => self.remove(edge),
            None => false,
        }
    }

    /// Removes the first edge, in insertion order, with the given name.
    pub fn remove_by_name(&mut self, name: &str) -> bool {
        match self.graph.edges.find_by_name(name) {
            Some(edge) => self.remove(edge),
            None => false,
        }
    }

    /// Removes an edge and returns the detached record.
    pub fn take(&mut self, edge: EdgeKey) -> Option<Edge> {
        let removed = self.graph.edges.delete(edge)?;
        let id = removed.id();
        debug!(graph = ?self.graph.id(), ?edge, %id, "removed edge");
        self.graph
            .after_mutation(GraphEvent::EdgeRemoved { edge, id });
        Some(removed)
    }

    /// Removes every edge.  The vertices stay.
    pub fn clear(&mut self) {
        self.graph.edges.clear_all();
        debug!(graph = ?self.graph.id(), "cleared edges");
        self.graph.check_after_mutation();
    }
}

impl Deref for EdgesMut<'_> {
    type Target = EdgeCollection;

    fn deref(&self) -> &EdgeCollection {
        &self.graph.edges
    }
}
