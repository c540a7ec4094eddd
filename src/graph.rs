//! The graph type.
//!
//! A [`Graph`] owns a [`VertexCollection`] and an [`EdgeCollection`].  Client
//! code adds vertices first, then edges between them.  Removing a vertex
//! removes every edge incident to it, and clearing the vertices clears the
//! edges too.
//!
//! Vertices and edges are moved into the graph and addressed afterwards by
//! the [`VertexKey`]s and [`EdgeKey`]s it hands out.  Keys are tied to the
//! graph that issued them; a key from another graph is never a member.
//!
//! A graph does no locking.  To share one between threads, wrap it in a
//! `Mutex`.

use derivative::Derivative;

use crate::{
    config::{GraphConfig, GraphRestrictions},
    copier::GraphCopier,
    directedness::GraphDirectedness,
    edge_collection::{EdgeCollection, EdgesMut},
    edge_ref::{EdgeMut, EdgeRef},
    error::ConsistencyError,
    events::{GraphEvent, ObserverId, Observers},
    graph_id::GraphId,
    ids::{EdgeKey, VertexKey},
    metadata::Metadata,
    tracing_support::debug,
    vertex_collection::{VertexCollection, VerticesMut},
    vertex_ref::{VertexMut, VertexRef},
};

#[derive(Derivative)]
#[derivative(Debug)]
pub struct Graph {
    pub(crate) id: GraphId,
    pub(crate) config: GraphConfig,
    pub(crate) metadata: Metadata,
    pub(crate) vertices: VertexCollection,
    pub(crate) edges: EdgeCollection,
    #[derivative(Debug = "ignore")]
    pub(crate) observers: Observers,
}

impl Graph {
    pub fn new(config: GraphConfig) -> Self {
        let id = GraphId::new();
        debug!(graph = ?id, ?config, "created graph");
        Self {
            id,
            config,
            metadata: Metadata::new(),
            vertices: VertexCollection::new(id),
            edges: EdgeCollection::new(id, config.perform_extra_validations),
            observers: Observers::default(),
        }
    }

    pub fn id(&self) -> GraphId {
        self.id
    }

    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    pub fn directedness(&self) -> GraphDirectedness {
        self.config.directedness
    }

    pub fn restrictions(&self) -> GraphRestrictions {
        self.config.restrictions
    }

    pub fn perform_extra_validations(&self) -> bool {
        self.config.perform_extra_validations
    }

    /// Turns the O(n) duplicate-ID checks on add and the second run lookup in
    /// [`EdgeCollection::contains`] on or off.
    pub fn set_perform_extra_validations(&mut self, value: bool) {
        self.config.perform_extra_validations = value;
        self.edges.set_perform_extra_validations(value);
    }

    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    pub fn metadata_mut(&mut self) -> &mut Metadata {
        &mut self.metadata
    }

    pub fn vertices(&self) -> &VertexCollection {
        &self.vertices
    }

    pub fn vertices_mut(&mut self) -> VerticesMut<'_> {
        VerticesMut::new(self)
    }

    pub fn edges(&self) -> &EdgeCollection {
        &self.edges
    }

    pub fn edges_mut(&mut self) -> EdgesMut<'_> {
        EdgesMut::new(self)
    }

    pub fn vertex(&self, key: VertexKey) -> Option<VertexRef<'_>> {
        let vertex = self.vertices.get(key)?;
        Some(VertexRef::new(self, key, vertex))
    }

    /// Write access to the name and metadata of a vertex.
    pub fn vertex_mut(&mut self, key: VertexKey) -> Option<VertexMut<'_>> {
        let vertex = self.vertices.get_mut(key)?;
        Some(VertexMut::new(key, vertex))
    }

    pub fn edge(&self, key: EdgeKey) -> Option<EdgeRef<'_>> {
        let edge = self.edges.get(key)?;
        Some(EdgeRef::new(self, key, edge))
    }

    /// Write access to the name and metadata of an edge.
    pub fn edge_mut(&mut self, key: EdgeKey) -> Option<EdgeMut<'_>> {
        let edge = self.edges.get_mut(key)?;
        Some(EdgeMut::new(key, edge))
    }

    /// The edges connecting two vertices.  Returns an empty list when either
    /// vertex is not a member of this graph.
    pub fn connecting_edges(&self, vertex1: VertexKey, vertex2: VertexKey) -> Vec<EdgeKey> {
        if !self.vertices.contains(vertex1) || !self.vertices.contains(vertex2) {
            return Vec::new();
        }
        self.edges.connecting_edges(vertex1, vertex2)
    }

    /// Removes every edge, then every vertex.  No events are fired.
    pub fn clear(&mut self) {
        self.edges_mut().clear();
        self.vertices_mut().clear();
    }

    /// Registers a callback that is called after every vertex or edge is
    /// added or removed.
    pub fn subscribe(&mut self, observer: impl FnMut(&GraphEvent) + Send + 'static) -> ObserverId {
        self.observers.subscribe(Box::new(observer))
    }

    /// Cancels a subscription.  Returns false if it was already cancelled.
    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        self.observers.unsubscribe(id)
    }

    /// Checks every structural invariant of the graph.
    pub fn check_consistency(&self) -> Result<(), ConsistencyError> {
        crate::consistency::check_consistency(self)
    }

    /// Panics with a description of the first broken invariant, if any.
    #[track_caller]
    pub fn assert_consistent(&self) {
        if let Err(err) = self.check_consistency() {
            panic!("graph {:?} is inconsistent: {err}", self.id);
        }
    }

    /// Copies this graph's structure into a new graph with the same
    /// configuration.  Copies get new IDs; names are kept, and metadata values
    /// and tags (of the graph, its vertices and its edges) are copied only when
    /// requested.  Observers are not copied.
    pub fn duplicate(&self, copy_metadata_values: bool, copy_tag: bool) -> Graph {
        GraphCopier::new(self)
            .copy_metadata_values(copy_metadata_values)
            .copy_tags(copy_tag)
            .copy()
    }

    /// Runs the post-mutation check and delivers `event`.
    pub(crate) fn after_mutation(&mut self, event: GraphEvent) {
        self.check_after_mutation();
        self.observers.notify(event);
    }

    pub(crate) fn check_after_mutation(&self) {
        #[cfg(feature = "paranoid")]
        self.assert_consistent();
    }
}

impl Default for Graph {
    fn default() -> Self {
        Self::new(GraphConfig::default())
    }
}
