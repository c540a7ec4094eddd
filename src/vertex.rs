use crate::{graph_id::GraphId, ids::VertexId, metadata::Metadata};

/// A vertex record.  A vertex is created detached, then moved into a graph
/// with [`VerticesMut::add`](crate::VerticesMut::add), which stamps the
/// owning graph on it.
#[derive(Debug)]
pub struct Vertex {
    id: VertexId,
    name: Option<String>,
    metadata: Metadata,
    parent_graph: Option<GraphId>,
}

impl Vertex {
    /// Creates a detached vertex with a freshly generated ID.
    pub fn new() -> Self {
        Self::with_id(VertexId::next())
    }

    /// Creates a detached vertex with a caller-chosen ID.  Uniqueness is only
    /// checked when the vertex is added to a graph that performs extra
    /// validations.
    pub fn with_id(id: VertexId) -> Self {
        Self {
            id,
            name: None,
            metadata: Metadata::new(),
            parent_graph: None,
        }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn id(&self) -> VertexId {
        self.id
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn set_name(&mut self, name: Option<String>) {
        self.name = name;
    }

    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    pub fn metadata_mut(&mut self) -> &mut Metadata {
        &mut self.metadata
    }

    /// The graph this vertex belongs to, or `None` while detached.
    pub fn parent_graph(&self) -> Option<GraphId> {
        self.parent_graph
    }

    pub(crate) fn set_parent_graph(&mut self, parent_graph: Option<GraphId>) {
        self.parent_graph = parent_graph;
    }

    /// Creates a detached copy of this vertex with a new ID and the same name.
    /// Metadata values and the tag are copied only when requested.
    pub fn duplicate(&self, copy_metadata_values: bool, copy_tag: bool) -> Vertex {
        let mut copy = Vertex::new();
        copy.name = self.name.clone();
        self.metadata
            .copy_to(&mut copy.metadata, copy_metadata_values, copy_tag);
        copy
    }
}

impl Default for Vertex {
    fn default() -> Self {
        Self::new()
    }
}

/// Creates vertices for a graph.  Custom factories let clients build vertices
/// with pre-populated names, metadata or identities.
pub trait VertexFactory {
    fn create_vertex(&self) -> Vertex;
}

/// Creates plain vertices with generated IDs.
#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultVertexFactory;

impl VertexFactory for DefaultVertexFactory {
    fn create_vertex(&self) -> Vertex {
        Vertex::new()
    }
}

impl<F> VertexFactory for F
where
    F: Fn() -> Vertex,
{
    fn create_vertex(&self) -> Vertex {
        self()
    }
}
