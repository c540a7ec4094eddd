use std::ops::Deref;

use crate::{
    edge_ref::EdgeRef,
    graph::Graph,
    ids::{EdgeKey, VertexKey},
    metadata::Metadata,
    vertex::Vertex,
};

/// A vertex of a graph, together with the graph it lives in.  Dereferences
/// to the [`Vertex`] record and adds the adjacency queries that need the
/// graph's edge collection.
#[derive(Clone, Copy, Debug)]
pub struct VertexRef<'g> {
    graph: &'g Graph,
    key: VertexKey,
    vertex: &'g Vertex,
}

impl<'g> VertexRef<'g> {
    pub(crate) fn new(graph: &'g Graph, key: VertexKey, vertex: &'g Vertex) -> Self {
        Self { graph, key, vertex }
    }

    pub fn graph(&self) -> &'g Graph {
        self.graph
    }

    pub fn key(&self) -> VertexKey {
        self.key
    }

    pub fn vertex(&self) -> &'g Vertex {
        self.vertex
    }

    /// The number of incident edges.  A self-loop counts once.
    pub fn degree(&self) -> usize {
        self.graph.edges.degree(self.key)
    }

    /// All incident edges, most recently added first.
    pub fn incident_edges(&self) -> Vec<EdgeKey> {
        self.graph.edges.incident_edges(self.key)
    }

    /// Directed edges pointing at this vertex, plus all undirected incident
    /// edges.
    pub fn incoming_edges(&self) -> Vec<EdgeKey> {
        self.graph
            .edges
            .incoming_or_outgoing_edges(self.key, true, false)
    }

    /// Directed edges leaving this vertex, plus all undirected incident edges.
    pub fn outgoing_edges(&self) -> Vec<EdgeKey> {
        self.graph
            .edges
            .incoming_or_outgoing_edges(self.key, false, true)
    }

    /// The vertices at the other end of the incoming edges, each listed once.
    pub fn predecessor_vertices(&self) -> Vec<VertexKey> {
        self.graph
            .edges
            .predecessor_or_successor_vertices(self.key, true, false)
    }

    /// The vertices at the other end of the outgoing edges, each listed once.
    pub fn successor_vertices(&self) -> Vec<VertexKey> {
        self.graph
            .edges
            .predecessor_or_successor_vertices(self.key, false, true)
    }

    /// Every vertex sharing an edge with this one, each listed once.  A vertex
    /// with a self-loop is adjacent to itself.
    pub fn adjacent_vertices(&self) -> Vec<VertexKey> {
        self.graph.edges.adjacent_vertices(self.key)
    }

    /// The edges between this vertex and `other`.  Self-loops are returned
    /// only when `other` is this vertex.
    pub fn connecting_edges(&self, other: VertexKey) -> Vec<EdgeKey> {
        self.graph.connecting_edges(self.key, other)
    }

    pub fn is_incident_edge(&self, edge: EdgeKey) -> bool {
        self.graph.edges.run_contains(self.key, edge)
    }

    pub fn is_incoming_edge(&self, edge: EdgeKey) -> bool {
        self.is_incident_edge(edge)
            && self
                .graph
                .edges
                .get(edge)
                .is_some_and(|e| !e.is_directed() || e.front_vertex() == self.key)
    }

    pub fn is_outgoing_edge(&self, edge: EdgeKey) -> bool {
        self.is_incident_edge(edge)
            && self
                .graph
                .edges
                .get(edge)
                .is_some_and(|e| !e.is_directed() || e.back_vertex() == self.key)
    }

    /// The incident edges as [`EdgeRef`]s, most recently added first.
    pub fn edge_refs(&self) -> impl Iterator<Item = EdgeRef<'g>> + 'g {
        let graph = self.graph;
        self.incident_edges()
            .into_iter()
            .filter_map(move |edge| graph.edge(edge))
    }
}

impl Deref for VertexRef<'_> {
    type Target = Vertex;

    fn deref(&self) -> &Vertex {
        self.vertex
    }
}

impl PartialEq for VertexRef<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for VertexRef<'_> {}

/// Write access to a vertex of a graph.  Only the name and metadata can be
/// changed; the ID and the owning graph stay fixed while the vertex is a
/// member.
#[derive(Debug)]
pub struct VertexMut<'g> {
    key: VertexKey,
    vertex: &'g mut Vertex,
}

impl<'g> VertexMut<'g> {
    pub(crate) fn new(key: VertexKey, vertex: &'g mut Vertex) -> Self {
        Self { key, vertex }
    }

    pub fn key(&self) -> VertexKey {
        self.key
    }

    pub fn set_name(&mut self, name: Option<String>) {
        self.vertex.set_name(name);
    }

    pub fn metadata_mut(&mut self) -> &mut Metadata {
        self.vertex.metadata_mut()
    }
}

impl Deref for VertexMut<'_> {
    type Target = Vertex;

    fn deref(&self) -> &Vertex {
        self.vertex
    }
}

#[cfg(test)]
mod tests {
    use crate::{config::GraphConfig, directedness::GraphDirectedness, graph::Graph};

    #[test]
    fn test_directed_queries() {
        let mut graph = Graph::new(GraphConfig::new(GraphDirectedness::Mixed));
        let a = graph.vertices_mut().add_new().unwrap();
        let b = graph.vertices_mut().add_new().unwrap();
        let c = graph.vertices_mut().add_new().unwrap();
        let ab = graph.edges_mut().connect(a, b, true).unwrap();
        let ca = graph.edges_mut().connect(c, a, false).unwrap();
        let aa = graph.edges_mut().connect(a, a, true).unwrap();

        let va = graph.vertex(a).unwrap();
        assert_eq!(va.degree(), 3);
        assert_eq!(va.incident_edges(), vec![aa, ca, ab]);
        assert_eq!(va.incoming_edges(), vec![aa, ca]);
        assert_eq!(va.outgoing_edges(), vec![aa, ca, ab]);
        assert_eq!(va.predecessor_vertices(), vec![a, c]);
        assert_eq!(va.successor_vertices(), vec![a, c, b]);
        assert_eq!(va.adjacent_vertices(), vec![a, c, b]);
        assert!(va.is_outgoing_edge(ab));
        assert!(!va.is_incoming_edge(ab));
        assert!(va.is_incoming_edge(ca) && va.is_outgoing_edge(ca));
        assert!(va.is_incoming_edge(aa) && va.is_outgoing_edge(aa));
        assert_eq!(va.connecting_edges(a), vec![aa]);
        assert_eq!(va.edge_refs().count(), 3);

        let vb = graph.vertex(b).unwrap();
        assert_eq!(vb.incoming_edges(), vec![ab]);
        assert!(vb.outgoing_edges().is_empty());
        assert_eq!(vb.predecessor_vertices(), vec![a]);
        assert!(vb.successor_vertices().is_empty());
        assert!(!vb.is_incident_edge(ca));
        assert_eq!(vb.id(), graph.vertices().get(b).unwrap().id());
    }

    #[test]
    fn test_vertex_mut_changes_name_and_metadata_only() {
        let mut graph = Graph::new(GraphConfig::new(GraphDirectedness::Undirected));
        let a = graph.vertices_mut().add_new().unwrap();
        let id = graph.vertices().get(a).unwrap().id();
        {
            let mut vertex = graph.vertex_mut(a).unwrap();
            assert_eq!(vertex.key(), a);
            vertex.set_name(Some("A".to_string()));
            vertex.metadata_mut().set_tag(7u32);
        }
        let vertex = graph.vertex(a).unwrap();
        assert_eq!(vertex.name(), Some("A"));
        assert_eq!(vertex.metadata().tag::<u32>(), Some(&7));
        assert_eq!(vertex.id(), id);
        assert_eq!(vertex.parent_graph(), Some(graph.id()));
        assert_eq!(graph.vertices().find_by_name("A"), Some(a));
        graph.assert_consistent();
    }
}
