use crate::{
    graph_id::GraphId,
    ids::{EdgeId, VertexKey},
    metadata::Metadata,
};

/// An edge record connecting two vertices of one graph.
///
/// For a directed edge the first vertex is the back (tail) vertex and the
/// second is the front (head) vertex.  For a self-loop both are the same.
#[derive(Debug)]
pub struct Edge {
    id: EdgeId,
    name: Option<String>,
    directed: bool,
    vertices: (VertexKey, VertexKey),
    metadata: Metadata,
    parent_graph: Option<GraphId>,
}

impl Edge {
    /// Creates a detached edge with a freshly generated ID.
    pub fn new(vertex1: VertexKey, vertex2: VertexKey, directed: bool) -> Self {
        Self::with_id(EdgeId::next(), vertex1, vertex2, directed)
    }

    /// Creates a detached edge with a caller-chosen ID.
    pub fn with_id(id: EdgeId, vertex1: VertexKey, vertex2: VertexKey, directed: bool) -> Self {
        Self {
            id,
            name: None,
            directed,
            vertices: (vertex1, vertex2),
            metadata: Metadata::new(),
            parent_graph: None,
        }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn id(&self) -> EdgeId {
        self.id
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn set_name(&mut self, name: Option<String>) {
        self.name = name;
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    pub fn vertices(&self) -> (VertexKey, VertexKey) {
        self.vertices
    }

    /// The back (tail) vertex of a directed edge; the first vertex of an
    /// undirected one.
    pub fn back_vertex(&self) -> VertexKey {
        self.vertices.0
    }

    /// The front (head) vertex of a directed edge; the second vertex of an
    /// undirected one.
    pub fn front_vertex(&self) -> VertexKey {
        self.vertices.1
    }

    pub fn is_self_loop(&self) -> bool {
        self.vertices.0 == self.vertices.1
    }

    /// Returns true if `vertex` is one of this edge's vertices.
    pub fn touches(&self, vertex: VertexKey) -> bool {
        self.vertices.0 == vertex || self.vertices.1 == vertex
    }

    /// Given one vertex of the edge, returns the other one.  For a self-loop
    /// the vertex itself is returned.  Returns `None` if `vertex` is not on
    /// this edge.
    pub fn adjacent_vertex(&self, vertex: VertexKey) -> Option<VertexKey> {
        if self.vertices.0 == vertex {
            Some(self.vertices.1)
        } else if self.vertices.1 == vertex {
            Some(self.vertices.0)
        } else {
            None
        }
    }

    /// Returns true if `other` connects the same vertices with the same
    /// directedness: the same ordered pair for directed edges, the same
    /// unordered pair for undirected ones.  An edge is parallel to itself.
    pub fn is_parallel_to(&self, other: &Edge) -> bool {
        if self.directed != other.directed {
            return false;
        }
        let (a, b) = self.vertices;
        let (c, d) = other.vertices;
        if self.directed {
            a == c && b == d
        } else {
            (a == c && b == d) || (a == d && b == c)
        }
    }

    /// Returns true if both edges are directed and `other` runs between the
    /// same vertices in the opposite direction.  Self-loops are never
    /// antiparallel.
    pub fn is_antiparallel_to(&self, other: &Edge) -> bool {
        if !self.directed || !other.directed || self.is_self_loop() {
            return false;
        }
        self.vertices.0 == other.vertices.1 && self.vertices.1 == other.vertices.0
    }

    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    pub fn metadata_mut(&mut self) -> &mut Metadata {
        &mut self.metadata
    }

    /// The graph this edge belongs to, or `None` while detached.
    pub fn parent_graph(&self) -> Option<GraphId> {
        self.parent_graph
    }

    pub(crate) fn set_parent_graph(&mut self, parent_graph: Option<GraphId>) {
        self.parent_graph = parent_graph;
    }

    /// Creates a detached copy of this edge between two other vertices, with
    /// a new ID and the same name and directedness.
    pub fn duplicate_between(
        &self,
        vertex1: VertexKey,
        vertex2: VertexKey,
        copy_metadata_values: bool,
        copy_tag: bool,
    ) -> Edge {
        let mut copy = Edge::new(vertex1, vertex2, self.directed);
        copy.name = self.name.clone();
        self.metadata
            .copy_to(&mut copy.metadata, copy_metadata_values, copy_tag);
        copy
    }
}

/// Creates edges for a graph.
pub trait EdgeFactory {
    fn create_edge(&self, vertex1: VertexKey, vertex2: VertexKey, directed: bool) -> Edge;
}

/// Creates plain edges with generated IDs.
#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultEdgeFactory;

impl EdgeFactory for DefaultEdgeFactory {
    fn create_edge(&self, vertex1: VertexKey, vertex2: VertexKey, directed: bool) -> Edge {
        Edge::new(vertex1, vertex2, directed)
    }
}

impl<F> EdgeFactory for F
where
    F: Fn(VertexKey, VertexKey, bool) -> Edge,
{
    fn create_edge(&self, vertex1: VertexKey, vertex2: VertexKey, directed: bool) -> Edge {
        self(vertex1, vertex2, directed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{graph_id::GraphId, id_vec::IdVec};

    fn keys(n: usize) -> Vec<VertexKey> {
        let graph_id = GraphId::new();
        let mut vec = IdVec::new();
        (0..n)
            .map(|i| VertexKey::new(vec.insert(i), graph_id))
            .collect()
    }

    #[test]
    fn test_adjacent_vertex() {
        let v = keys(3);
        let edge = Edge::new(v[0], v[1], false);
        assert_eq!(edge.adjacent_vertex(v[0]), Some(v[1]));
        assert_eq!(edge.adjacent_vertex(v[1]), Some(v[0]));
        assert_eq!(edge.adjacent_vertex(v[2]), None);
        let self_loop = Edge::new(v[2], v[2], true);
        assert!(self_loop.is_self_loop());
        assert_eq!(self_loop.adjacent_vertex(v[2]), Some(v[2]));
    }

    #[test]
    fn test_parallel_undirected_ignores_order() {
        let v = keys(3);
        let e1 = Edge::new(v[0], v[1], false);
        let e2 = Edge::new(v[1], v[0], false);
        let e3 = Edge::new(v[0], v[2], false);
        assert!(e1.is_parallel_to(&e2));
        assert!(e1.is_parallel_to(&e1));
        assert!(!e1.is_parallel_to(&e3));
    }

    #[test]
    fn test_parallel_directed_respects_order() {
        let v = keys(2);
        let e1 = Edge::new(v[0], v[1], true);
        let e2 = Edge::new(v[0], v[1], true);
        let reverse = Edge::new(v[1], v[0], true);
        let undirected = Edge::new(v[0], v[1], false);
        assert!(e1.is_parallel_to(&e2));
        assert!(!e1.is_parallel_to(&reverse));
        assert!(!e1.is_parallel_to(&undirected));
        assert!(e1.is_antiparallel_to(&reverse));
        assert!(!e1.is_antiparallel_to(&e2));
        assert!(!e1.is_antiparallel_to(&undirected));
    }

    #[test]
    fn test_self_loops_are_parallel_not_antiparallel() {
        let v = keys(1);
        let l1 = Edge::new(v[0], v[0], true);
        let l2 = Edge::new(v[0], v[0], true);
        assert!(l1.is_parallel_to(&l2));
        assert!(!l1.is_antiparallel_to(&l2));
    }

    #[test]
    fn test_duplicate_between() {
        let v = keys(4);
        let mut edge = Edge::new(v[0], v[1], true).named("e");
        edge.metadata_mut().set_value("w", 2u32);
        let copy = edge.duplicate_between(v[2], v[3], true, false);
        assert_ne!(copy.id(), edge.id());
        assert_eq!(copy.vertices(), (v[2], v[3]));
        assert!(copy.is_directed());
        assert_eq!(copy.name(), Some("e"));
        assert_eq!(copy.metadata().value::<u32>("w"), Some(&2));
    }
}
