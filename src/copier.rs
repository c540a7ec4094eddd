use std::collections::HashMap;

use crate::{
    graph::Graph,
    ids::{EdgeKey, VertexKey},
    tracing_support::debug,
};

/// Copies a graph into a new graph with the same configuration.  Uses a
/// builder pattern to choose what is copied besides the structure, and to
/// optionally record which key in the copy corresponds to which key in the
/// source.
///
/// Every copied vertex and edge gets a new ID.  Names are always copied;
/// metadata values and tags only on request, and then shallowly (the copy
/// shares the value objects with the source).  Edges are added in the
/// source's insertion order, so a vertex's run in the copy lists its edges in
/// the same order as in the source.
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use netmap::{Graph, GraphCopier};
///
/// let mut source = Graph::default();
/// let a = source.vertices_mut().add_new().unwrap();
/// source.edges_mut().connect(a, a, false).unwrap();
///
/// let mut vertex_map = HashMap::new();
/// let copy = GraphCopier::new(&source)
///     .copy_metadata_values(true)
///     .with_vertex_map(&mut vertex_map)
///     .copy();
/// assert_eq!(copy.vertex(vertex_map[&a]).unwrap().degree(), 1);
/// ```
pub struct GraphCopier<'g, 'm> {
    source: &'g Graph,
    copy_metadata_values: bool,
    copy_tags: bool,
    /// If set, cleared and filled with source key → copy key.
    vertex_map: Option<&'m mut HashMap<VertexKey, VertexKey>>,
    /// If set, cleared and filled with source key → copy key.
    edge_map: Option<&'m mut HashMap<EdgeKey, EdgeKey>>,
}

impl<'g, 'm> GraphCopier<'g, 'm> {
    pub fn new(source: &'g Graph) -> Self {
        Self {
            source,
            copy_metadata_values: false,
            copy_tags: false,
            vertex_map: None,
            edge_map: None,
        }
    }

    pub fn copy_metadata_values(mut self, value: bool) -> Self {
        self.copy_metadata_values = value;
        self
    }

    pub fn copy_tags(mut self, value: bool) -> Self {
        self.copy_tags = value;
        self
    }

    pub fn with_vertex_map(mut self, map: &'m mut HashMap<VertexKey, VertexKey>) -> Self {
        self.vertex_map = Some(map);
        self
    }

    pub fn with_edge_map(mut self, map: &'m mut HashMap<EdgeKey, EdgeKey>) -> Self {
        self.edge_map = Some(map);
        self
    }

    pub fn copy(self) -> Graph {
        let source = self.source;
        let mut target = Graph::new(*source.config());
        source.metadata().copy_to(
            target.metadata_mut(),
            self.copy_metadata_values,
            self.copy_tags,
        );

        let mut local_vertex_map = HashMap::new();
        let vertex_map = self.vertex_map.unwrap_or(&mut local_vertex_map);
        vertex_map.clear();
        for (key, vertex) in source.vertices().iter() {
            let copy = vertex.duplicate(self.copy_metadata_values, self.copy_tags);
            let new_key = match target.vertices_mut().add(copy) {
                Ok(new_key) => new_key,
                Err(err) => panic!("copy of {key:?} was rejected: {err}"),
            };
            vertex_map.insert(key, new_key);
        }

        let mut local_edge_map = HashMap::new();
        let edge_map = self.edge_map.unwrap_or(&mut local_edge_map);
        edge_map.clear();
        for (key, edge) in source.edges().iter() {
            let (vertex1, vertex2) = edge.vertices();
            let copy = edge.duplicate_between(
                vertex_map[&vertex1],
                vertex_map[&vertex2],
                self.copy_metadata_values,
                self.copy_tags,
            );
            let new_key = match target.edges_mut().add(copy) {
                Ok(new_key) => new_key,
                Err(err) => panic!("copy of {key:?} was rejected: {err}"),
            };
            edge_map.insert(key, new_key);
        }

        debug!(
            source = ?source.id(),
            target = ?target.id(),
            vertices = target.vertices().len(),
            edges = target.edges().len(),
            "copied graph"
        );
        target
    }
}
