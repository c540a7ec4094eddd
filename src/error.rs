use crate::{
    directedness::GraphDirectedness,
    graph_id::GraphId,
    ids::{EdgeId, EdgeKey, VertexId, VertexKey},
};

pub type Result<T> = std::result::Result<T, GraphError>;

/// A caller broke the contract of a graph operation.  The graph is left
/// unchanged when one of these is returned.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    /// A vertex handle does not name a vertex of this graph.
    #[error("{param}: the vertex does not belong to this graph")]
    VertexNotInGraph { param: &'static str },
    /// The vertex being added is already a member of a graph.
    #[error("vertex: the vertex already belongs to graph {graph:?}")]
    VertexAlreadyInGraph { graph: GraphId },
    /// The edge being added is already a member of a graph.
    #[error("edge: the edge already belongs to graph {graph:?}")]
    EdgeAlreadyInGraph { graph: GraphId },
    /// Another vertex of the graph already has this ID.
    #[error("vertex: a vertex with ID {id} already exists in this graph")]
    DuplicateVertexId { id: VertexId },
    /// Another edge of the graph already has this ID.
    #[error("edge: an edge with ID {id} already exists in this graph")]
    DuplicateEdgeId { id: EdgeId },
    /// The graph forbids self-loops.
    #[error("edge: the graph does not allow self-loops")]
    SelfLoopNotAllowed,
    /// The graph forbids parallel edges and one already connects the vertices.
    #[error("edge: the graph does not allow parallel edges, and an edge parallel to this one exists")]
    ParallelEdgeNotAllowed,
    /// The edge's directedness conflicts with the graph's.
    #[error("edge: a {graph} graph cannot contain {} edges", edge_kind(.edge_is_directed))]
    DirectednessMismatch {
        graph: GraphDirectedness,
        edge_is_directed: bool,
    },
    /// A metadata key that must be present is missing.
    #[error("key: no metadata value is stored under {key:?}")]
    MissingMetadataKey { key: String },
    /// A metadata value exists but is of another type.
    #[error("key: the metadata value stored under {key:?} is not a {expected}")]
    MetadataTypeMismatch { key: String, expected: &'static str },
}

fn edge_kind(edge_is_directed: &bool) -> &'static str {
    if *edge_is_directed { "directed" } else { "undirected" }
}

impl GraphError {
    /// The name of the offending parameter.
    pub fn param(&self) -> &'static str {
        match self {
            GraphError::VertexNotInGraph { param } => *param,
            GraphError::VertexAlreadyInGraph { .. } | GraphError::DuplicateVertexId { .. } => {
                "vertex"
            }
            GraphError::EdgeAlreadyInGraph { .. }
            | GraphError::DuplicateEdgeId { .. }
            | GraphError::SelfLoopNotAllowed
            | GraphError::ParallelEdgeNotAllowed
            | GraphError::DirectednessMismatch { .. } => "edge",
            GraphError::MissingMetadataKey { .. } | GraphError::MetadataTypeMismatch { .. } => {
                "key"
            }
        }
    }
}

/// A violated structural invariant, as reported by
/// [`Graph::check_consistency`](crate::Graph::check_consistency).  Any of
/// these indicates a bug in this crate.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConsistencyError {
    #[error("the run of {vertex:?} lists {edge:?}, which is not a live edge")]
    DeadEdgeInRun { vertex: VertexKey, edge: EdgeKey },
    #[error("the run of {vertex:?} lists {edge:?}, which is not incident to it")]
    ForeignEdgeInRun { vertex: VertexKey, edge: EdgeKey },
    #[error("the run of {vertex:?} lists {edge:?} {count} times")]
    DuplicateRunEntry {
        vertex: VertexKey,
        edge: EdgeKey,
        count: usize,
    },
    #[error("{edge:?} is missing from the run of its vertex {vertex:?}")]
    EdgeMissingFromRun { vertex: VertexKey, edge: EdgeKey },
    #[error("{vertex:?} refers to {edge:?}, but its graph has no such vertex")]
    DanglingEndpoint { vertex: VertexKey, edge: EdgeKey },
    #[error("a run exists for slot {slot}, which holds no vertex")]
    OrphanRun { slot: usize },
    #[error("{vertex:?} has parent graph {found:?}, expected {expected:?}")]
    WrongParent {
        vertex: VertexKey,
        found: Option<GraphId>,
        expected: GraphId,
    },
    #[error("{edge:?} has parent graph {found:?}, expected {expected:?}")]
    WrongEdgeParent {
        edge: EdgeKey,
        found: Option<GraphId>,
        expected: GraphId,
    },
    #[error("{live} run nodes are live, but the runs hold {reachable}")]
    RunNodeLeak { live: usize, reachable: usize },
    #[error("vertex ID {0} is used more than once")]
    DuplicateVertexId(VertexId),
    #[error("edge ID {0} is used more than once")]
    DuplicateEdgeId(EdgeId),
}
