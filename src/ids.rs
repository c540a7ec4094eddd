//! Vertex and edge identities.
//!
//! Two kinds of identifier coexist.  [`VertexId`] and [`EdgeId`] are the
//! integer identities a vertex or edge is given when it is constructed; they
//! survive being moved between graphs and are what importers and
//! serializers see.  [`VertexKey`] and [`EdgeKey`] are handles issued by a
//! graph when the object is added to it.  A handle names an arena slot of one
//! specific graph and resolves in O(1).

use std::{
    fmt::{self, Debug, Display},
    sync::atomic::{AtomicU64, Ordering},
};

use derivative::Derivative;

use crate::{graph_id::GraphId, id_vec::IdVecKey};

static NEXT_VERTEX_ID: AtomicU64 = AtomicU64::new(1);
static NEXT_EDGE_ID: AtomicU64 = AtomicU64::new(1);

/// The integer identity of a vertex.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct VertexId(pub u64);

impl VertexId {
    /// Returns a vertex ID that has not been handed out before in this
    /// process.
    pub fn next() -> Self {
        VertexId(NEXT_VERTEX_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The integer identity of an edge.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct EdgeId(pub u64);

impl EdgeId {
    /// Returns an edge ID that has not been handed out before in this
    /// process.
    pub fn next() -> Self {
        EdgeId(NEXT_EDGE_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// Handles from different graphs never compare equal, but hashing the slot key
// alone is enough to spread them.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Derivative)]
#[derivative(Hash)]
struct Handle {
    key: IdVecKey,
    #[derivative(Hash = "ignore")]
    graph_id: GraphId,
}

/// Handle to a vertex stored in a [`Graph`](crate::Graph).
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexKey(Handle);

impl VertexKey {
    pub(crate) fn new(key: IdVecKey, graph_id: GraphId) -> Self {
        VertexKey(Handle { key, graph_id })
    }

    pub(crate) fn key(&self) -> IdVecKey {
        self.0.key
    }

    /// The graph that issued this handle.
    pub fn graph_id(&self) -> GraphId {
        self.0.graph_id
    }
}

impl Debug for VertexKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VertexKey({})", self.0.key.index())
    }
}

/// Handle to an edge stored in a [`Graph`](crate::Graph).
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeKey(Handle);

impl EdgeKey {
    pub(crate) fn new(key: IdVecKey, graph_id: GraphId) -> Self {
        EdgeKey(Handle { key, graph_id })
    }

    pub(crate) fn key(&self) -> IdVecKey {
        self.0.key
    }

    /// The graph that issued this handle.
    pub fn graph_id(&self) -> GraphId {
        self.0.graph_id
    }
}

impl Debug for EdgeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EdgeKey({})", self.0.key.index())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_ids_are_distinct() {
        let a = VertexId::next();
        let b = VertexId::next();
        assert_ne!(a, b);
        let e = EdgeId::next();
        let f = EdgeId::next();
        assert_ne!(e, f);
    }

    #[test]
    fn test_display() {
        assert_eq!(VertexId(7).to_string(), "7");
        assert_eq!(EdgeId(9).to_string(), "9");
    }
}
