use std::sync::atomic::{AtomicUsize, Ordering};

/// A global graph identifier counter.  We assume no two graphs will have the
/// same identifier.  The counter could in principle wrap around, but the only
/// impact would be that two graphs share a `GraphId`, causing a handle from
/// one to be accepted by the other.
static GRAPH_ID_COUNTER: AtomicUsize = AtomicUsize::new(0);

/// A unique identifier for a graph instance.  Every vertex and edge handle
/// carries the `GraphId` of the graph that issued it.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug, PartialOrd, Ord)]
pub struct GraphId(usize);

impl GraphId {
    /// Create a new unique graph identifier.
    pub fn new() -> Self {
        GraphId(GRAPH_ID_COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for GraphId {
    fn default() -> Self {
        Self::new()
    }
}
