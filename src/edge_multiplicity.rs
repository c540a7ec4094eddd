/// Whether a graph may hold more than one edge between the same pair of
/// vertices.
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum EdgeMultiplicity {
    /// At most one edge per vertex pair (with matching directedness).
    SingleEdge,
    /// Parallel edges are allowed.
    #[default]
    MultipleEdges,
}

impl EdgeMultiplicity {
    pub fn allows_parallel_edges(&self) -> bool {
        match self {
            EdgeMultiplicity::SingleEdge => false,
            EdgeMultiplicity::MultipleEdges => true,
        }
    }
}

/// Whether a graph may hold edges whose two ends are the same vertex.
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum SelfLoops {
    #[default]
    Allowed,
    Forbidden,
}

impl SelfLoops {
    pub fn allows_self_loops(&self) -> bool {
        matches!(self, SelfLoops::Allowed)
    }
}
