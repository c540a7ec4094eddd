//! Construction-time settings of a [`Graph`](crate::Graph).

use crate::{
    directedness::GraphDirectedness,
    edge_multiplicity::{EdgeMultiplicity, SelfLoops},
};

/// Restrictions on the edges a graph accepts.  The default imposes none.
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq)]
pub struct GraphRestrictions {
    pub self_loops: SelfLoops,
    pub multiplicity: EdgeMultiplicity,
}

impl GraphRestrictions {
    /// No restrictions.
    pub const NONE: Self = Self {
        self_loops: SelfLoops::Allowed,
        multiplicity: EdgeMultiplicity::MultipleEdges,
    };

    /// Rejects self-loops.
    pub const NO_SELF_LOOPS: Self = Self {
        self_loops: SelfLoops::Forbidden,
        multiplicity: EdgeMultiplicity::MultipleEdges,
    };

    /// Rejects parallel edges.
    pub const NO_PARALLEL_EDGES: Self = Self {
        self_loops: SelfLoops::Allowed,
        multiplicity: EdgeMultiplicity::SingleEdge,
    };

    /// Rejects both self-loops and parallel edges.
    pub const SIMPLE: Self = Self {
        self_loops: SelfLoops::Forbidden,
        multiplicity: EdgeMultiplicity::SingleEdge,
    };

    pub fn allows_self_loops(&self) -> bool {
        self.self_loops.allows_self_loops()
    }

    pub fn allows_parallel_edges(&self) -> bool {
        self.multiplicity.allows_parallel_edges()
    }
}

/// Settings fixed when a graph is created, apart from
/// `perform_extra_validations`, which may be toggled later.
///
/// `perform_extra_validations` trades speed for integrity: when set, adding a
/// vertex or edge scans the whole collection for an ID collision (O(n)
/// instead of O(1)), and [`EdgeCollection::contains`](crate::EdgeCollection::contains)
/// confirms that an edge is present in the runs of both of its vertices.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub struct GraphConfig {
    pub directedness: GraphDirectedness,
    pub restrictions: GraphRestrictions,
    pub perform_extra_validations: bool,
}

impl GraphConfig {
    pub fn new(directedness: GraphDirectedness) -> Self {
        Self {
            directedness,
            restrictions: GraphRestrictions::NONE,
            perform_extra_validations: true,
        }
    }

    pub fn with_restrictions(mut self, restrictions: GraphRestrictions) -> Self {
        self.restrictions = restrictions;
        self
    }

    pub fn with_extra_validations(mut self, perform_extra_validations: bool) -> Self {
        self.perform_extra_validations = perform_extra_validations;
        self
    }
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self::new(GraphDirectedness::Mixed)
    }
}
