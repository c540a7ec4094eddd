use std::fmt::{self, Display};

/// The kinds of edges a graph accepts.
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum GraphDirectedness {
    /// Only directed edges.
    Directed,
    /// Only undirected edges.
    Undirected,
    /// Directed and undirected edges may coexist.
    #[default]
    Mixed,
}

impl GraphDirectedness {
    /// Returns true if an edge with the given directedness may be added to a
    /// graph with this directedness.
    pub fn accepts_edge(self, edge_is_directed: bool) -> bool {
        match self {
            GraphDirectedness::Directed => edge_is_directed,
            GraphDirectedness::Undirected => !edge_is_directed,
            GraphDirectedness::Mixed => true,
        }
    }

    /// The directedness given to edges created without an explicit flag.
    pub fn default_edge_is_directed(self) -> bool {
        matches!(self, GraphDirectedness::Directed)
    }
}

impl Display for GraphDirectedness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GraphDirectedness::Directed => "directed",
            GraphDirectedness::Undirected => "undirected",
            GraphDirectedness::Mixed => "mixed",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_edge() {
        assert!(GraphDirectedness::Directed.accepts_edge(true));
        assert!(!GraphDirectedness::Directed.accepts_edge(false));
        assert!(!GraphDirectedness::Undirected.accepts_edge(true));
        assert!(GraphDirectedness::Undirected.accepts_edge(false));
        assert!(GraphDirectedness::Mixed.accepts_edge(true));
        assert!(GraphDirectedness::Mixed.accepts_edge(false));
    }
}
