pub use crate::config::{GraphConfig, GraphRestrictions};
pub use crate::directedness::GraphDirectedness;
pub use crate::edge::{Edge, EdgeFactory};
pub use crate::edge_multiplicity::{EdgeMultiplicity, SelfLoops};
pub use crate::error::GraphError;
pub use crate::events::GraphEvent;
pub use crate::graph::Graph;
pub use crate::ids::{EdgeId, EdgeKey, VertexId, VertexKey};
pub use crate::vertex::{Vertex, VertexFactory};
