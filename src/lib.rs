//! A mutable multigraph whose vertices each keep a run of their incident
//! edges.
//!
//! Graphs may be directed, undirected or mixed, and may hold self-loops and
//! parallel edges unless their [`GraphRestrictions`] forbid them.  All edges
//! of a graph are listed in one shared arena of run nodes, partitioned into
//! one run per vertex, which makes adding an edge O(1) and answers degree,
//! incidence and neighbor queries in O(degree).
//!
//! ```
//! use netmap::prelude::*;
//!
//! let mut graph = Graph::new(GraphConfig::new(GraphDirectedness::Undirected));
//! let a = graph.vertices_mut().add(Vertex::new().named("A")).unwrap();
//! let b = graph.vertices_mut().add(Vertex::new().named("B")).unwrap();
//! let ab = graph.edges_mut().connect(a, b, false).unwrap();
//!
//! assert_eq!(graph.vertex(a).unwrap().degree(), 1);
//! assert_eq!(graph.connecting_edges(b, a), vec![ab]);
//!
//! graph.vertices_mut().remove(b);
//! assert!(graph.edges().is_empty());
//! ```

pub mod config;
pub mod copier;
pub mod directedness;
pub mod edge;
pub mod edge_collection;
pub mod edge_multiplicity;
pub mod edge_ref;
pub mod error;
pub mod events;
pub mod graph;
pub mod graph_id;
pub mod ids;
pub mod metadata;
pub mod prelude;
pub mod tracing_support;
pub mod vertex;
pub mod vertex_collection;
pub mod vertex_ref;

mod consistency;
mod id_vec;
mod incidence;

pub use config::{GraphConfig, GraphRestrictions};
pub use copier::GraphCopier;
pub use directedness::GraphDirectedness;
pub use edge::{DefaultEdgeFactory, Edge, EdgeFactory};
pub use edge_collection::{EdgeCollection, EdgesMut};
pub use edge_multiplicity::{EdgeMultiplicity, SelfLoops};
pub use edge_ref::{EdgeMut, EdgeRef};
pub use error::{ConsistencyError, GraphError, Result};
pub use events::{GraphEvent, ObserverId};
pub use graph::Graph;
pub use graph_id::GraphId;
pub use ids::{EdgeId, EdgeKey, VertexId, VertexKey};
pub use metadata::Metadata;
pub use vertex::{DefaultVertexFactory, Vertex, VertexFactory};
pub use vertex_collection::{VertexCollection, VerticesMut};
pub use vertex_ref::{VertexMut, VertexRef};
