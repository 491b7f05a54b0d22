pub mod adjacency_list;
pub mod adjacency_map;
pub mod edge;
pub mod error;
pub mod graph;
pub mod prelude;
pub mod tracing_support;
pub mod vertex;

mod format_debug;

#[cfg(test)]
mod graph_test_support;

pub use adjacency_list::AdjacencyListGraph;
pub use adjacency_map::AdjacencyMapGraph;
pub use edge::Edge;
pub use error::{GraphError, Result};
pub use graph::{AdjacencyRecord, Graph, GraphMut};
pub use vertex::{Vertex, VertexKey};
