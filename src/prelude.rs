pub use crate::adjacency_list::AdjacencyListGraph;
pub use crate::adjacency_map::AdjacencyMapGraph;
pub use crate::edge::Edge;
pub use crate::error::GraphError;
pub use crate::graph::{AdjacencyRecord, Graph, GraphMut};
pub use crate::vertex::Vertex;
