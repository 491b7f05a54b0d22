use crate::Vertex;

/// Errors reported by graph mutations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    #[error("Duplicate vertex: {0}")]
    DuplicateVertex(Vertex),

    #[error("Vertex is not in the graph: {0}")]
    UnregisteredVertex(Vertex),
}

pub type Result<T, E = GraphError> = std::result::Result<T, E>;
