use std::{
    collections::{HashMap, hash_map::Entry},
    fmt::Debug,
};

use crate::{
    Edge, Graph, GraphMut, Vertex,
    error::{GraphError, Result},
    format_debug::format_debug,
    tracing_support::debug,
};

/// A graph that stores, for each vertex, a map from each neighbor to the edge
/// connecting them.
///
/// Multiple edges between the same pair of vertices are not supported; adding
/// an edge between two vertices that are already connected replaces the stored
/// edge without changing [`Graph::size`].
#[derive(Clone, Default)]
pub struct AdjacencyMapGraph {
    adjacency: HashMap<Vertex, HashMap<Vertex, Edge>>,
}

impl AdjacencyMapGraph {
    /// Gets the edge stored for `head` and `tail`, exactly as it was passed to
    /// [`GraphMut::add_edge`].
    pub fn stored_edge(&self, head: &Vertex, tail: &Vertex) -> Option<&Edge> {
        self.adjacency.get(head)?.get(tail)
    }

    fn edges_mut(&mut self, vertex: &Vertex) -> Result<&mut HashMap<Vertex, Edge>> {
        self.adjacency
            .get_mut(vertex)
            .ok_or_else(|| GraphError::UnregisteredVertex(vertex.clone()))
    }
}

impl Graph for AdjacencyMapGraph {
    type Adjacency = HashMap<Vertex, Edge>;

    fn adjacency(&self) -> impl Iterator<Item = (&Vertex, &Self::Adjacency)> + '_ {
        self.adjacency.iter()
    }

    fn adjacency_of(&self, vertex: &Vertex) -> Option<&Self::Adjacency> {
        self.adjacency.get(vertex)
    }

    /// Returns the stored edge, so its endpoints are in the order used when it
    /// was added, which may be `(tail, head)`.
    fn find_edge(&self, head: &Vertex, tail: &Vertex) -> Option<Edge> {
        self.stored_edge(head, tail).cloned()
    }
}

impl GraphMut for AdjacencyMapGraph {
    fn new() -> Self {
        Self {
            adjacency: HashMap::new(),
        }
    }

    fn add_vertex(&mut self, vertex: Vertex) -> Result<()> {
        match self.adjacency.entry(vertex) {
            Entry::Occupied(entry) => {
                debug!(vertex = %entry.key(), "rejected duplicate vertex");
                Err(GraphError::DuplicateVertex(entry.key().clone()))
            }
            Entry::Vacant(entry) => {
                debug!(vertex = %entry.key(), "added vertex");
                entry.insert(HashMap::new());
                Ok(())
            }
        }
    }

    #[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
    fn add_edge(&mut self, edge: Edge) -> Result<()> {
        if let Err(error) = self
            .check_vertex(edge.head())
            .and_then(|()| self.check_vertex(edge.tail()))
        {
            debug!(%edge, %error, "rejected edge");
            return Err(error);
        }
        let (head, tail) = (edge.head().clone(), edge.tail().clone());
        let replaced = self.edges_mut(&head)?.insert(tail.clone(), edge.clone());
        debug!(%edge, replaced = replaced.is_some(), "added edge");
        self.edges_mut(&tail)?.insert(head, edge);
        Ok(())
    }

    #[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
    fn remove_edge(&mut self, edge: &Edge) {
        let (a, b) = edge.endpoints();
        let Some(edges) = self.adjacency.get_mut(a) else {
            return;
        };
        let removed_forward = edges.remove(b).is_some();
        let removed_backward = self
            .adjacency
            .get_mut(b)
            .is_some_and(|edges| edges.remove(a).is_some());
        debug!(%edge, removed_forward, removed_backward, "removed edge");
    }
}

impl Debug for AdjacencyMapGraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        format_debug(self, f, "AdjacencyMapGraph")
    }
}
