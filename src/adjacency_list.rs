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

/// A graph that stores each vertex's neighbors as a list.
///
/// Adding the same pair of vertices more than once records a parallel edge
/// each time, and each parallel edge counts toward [`Graph::size`].  Lookups
/// and removals scan the list of the first vertex given.
#[derive(Clone, Default)]
pub struct AdjacencyListGraph {
    adjacency: HashMap<Vertex, Vec<Vertex>>,
}

impl AdjacencyListGraph {
    fn neighbors_mut(&mut self, vertex: &Vertex) -> Result<&mut Vec<Vertex>> {
        self.adjacency
            .get_mut(vertex)
            .ok_or_else(|| GraphError::UnregisteredVertex(vertex.clone()))
    }
}

/// Removes the first occurrence of `vertex`, if any.
fn remove_first(neighbors: &mut Vec<Vertex>, vertex: &Vertex) -> bool {
    match neighbors.iter().position(|v| v == vertex) {
        Some(index) => {
            neighbors.remove(index);
            true
        }
        None => false,
    }
}

impl Graph for AdjacencyListGraph {
    type Adjacency = Vec<Vertex>;

    fn adjacency(&self) -> impl Iterator<Item = (&Vertex, &Self::Adjacency)> + '_ {
        self.adjacency.iter()
    }

    fn adjacency_of(&self, vertex: &Vertex) -> Option<&Self::Adjacency> {
        self.adjacency.get(vertex)
    }

    /// Returns a new edge whose head is always `head`, no matter which order
    /// the endpoints were added in.
    fn find_edge(&self, head: &Vertex, tail: &Vertex) -> Option<Edge> {
        self.adjacency
            .get(head)?
            .iter()
            .find(|&neighbor| neighbor == tail)
            .map(|neighbor| Edge::new(head.clone(), neighbor.clone()))
    }
}

impl GraphMut for AdjacencyListGraph {
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
                entry.insert(Vec::new());
                Ok(())
            }
        }
    }

    fn add_edge(&mut self, edge: Edge) -> Result<()> {
        if let Err(error) = self
            .check_vertex(edge.head())
            .and_then(|()| self.check_vertex(edge.tail()))
        {
            debug!(%edge, %error, "rejected edge");
            return Err(error);
        }
        debug!(%edge, "added edge");
        let (head, tail) = edge.into_endpoints();
        self.neighbors_mut(&head)?.push(tail.clone());
        self.neighbors_mut(&tail)?.push(head);
        Ok(())
    }

    /// Removes one instance of the edge.  Parallel edges between the same
    /// vertices need one call each.
    #[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
    fn remove_edge(&mut self, edge: &Edge) {
        let (a, b) = edge.endpoints();
        let Some(neighbors) = self.adjacency.get_mut(a) else {
            return;
        };
        let removed_forward = remove_first(neighbors, b);
        let removed_backward = self
            .adjacency
            .get_mut(b)
            .is_some_and(|neighbors| remove_first(neighbors, a));
        debug!(%edge, removed_forward, removed_backward, "removed edge");
    }
}

impl Debug for AdjacencyListGraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        format_debug(self, f, "AdjacencyListGraph")
    }
}
