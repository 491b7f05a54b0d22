//! `Graph` and `GraphMut` are the core traits of this library.  `Graph`
//! provides read-only access to the graph structure, while `GraphMut` extends
//! `Graph` with the operations that change it.
//!
//! Implementations only supply the storage-specific parts: iterating their
//! adjacency records, looking up an edge, and the mutations.  Counting
//! vertices and edges is done here, once, on top of [`Graph::adjacency`].
//!
//! All graphs in this library are undirected: adding an edge records each
//! endpoint in the other's adjacency record.
mod record;

pub use self::record::AdjacencyRecord;

use crate::{
    Edge, Vertex,
    error::{GraphError, Result},
    tracing_support::{debug, info_span},
};

/// A trait representing an undirected graph.  Methods that return iterators
/// over vertices return them in an unspecified order unless otherwise noted.
pub trait Graph {
    /// The storage used for a single vertex's neighbors.
    type Adjacency: AdjacencyRecord;

    /// Gets an iterator over every vertex and its adjacency record.
    fn adjacency(&self) -> impl Iterator<Item = (&Vertex, &Self::Adjacency)> + '_;

    /// Gets the adjacency record of a vertex, or `None` if the vertex is not
    /// in the graph.
    fn adjacency_of(&self, vertex: &Vertex) -> Option<&Self::Adjacency>;

    /// Finds the edge between `head` and `tail`.  Returns `None` if either
    /// vertex is not in the graph or the two are not connected.
    ///
    /// Which endpoint comes first in the returned edge is up to the backend.
    fn find_edge(&self, head: &Vertex, tail: &Vertex) -> Option<Edge>;

    /// Gets the number of vertices in the graph.
    fn order(&self) -> usize {
        self.adjacency().count()
    }

    /// Gets the number of edges in the graph, i.e. half the total length of
    /// all adjacency records.
    fn size(&self) -> usize {
        self.adjacency()
            .map(|(_, record)| record.len())
            .sum::<usize>()
            / 2
    }

    fn is_empty(&self) -> bool {
        self.order() == 0
    }

    fn contains_vertex(&self, vertex: &Vertex) -> bool {
        self.adjacency_of(vertex).is_some()
    }

    /// Returns `Ok(())` if the vertex is in the graph, and an
    /// [`GraphError::UnregisteredVertex`] naming it otherwise.
    fn check_vertex(&self, vertex: &Vertex) -> Result<()> {
        if self.contains_vertex(vertex) {
            Ok(())
        } else {
            Err(GraphError::UnregisteredVertex(vertex.clone()))
        }
    }

    fn vertices(&self) -> impl Iterator<Item = &Vertex> + '_ {
        self.adjacency().map(|(vertex, _)| vertex)
    }

    /// Gets the number of entries in a vertex's adjacency record, or `None` if
    /// the vertex is not in the graph.
    fn degree(&self, vertex: &Vertex) -> Option<usize> {
        self.adjacency_of(vertex).map(AdjacencyRecord::len)
    }

    /// Gets an iterator over the neighbors of a vertex, in record order.  The
    /// iterator is empty if the vertex is not in the graph.
    fn neighbors<'a>(&'a self, vertex: &Vertex) -> impl Iterator<Item = &'a Vertex> + 'a {
        self.adjacency_of(vertex)
            .into_iter()
            .flat_map(|record| record.neighbors())
    }

    fn has_edge(&self, head: &Vertex, tail: &Vertex) -> bool {
        self.find_edge(head, tail).is_some()
    }
}

pub trait GraphMut: Graph + Sized {
    /// Creates a new, empty graph.
    fn new() -> Self;

    /// Adds a vertex with an empty adjacency record.  Fails with
    /// [`GraphError::DuplicateVertex`] if the vertex is already present, in
    /// which case the graph is unchanged.
    fn add_vertex(&mut self, vertex: Vertex) -> Result<()>;

    /// Connects the two endpoints of `edge`, which must both be in the graph
    /// already.  Adding an edge between vertices that are already connected is
    /// not an error; how the backend records it is up to the backend.
    ///
    /// Fails with [`GraphError::UnregisteredVertex`] for the first missing
    /// endpoint, in which case the graph is unchanged.
    fn add_edge(&mut self, edge: Edge) -> Result<()>;

    /// Disconnects the two endpoints of `edge`.  Endpoints that are missing
    /// from the graph, or not connected, are silently ignored.
    fn remove_edge(&mut self, edge: &Edge);

    /// Creates a graph by adding each of `vertices`, then each of `edges`, in
    /// order.  Stops at the first error.
    #[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
    fn with_contents(
        vertices: impl IntoIterator<Item = Vertex>,
        edges: impl IntoIterator<Item = Edge>,
    ) -> Result<Self> {
        let _span = info_span!("with_contents").entered();
        let mut graph = Self::new();
        for vertex in vertices {
            graph.add_vertex(vertex).inspect_err(|error| {
                debug!(%error, "aborting bulk construction");
            })?;
        }
        for edge in edges {
            graph.add_edge(edge).inspect_err(|error| {
                debug!(%error, "aborting bulk construction");
            })?;
        }
        Ok(graph)
    }
}
