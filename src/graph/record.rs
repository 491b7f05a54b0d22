use std::collections::HashMap;

use crate::{Edge, Vertex};

/// Per-vertex storage of the neighbors a vertex is connected to.
///
/// Each graph backend chooses its own record type; the contract only needs to
/// count and enumerate the neighbors.
pub trait AdjacencyRecord {
    /// Returns the number of entries in the record.  Parallel edges count once
    /// per entry, so this is the degree of the owning vertex as the backend
    /// sees it.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Gets an iterator over the neighbors in the record, in the record's own
    /// order.
    fn neighbors(&self) -> impl Iterator<Item = &Vertex> + '_;
}

/// Ordered neighbor sequence.  Duplicates are allowed.
impl AdjacencyRecord for Vec<Vertex> {
    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn neighbors(&self) -> impl Iterator<Item = &Vertex> + '_ {
        self.iter()
    }
}

/// Neighbor to edge mapping.  At most one edge per neighbor.
impl AdjacencyRecord for HashMap<Vertex, Edge> {
    fn len(&self) -> usize {
        HashMap::len(self)
    }

    fn neighbors(&self) -> impl Iterator<Item = &Vertex> + '_ {
        self.keys()
    }
}
