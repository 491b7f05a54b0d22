use std::fmt::{self, Display, Formatter};

use crate::Vertex;

/// An undirected connection between two vertices.
///
/// The endpoints are stored in the order they were given, and that order is
/// significant for equality: `Edge::new(a, b) != Edge::new(b, a)` unless
/// `a == b`.  Graphs treat the relation itself as symmetric.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Edge {
    head: Vertex,
    tail: Vertex,
}

impl Edge {
    pub fn new(head: Vertex, tail: Vertex) -> Self {
        Self { head, tail }
    }

    pub fn head(&self) -> &Vertex {
        &self.head
    }

    pub fn tail(&self) -> &Vertex {
        &self.tail
    }

    /// Gets both endpoints as a tuple `(head, tail)`.
    pub fn endpoints(&self) -> (&Vertex, &Vertex) {
        (&self.head, &self.tail)
    }

    pub fn into_endpoints(self) -> (Vertex, Vertex) {
        (self.head, self.tail)
    }

    /// Returns the same connection with its endpoints swapped.
    pub fn reversed(&self) -> Self {
        Self::new(self.tail.clone(), self.head.clone())
    }

    /// Checks whether this edge connects `a` and `b`, in either order.
    pub fn connects(&self, a: &Vertex, b: &Vertex) -> bool {
        (self.head == *a && self.tail == *b) || (self.head == *b && self.tail == *a)
    }
}

impl From<(Vertex, Vertex)> for Edge {
    fn from((head, tail): (Vertex, Vertex)) -> Self {
        Self::new(head, tail)
    }
}

impl Display for Edge {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Edge(v={}, w={})", self.head, self.tail)
    }
}
