use std::{
    fmt::{self, Display, Formatter},
    sync::{
        Arc,
        atomic::{AtomicU64, Ordering},
    },
};

use derivative::Derivative;

/// A global vertex key counter.  Every `Vertex` created in the process gets a
/// distinct key, which is what vertex equality and hashing are based on.
static VERTEX_KEY_COUNTER: AtomicU64 = AtomicU64::new(0);

/// The identity of a vertex.  Keys are handed out in creation order.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug, PartialOrd, Ord)]
pub struct VertexKey(u64);

impl VertexKey {
    fn next() -> Self {
        VertexKey(VERTEX_KEY_COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

/// A vertex handle with an optional display label.
///
/// Vertices are compared by identity, not by label: two vertices created
/// separately are never equal, even if their labels match, while a clone of a
/// vertex is the same vertex.  The label is purely cosmetic.
#[derive(Clone, Debug, Derivative)]
#[derivative(PartialEq, Eq, Hash)]
pub struct Vertex {
    key: VertexKey,
    #[derivative(PartialEq = "ignore", Hash = "ignore")]
    label: Arc<str>,
}

impl Vertex {
    /// Creates a new vertex with the given label.
    pub fn new(label: impl Into<Arc<str>>) -> Self {
        Self {
            key: VertexKey::next(),
            label: label.into(),
        }
    }

    /// Creates a new vertex with an empty label.
    pub fn unlabeled() -> Self {
        Self::new("")
    }

    pub fn key(&self) -> VertexKey {
        self.key
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

impl Default for Vertex {
    fn default() -> Self {
        Self::unlabeled()
    }
}

impl Display for Vertex {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Vertex(label={})", self.label)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_labeled_vertex() {
        let vertex = Vertex::new("ipsum");
        assert_eq!(vertex.label(), "ipsum");
        assert_eq!(vertex.to_string(), "Vertex(label=ipsum)");
    }

    #[test]
    fn test_unlabeled_vertex() {
        let vertex = Vertex::unlabeled();
        assert_eq!(vertex.label(), "");
        assert_eq!(vertex.to_string(), "Vertex(label=)");
        assert_eq!(Vertex::default().label(), "");
    }

    #[test]
    fn test_same_label_is_not_same_vertex() {
        let a = Vertex::new("lorem");
        let b = Vertex::new("lorem");
        assert_ne!(a, b);
        assert_ne!(a.key(), b.key());
    }

    #[test]
    fn test_clone_is_same_vertex() {
        let a = Vertex::new("lorem");
        let b = a.clone();
        assert_eq!(a, b);

        let set: HashSet<_> = [a, b].into_iter().collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_keys_follow_creation_order() {
        let first = Vertex::unlabeled();
        let second = Vertex::unlabeled();
        assert!(first.key() < second.key());
    }
}
