use std::{
    collections::HashMap,
    fmt::{Debug, Formatter},
};

use crate::{AdjacencyRecord, Graph, Vertex, VertexKey};

/// A vertex as it appears in debug output: its position among the graph's
/// vertices, followed by its label.  A vertex the graph doesn't know about has
/// no position and is shown as `?:label`.
struct VertexTag<'a>(Option<usize>, &'a str);

impl<'a> Debug for VertexTag<'a> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            Some(position) => write!(f, "{}:{}", position, self.1),
            None => write!(f, "?:{}", self.1),
        }
    }
}

struct NeighborsDebug<'a, R> {
    record: &'a R,
    positions: &'a HashMap<VertexKey, usize>,
}

impl<'a, R> Debug for NeighborsDebug<'a, R>
where
    R: AdjacencyRecord,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut tags: Vec<_> = self
            .record
            .neighbors()
            .map(|neighbor| {
                VertexTag(
                    self.positions.get(&neighbor.key()).copied(),
                    neighbor.label(),
                )
            })
            .collect();
        // Unknown vertices go last.
        tags.sort_by_key(|tag| (tag.0.is_none(), tag.0));
        f.debug_list().entries(tags).finish()
    }
}

struct AdjacencyDebug<'a, G: Graph> {
    order: &'a [(&'a Vertex, &'a G::Adjacency)],
    positions: &'a HashMap<VertexKey, usize>,
}

impl<'a, G> Debug for AdjacencyDebug<'a, G>
where
    G: Graph,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_map()
            .entries(self.order.iter().enumerate().map(|(i, (vertex, record))| {
                (
                    VertexTag(Some(i), vertex.label()),
                    NeighborsDebug {
                        record: *record,
                        positions: self.positions,
                    },
                )
            }))
            .finish()
    }
}

/// Formats a graph for debug output.
///
/// Vertices are numbered 0, 1, 2, ... in creation order and shown with their
/// labels.  Each vertex's neighbors are listed by number, with parallel edges
/// repeated, so the output doesn't depend on how a backend orders its records.
pub fn format_debug<G>(graph: &G, fmt: &mut Formatter<'_>, name: &str) -> std::fmt::Result
where
    G: Graph,
{
    let mut order: Vec<_> = graph.adjacency().collect();
    order.sort_by_key(|(vertex, _)| vertex.key());
    let positions: HashMap<_, _> = order
        .iter()
        .enumerate()
        .map(|(i, (vertex, _))| (vertex.key(), i))
        .collect();

    fmt.debug_struct(name)
        .field("order", &graph.order())
        .field("size", &graph.size())
        .field(
            "adjacency",
            &AdjacencyDebug::<G> {
                order: &order,
                positions: &positions,
            },
        )
        .finish()
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use crate::*;

    #[test]
    fn test_format_debug() {
        let a = Vertex::new("A");
        let b = Vertex::new("B");
        let c = Vertex::new("C");
        let graph = AdjacencyListGraph::with_contents(
            [c.clone(), a.clone(), b.clone()],
            [Edge::new(a.clone(), b.clone()), Edge::new(c.clone(), a.clone())],
        )
        .unwrap();

        // Single-line output.
        let output = format!("{:?}", &graph);
        let expected = "AdjacencyListGraph { order: 3, size: 2, adjacency: {0:A: [1:B, 2:C], 1:B: [0:A], 2:C: [0:A]} }";
        assert_eq!(output, expected);

        // Multi-line output.
        let output = format!("{:#?}", &AdjacencyListGraph::new());
        let expected = r#"AdjacencyListGraph {
    order: 0,
    size: 0,
    adjacency: {},
}"#;
        assert_eq!(output, expected);
    }

    #[test]
    fn test_format_debug_tags_unknown_vertex() {
        let mut positions = HashMap::new();
        let known = Vertex::new("known");
        positions.insert(known.key(), 0);
        let record = vec![Vertex::new("stray"), known];
        let output = format!(
            "{:?}",
            super::NeighborsDebug {
                record: &record,
                positions: &positions,
            }
        );
        assert_eq!(output, "[0:known, ?:stray]");
    }
}
