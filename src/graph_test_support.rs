use std::collections::HashMap;
use std::fmt::Debug;

use quickcheck::{Arbitrary, Gen};

use crate::prelude::*;
use crate::tracing_support::{info_span, init_tracing};

/// A randomly built graph, together with the vertices and edges it was built
/// from.  Edges may repeat a pair of vertices, in either order, and may be
/// self-loops.
#[derive(Debug, Clone)]
pub struct ArbGraph<G> {
    pub graph: G,
    pub vertices: Vec<Vertex>,
    pub edges: Vec<Edge>,
}

impl<G> Arbitrary for ArbGraph<G>
where
    G: GraphMut + Clone + Debug + 'static,
{
    fn arbitrary(g: &mut Gen) -> Self {
        let num_vertices = usize::arbitrary(g) % 12; // Limit size for testing
        let num_edges = usize::arbitrary(g) % 30;

        let vertices: Vec<_> = (0..num_vertices)
            .map(|i| Vertex::new(format!("v{}", i)))
            .collect();
        let mut edges = Vec::new();
        if !vertices.is_empty() {
            for _ in 0..num_edges {
                let head = g.choose(&vertices).unwrap().clone();
                let tail = g.choose(&vertices).unwrap().clone();
                edges.push(Edge::new(head, tail));
            }
        }

        let graph = G::with_contents(vertices.clone(), edges.clone())
            .expect("generated vertices are distinct");
        ArbGraph {
            graph,
            vertices,
            edges,
        }
    }
}

/// Counts how many times each vertex appears in a neighbor sequence.
fn multiplicities<'a>(neighbors: impl Iterator<Item = &'a Vertex>) -> HashMap<&'a Vertex, usize> {
    let mut counts = HashMap::new();
    for neighbor in neighbors {
        *counts.entry(neighbor).or_insert(0) += 1;
    }
    counts
}

/// Checks the internal consistency of a graph: every neighbor is a vertex of
/// the graph, every neighbor relation is mirrored the same number of times,
/// and every recorded connection can be found from both sides.
pub fn check_graph_consistency<G: Graph>(graph: &G) {
    init_tracing();
    let _span = info_span!("check_graph_consistency").entered();

    let mut total_degree = 0;
    for (vertex, record) in graph.adjacency() {
        assert!(graph.contains_vertex(vertex));
        assert_eq!(graph.degree(vertex), Some(record.len()));
        assert_eq!(record.is_empty(), record.len() == 0);
        assert_eq!(graph.neighbors(vertex).count(), record.len());
        total_degree += record.len();

        for (neighbor, count) in multiplicities(record.neighbors()) {
            assert!(
                graph.contains_vertex(neighbor),
                "{} has unregistered neighbor {}",
                vertex,
                neighbor
            );
            let mirrored = graph
                .neighbors(neighbor)
                .filter(|&other| other == vertex)
                .count();
            assert_eq!(mirrored, count, "{} and {} are not mirrored", vertex, neighbor);

            let forward = graph.find_edge(vertex, neighbor).expect("edge not found");
            assert!(forward.connects(vertex, neighbor));
            let backward = graph.find_edge(neighbor, vertex).expect("edge not found");
            assert!(backward.connects(vertex, neighbor));
        }
    }

    assert_eq!(graph.order(), graph.vertices().count());
    assert_eq!(graph.size(), total_degree / 2);
    assert_eq!(graph.is_empty(), graph.order() == 0);
}
