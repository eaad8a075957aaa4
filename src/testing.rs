//! Helpers shared by the unit tests of this crate

use std::fmt::Debug;

use crate::{ops::*, repr::*, *};

/// Creates `n` vertices labelled `v0, v1, ...`
pub fn labelled_vertices(n: usize) -> Vec<Vertex<String>> {
    (0..n).map(|i| Vertex::new(format!("v{i}"))).collect()
}

/// Creates a graph containing `vertices` in the given order and no edges
pub fn graph_on(vertices: &[Vertex<String>]) -> Graph<String> {
    Graph::from_edges(vertices.iter().cloned(), []).unwrap()
}

/// Asserts that every edge stored at `v -> w` is also stored at `w -> v` and that
/// the edge count matches the adjacency
pub fn assert_symmetric<G: AdjacencyList>(graph: &G)
where
    G::Label: Debug,
{
    let mut slots = 0;
    for v in graph.vertices() {
        for w in graph.out_vertices(v).unwrap() {
            let e = graph.get_edge(v, w).expect("forward slot");
            let rev = graph.get_edge(w, v).expect("backward slot");
            assert_eq!(e, rev);
            assert!(e.contains(v) && e.contains(w));
            slots += 1;
        }
    }

    assert_eq!(slots, 2 * graph.number_of_edges());
    assert_eq!(graph.edges().count(), graph.number_of_edges());
}

/// Asserts that every vertex of `graph` has degree `degree`
pub fn assert_regular<G: AdjacencyList>(graph: &G, degree: usize)
where
    G::Label: Debug,
{
    for v in graph.vertices() {
        assert_eq!(graph.degree_of(v).unwrap(), degree);
    }
}
