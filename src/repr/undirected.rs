use std::fmt::Debug;

use fxhash::FxHashMap;
use tracing::trace;

use super::*;

/// An undirected graph over labelled vertices.
///
/// Maps every vertex to its [`Neighborhood`], which in turn maps every neighbor to the edge
/// connecting both. For each stored edge `{v, w}` the edge is found at `v -> w` **and** at
/// `w -> v`; all editing goes through [`GraphEdgeEditing`] which maintains this invariant.
///
/// ```
/// use lgraphs::prelude::*;
///
/// let v = Vertex::from("v");
/// let w = Vertex::from("w");
/// let e = Edge::new(v.clone(), w.clone()).unwrap();
///
/// let mut g = Graph::from_edges([v.clone(), w.clone()], [e.clone()]).unwrap();
/// assert_eq!(g.get_edge(&w, &v), Some(&e));
///
/// g.remove_edge(&e).unwrap();
/// assert!(g.get_edge(&v, &w).is_none());
/// assert!(g.remove_edge(&e).is_err());
/// ```
#[derive(Clone)]
pub struct UndirectedGraph<L = String> {
    vertices: Vec<Vertex<L>>,
    positions: FxHashMap<VertexId, usize>,
    nbs: Vec<Neighborhood<L>>,
    num_edges: usize,
}

/// The default graph representation
pub type Graph<L = String> = UndirectedGraph<L>;

impl<L> Default for UndirectedGraph<L> {
    fn default() -> Self {
        Self {
            vertices: Vec::new(),
            positions: FxHashMap::default(),
            nbs: Vec::new(),
            num_edges: 0,
        }
    }
}

impl<L> UndirectedGraph<L> {
    /// Creates an empty graph
    pub fn new() -> Self {
        Self::default()
    }

    fn position_of(&self, v: &Vertex<L>) -> Result<usize, GraphError> {
        self.positions
            .get(&v.id())
            .copied()
            .ok_or(GraphError::MissingVertex(v.id()))
    }
}

impl<L: Clone> GraphVertexOrder for UndirectedGraph<L> {
    type Label = L;

    fn number_of_vertices(&self) -> NumVertices {
        self.vertices.len()
    }

    fn vertices(&self) -> impl Iterator<Item = &Vertex<L>> + '_ {
        self.vertices.iter()
    }

    fn find_vertex(&self, id: VertexId) -> Option<&Vertex<L>> {
        self.positions.get(&id).map(|&pos| &self.vertices[pos])
    }
}

impl<L: Clone> AdjacencyList for UndirectedGraph<L> {
    fn out_vertices(
        &self,
        v: &Vertex<L>,
    ) -> Result<impl Iterator<Item = &Vertex<L>> + '_, GraphError> {
        let pos = self.position_of(v)?;
        Ok(self.nbs[pos].neighbors().map(|u| &self.vertices[u]))
    }

    fn out_edges(&self, v: &Vertex<L>) -> Result<impl Iterator<Item = &Edge<L>> + '_, GraphError> {
        let pos = self.position_of(v)?;
        Ok(self.nbs[pos].edges())
    }

    fn degree_of(&self, v: &Vertex<L>) -> Result<NumVertices, GraphError> {
        let pos = self.position_of(v)?;
        Ok(self.nbs[pos].num_of_neighbors())
    }

    fn get_edge(&self, u: &Vertex<L>, v: &Vertex<L>) -> Option<&Edge<L>> {
        let pu = self.position_of(u).ok()?;
        let pv = self.position_of(v).ok()?;
        self.nbs[pu].edge_to(pv)
    }

    fn edges(&self) -> impl Iterator<Item = &Edge<L>> + '_ {
        // each edge is reported from its endpoint with the smaller position
        self.nbs.iter().enumerate().flat_map(|(u, nbs)| {
            nbs.entries().filter_map(move |(v, e)| (u < v).then_some(e))
        })
    }

    fn number_of_edges(&self) -> usize {
        self.num_edges
    }
}

impl<L: Clone> GraphEdgeEditing for UndirectedGraph<L> {
    fn add_vertex(&mut self, v: Vertex<L>) -> Result<(), GraphError> {
        if let Ok(pos) = self.position_of(&v) {
            return if self.nbs[pos].num_of_neighbors() == 0 {
                Ok(())
            } else {
                Err(GraphError::VertexHasEdges(v.id()))
            };
        }

        self.positions.insert(v.id(), self.vertices.len());
        self.vertices.push(v);
        self.nbs.push(Neighborhood::default());
        Ok(())
    }

    fn add_edge(&mut self, e: Edge<L>) -> Result<Option<Edge<L>>, GraphError> {
        let pu = self.position_of(e.first())?;
        let pv = self.position_of(e.second())?;

        let replaced = self.nbs[pu].insert(pv, e.clone());
        let replaced_rev = self.nbs[pv].insert(pu, e);
        debug_assert_eq!(replaced.is_some(), replaced_rev.is_some());

        if replaced.is_some() {
            trace!(first = pu, second = pv, "replaced stored edge");
        } else {
            self.num_edges += 1;
        }

        Ok(replaced)
    }

    fn remove_edge(&mut self, e: &Edge<L>) -> Result<Edge<L>, GraphError> {
        let pu = self.position_of(e.first())?;
        let pv = self.position_of(e.second())?;

        if !self.nbs[pu].has_neighbor(pv) {
            let (u, v) = e.ids();
            return Err(GraphError::MissingEdge(u, v));
        }

        let removed = self.nbs[pu].remove(pv);
        let removed_rev = self.nbs[pv].remove(pu);
        debug_assert!(removed_rev.is_some());

        self.num_edges -= 1;
        trace!(first = pu, second = pv, "removed edge");

        let (u, v) = e.ids();
        removed.ok_or(GraphError::MissingEdge(u, v))
    }

    fn remove_edges_at_vertex(&mut self, v: &Vertex<L>) -> Result<usize, GraphError> {
        let pos = self.position_of(v)?;

        let neighbors = self.nbs[pos].clear();
        for &u in &neighbors {
            let removed = self.nbs[u].remove(pos);
            debug_assert!(removed.is_some());
        }

        self.num_edges -= neighbors.len();
        Ok(neighbors.len())
    }
}

impl<L: Debug> Debug for UndirectedGraph<L> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map()
            .entries(self.vertices.iter().zip(&self.nbs).map(|(v, nbs)| {
                (
                    v,
                    DebugNeighborhood {
                        vertices: &self.vertices,
                        nbs,
                    },
                )
            }))
            .finish()
    }
}

struct DebugNeighborhood<'a, L> {
    vertices: &'a [Vertex<L>],
    nbs: &'a Neighborhood<L>,
}

impl<L: Debug> Debug for DebugNeighborhood<'_, L> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map()
            .entries(self.nbs.entries().map(|(u, e)| (&self.vertices[u], e)))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;
    use proptest::prelude::*;

    use super::*;
    use crate::testing::*;

    #[test]
    fn add_get_remove() {
        let v = Vertex::from("v");
        let w = Vertex::from("w");
        let e = Edge::new(v.clone(), w.clone()).unwrap();

        let mut g = Graph::from_edges([v.clone(), w.clone()], [e.clone()]).unwrap();
        assert_eq!(g.number_of_vertices(), 2);
        assert_eq!(g.number_of_edges(), 1);
        assert_eq!(g.get_edge(&v, &w), Some(&e));
        assert_eq!(g.get_edge(&w, &v), Some(&e));

        assert_eq!(g.remove_edge(&e), Ok(e.clone()));
        assert_eq!(g.out_vertices(&v).unwrap().count(), 0);
        assert_eq!(g.out_vertices(&w).unwrap().count(), 0);
        assert!(g.is_singleton_graph());

        assert_eq!(
            g.remove_edge(&e),
            Err(GraphError::MissingEdge(e.ids().0, e.ids().1))
        );
    }

    #[test]
    fn missing_vertices() {
        let v = Vertex::from("v");
        let w = Vertex::from("w");
        let e = Edge::new(v.clone(), w.clone()).unwrap();

        let mut g = Graph::new();
        g.add_vertex(v.clone()).unwrap();

        assert_eq!(g.add_edge(e.clone()), Err(GraphError::MissingVertex(w.id())));
        assert_eq!(g.remove_edge(&e), Err(GraphError::MissingVertex(w.id())));
        assert!(g.out_vertices(&w).is_err());
        assert!(g.out_edges(&w).is_err());
        assert_eq!(g.degree_of(&w), Err(GraphError::MissingVertex(w.id())));
        assert!(g.get_edge(&v, &w).is_none());

        // nothing was written on the present side
        assert_eq!(g.degree_of(&v), Ok(0));
        assert_eq!(g.number_of_edges(), 0);
    }

    #[test]
    fn replace_edge() {
        let vs = labelled_vertices(3);
        let mut g = graph_on(&vs);

        assert_eq!(g.connect(&vs[0], &vs[1]), Ok(None));
        let replaced = g.connect(&vs[1], &vs[0]).unwrap();
        assert_eq!(replaced, Some(Edge::new(vs[0].clone(), vs[1].clone()).unwrap()));

        assert_eq!(g.number_of_edges(), 1);
        assert_eq!(g.degree_of(&vs[0]), Ok(1));
        assert_eq!(g.degree_of(&vs[1]), Ok(1));
        assert_symmetric(&g);
    }

    #[test]
    fn add_vertex_twice() {
        let vs = labelled_vertices(2);
        let mut g = graph_on(&vs);

        assert_eq!(g.add_vertex(vs[0].clone()), Ok(()));
        assert_eq!(g.number_of_vertices(), 2);

        g.connect(&vs[0], &vs[1]).unwrap();
        assert_eq!(
            g.add_vertex(vs[0].clone()),
            Err(GraphError::VertexHasEdges(vs[0].id()))
        );
        assert_eq!(g.number_of_edges(), 1);

        // same label, different vertex
        assert_eq!(g.add_vertex(Vertex::new(vs[0].label().clone())), Ok(()));
        assert_eq!(g.number_of_vertices(), 3);
    }

    #[test]
    fn vertices_keep_insertion_order() {
        let vs = labelled_vertices(10);
        let g = graph_on(&vs);
        assert_eq!(g.vertices().cloned().collect_vec(), vs);
        assert_eq!(g.first_vertex(), Some(&vs[0]));
    }

    #[test]
    fn out_vertices_and_edges() {
        let u = Vertex::from("u");
        let v = Vertex::from("v");
        let w = Vertex::from("w");

        let mut g = Graph::from_edges(
            [v.clone(), w.clone()],
            [Edge::new(v.clone(), w.clone()).unwrap()],
        )
        .unwrap();
        g.remove_edge(&Edge::new(w.clone(), v.clone()).unwrap()).unwrap();

        g.add_vertex(u.clone()).unwrap();
        g.connect(&u, &v).unwrap();
        g.connect(&u, &w).unwrap();

        assert_eq!(g.vertices().cloned().collect_vec(), vec![v.clone(), w.clone(), u.clone()]);
        assert_eq!(g.edges().count(), 2);

        let out_vs = g.out_vertices(&u).unwrap().cloned().collect_vec();
        assert_eq!(out_vs, vec![v.clone(), w.clone()]);

        let out_es = g.out_edges(&u).unwrap().collect_vec();
        assert_eq!(out_es.len(), 2);
        assert!(out_es.iter().all(|e| e.contains(&u)));
        assert_eq!(out_es[1].opposite(&u), Some(&w));
    }

    #[test]
    fn degrees() {
        let vs = labelled_vertices(5);
        let mut g = graph_on(&vs);
        assert_eq!(g.max_degree(), 0);
        assert!(g.is_regular(0));

        for v in &vs[1..4] {
            g.connect(&vs[0], v).unwrap();
        }
        g.connect(&vs[1], &vs[2]).unwrap();

        assert_eq!(g.degrees().collect_vec(), vec![3, 2, 2, 1, 0]);
        assert_eq!(g.max_degree(), 3);
        assert!(!g.is_regular(2));

        let empty: Graph = Graph::new();
        assert_eq!(empty.max_degree(), 0);
    }

    #[test]
    fn remove_edges_at_vertex() {
        let vs = labelled_vertices(4);
        let mut g = graph_on(&vs);
        for v in &vs[1..] {
            g.connect(&vs[0], v).unwrap();
        }
        g.connect(&vs[1], &vs[2]).unwrap();

        assert_eq!(g.remove_edges_at_vertex(&vs[0]), Ok(3));
        assert_eq!(g.number_of_edges(), 1);
        assert_eq!(g.degree_of(&vs[0]), Ok(0));
        assert_eq!(g.degree_of(&vs[3]), Ok(0));
        assert_symmetric(&g);

        // a cleared vertex may be re-added
        assert_eq!(g.add_vertex(vs[0].clone()), Ok(()));
    }

    #[test]
    fn debug_lists_adjacency() {
        let v = Vertex::from("v");
        let w = Vertex::from("w");
        let g = Graph::from_edges([v.clone(), w.clone()], [Edge::new(v, w).unwrap()]).unwrap();

        assert_eq!(
            format!("{g:?}"),
            "{Vertex(\"v\"): {Vertex(\"w\"): Edge(Vertex(\"v\"), Vertex(\"w\"))}, \
             Vertex(\"w\"): {Vertex(\"v\"): Edge(Vertex(\"v\"), Vertex(\"w\"))}}"
        );
    }

    proptest! {
        #[test]
        fn symmetry_under_random_edits(
            n in 2usize..12,
            ops in prop::collection::vec((any::<bool>(), 0usize..12, 0usize..12), 0..64),
        ) {
            let vs = labelled_vertices(n);
            let mut g = graph_on(&vs);
            let mut expected = fxhash::FxHashSet::default();

            for (add, a, b) in ops {
                let (a, b) = (a % n, b % n);
                if a == b {
                    continue;
                }
                let e = Edge::new(vs[a].clone(), vs[b].clone()).unwrap();

                if add {
                    g.add_edge(e.clone()).unwrap();
                    expected.insert(e);
                } else {
                    prop_assert_eq!(g.remove_edge(&e).is_ok(), expected.remove(&e));
                }

                assert_symmetric(&g);
            }

            prop_assert_eq!(g.number_of_edges(), expected.len());
            let edges: fxhash::FxHashSet<_> = g.edges().cloned().collect();
            prop_assert_eq!(edges, expected);
        }
    }
}
