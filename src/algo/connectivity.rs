use std::iter::FusedIterator;

use itertools::Itertools;
use tracing::debug;

use super::*;

/// Connectivity queries for undirected graphs
pub trait Connectivity: Traversal {
    /// Returns *true* if every vertex is reachable from the first vertex in container order.
    /// Fails on a graph without vertices.
    ///
    /// ```
    /// use lgraphs::{prelude::*, algo::*};
    ///
    /// let vs: Vec<_> = ["u", "v", "w"].into_iter().map(Vertex::from).collect();
    /// let mut g = Graph::from_edges(vs.clone(), []).unwrap();
    /// g.connect(&vs[0], &vs[1]).unwrap();
    /// assert!(!g.is_connected().unwrap());
    ///
    /// g.connect(&vs[0], &vs[2]).unwrap();
    /// assert!(g.is_connected().unwrap());
    /// ```
    fn is_connected(&self) -> Result<bool, GraphError> {
        let mut bfs = self.bfs()?;
        bfs.by_ref().for_each(drop);

        let connected = bfs.number_of_visited() == self.number_of_vertices();
        debug!(
            vertices = self.number_of_vertices(),
            reached = bfs.number_of_visited(),
            connected,
            "connectivity check"
        );
        Ok(connected)
    }

    /// Returns an iterator over the connected components of the graph.
    /// Components are discovered in container order of their first vertex.
    fn connected_components(&self) -> ConnectedComponents<'_, Self> {
        ConnectedComponents::new(self)
    }

    /// Returns the number of connected components (`0` for a graph without vertices)
    fn number_of_connected_components(&self) -> usize {
        self.connected_components().count()
    }
}

impl<G> Connectivity for G where G: AdjacencyList + Sized {}

/// Iterator over the connected components of a graph, each reported as the list of
/// its vertices in BFS order
pub struct ConnectedComponents<'a, G>
where
    G: AdjacencyList,
{
    bfs: Option<BFS<'a, G>>,
}

impl<'a, G> ConnectedComponents<'a, G>
where
    G: AdjacencyList,
{
    pub fn new(graph: &'a G) -> Self {
        Self {
            bfs: graph.bfs().ok(),
        }
    }
}

impl<'a, G> Iterator for ConnectedComponents<'a, G>
where
    G: AdjacencyList,
{
    type Item = Vec<&'a Vertex<G::Label>>;

    fn next(&mut self) -> Option<Self::Item> {
        let bfs = self.bfs.as_mut()?;
        loop {
            let cc = bfs.by_ref().collect_vec();
            if !cc.is_empty() {
                return Some(cc);
            }

            if !bfs.try_restart_at_unvisited() {
                self.bfs = None;
                return None;
            }
        }
    }
}

impl<G> FusedIterator for ConnectedComponents<'_, G> where G: AdjacencyList {}
