use super::*;

/// Trait for turning a graph into a complete graph
pub trait CompleteEdges {
    /// Connects every pair of distinct vertices.
    ///
    /// Walks all ordered pairs `(v, w)` with `v != w` in container order; edges that already
    /// exist are replaced. Afterwards the graph has `n * (n - 1) / 2` edges.
    ///
    /// # Example
    /// ```rust
    /// use lgraphs::{prelude::*, gens::*};
    ///
    /// let vs: Vec<_> = ["a", "b", "c", "d"].into_iter().map(Vertex::from).collect();
    /// let mut g = Graph::from_edges(vs, []).unwrap();
    /// g.add_all_edges().unwrap();
    ///
    /// assert_eq!(g.edges().count(), 6);
    /// assert!(g.is_regular(3));
    /// ```
    fn add_all_edges(&mut self) -> Result<(), GraphError>;
}

impl<G> CompleteEdges for G
where
    G: GraphEdgeEditing,
{
    fn add_all_edges(&mut self) -> Result<(), GraphError> {
        let vs = self.vertices().cloned().collect_vec();

        for (i, v) in vs.iter().enumerate() {
            for (j, w) in vs.iter().enumerate() {
                if i != j {
                    self.connect(v, w)?;
                }
            }
        }

        debug!(
            vertices = vs.len(),
            edges = self.number_of_edges(),
            "connected all pairs"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::*;

    #[test]
    fn complete_graph_sizes() {
        for n in [0, 1, 2, 5, 13] {
            let vs = labelled_vertices(n);
            let mut g = graph_on(&vs);
            g.add_all_edges().unwrap();

            assert_eq!(g.edges().count(), n * n.saturating_sub(1) / 2);
            assert_eq!(g.number_of_edges(), n * n.saturating_sub(1) / 2);
            assert_regular(&g, n.saturating_sub(1));
            assert_symmetric(&g);
        }
    }

    #[test]
    fn complete_over_existing_edges() {
        let vs = labelled_vertices(4);
        let mut g = graph_on(&vs);
        g.connect(&vs[2], &vs[0]).unwrap();
        g.connect(&vs[1], &vs[3]).unwrap();

        g.add_all_edges().unwrap();
        assert_eq!(g.number_of_edges(), 6);
        assert_symmetric(&g);
    }
}
