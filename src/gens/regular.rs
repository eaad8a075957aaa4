use super::*;

/// Trait for placing the edges of a regular graph, i.e. a graph in which every vertex has the
/// same degree `d`.
///
/// Vertices are arranged on a cycle in container order. The even strategy connects each vertex
/// to the `d / 2` vertices following it on the cycle (a circulant graph). For odd `d` the even
/// strategy runs with `d - 1` and every vertex is additionally paired with its antipode,
/// i.e. the vertex `n / 2` positions further.
///
/// On a graph without edges the result is exactly `d`-regular with `n * d / 2` edges.
///
/// # Example
/// ```rust
/// use lgraphs::{prelude::*, algo::*, gens::*};
///
/// let vs: Vec<_> = (0..6).map(|i| Vertex::new(format!("v{i}"))).collect();
/// let mut g = Graph::from_edges(vs, []).unwrap();
/// g.add_regular_edges(3).unwrap();
///
/// assert_eq!(g.number_of_edges(), 9);
/// assert!(g.is_regular(3));
/// assert!(g.is_connected().unwrap());
/// ```
pub trait RegularEdges {
    /// Adds edges such that every vertex gains exactly `degree` neighbors.
    ///
    /// Fails if `degree` is not smaller than the number of vertices, or if `degree` is odd
    /// while the number of vertices is odd. No edge is added on failure.
    fn add_regular_edges(&mut self, degree: NumVertices) -> Result<(), GraphError>;

    /// Connects every vertex to the `degree / 2` vertices following it in container order
    /// (wrapping around). Fails if `degree` is odd or not smaller than the number of vertices.
    fn add_regular_edges_even(&mut self, degree: NumVertices) -> Result<(), GraphError>;

    /// Connects the `i`-th vertex to the `(i + n/2)`-th vertex for every `i < n/2`, adding one to
    /// every degree. Fails if the number of vertices `n` is odd.
    fn add_regular_edges_odd(&mut self) -> Result<(), GraphError>;
}

impl<G> RegularEdges for G
where
    G: GraphEdgeEditing,
{
    fn add_regular_edges(&mut self, degree: NumVertices) -> Result<(), GraphError> {
        let n = self.number_of_vertices();
        if degree >= n {
            return Err(GraphError::DegreeTooLarge {
                degree,
                vertices: n,
            });
        }

        if degree % 2 == 0 {
            return self.add_regular_edges_even(degree);
        }

        if n % 2 == 1 {
            return Err(GraphError::OddDegreeOddOrder {
                degree,
                vertices: n,
            });
        }

        self.add_regular_edges_even(degree - 1)?;
        self.add_regular_edges_odd()
    }

    fn add_regular_edges_even(&mut self, degree: NumVertices) -> Result<(), GraphError> {
        let n = self.number_of_vertices();
        if degree % 2 == 1 {
            return Err(GraphError::OddDegree(degree));
        }
        if degree >= n {
            return Err(GraphError::DegreeTooLarge {
                degree,
                vertices: n,
            });
        }

        let vs = self.vertices().cloned().collect_vec();
        // the vertex cycle written out twice, so the successors of any vertex form a contiguous slice
        let doubled = vs.iter().chain(vs.iter()).collect_vec();
        let half = degree / 2;

        for (i, v) in vs.iter().enumerate() {
            for w in &doubled[i + 1..=i + half] {
                self.connect(v, w)?;
            }
        }

        debug!(vertices = n, degree, "added circulant edges");
        Ok(())
    }

    fn add_regular_edges_odd(&mut self) -> Result<(), GraphError> {
        let n = self.number_of_vertices();
        if n % 2 == 1 {
            return Err(GraphError::OddDegreeOddOrder {
                degree: 1,
                vertices: n,
            });
        }

        let vs = self.vertices().cloned().collect_vec();
        let (first, second) = vs.split_at(n / 2);
        for (v, w) in first.iter().zip(second) {
            self.connect(v, w)?;
        }

        debug!(vertices = n, "paired antipodal vertices");
        Ok(())
    }
}
