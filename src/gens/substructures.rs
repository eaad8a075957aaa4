/*!
# Substructure Generators

Utility methods to connect given vertices of an existing graph into **paths** and **cycles**.

```rust
use lgraphs::{prelude::*, gens::*};

let vs: Vec<_> = (0..5).map(|i| Vertex::new(format!("v{i}"))).collect();
let mut g = Graph::from_edges(vs.clone(), []).unwrap();
g.connect_path(&vs[..3]).unwrap();
g.connect_cycle([&vs[2], &vs[3], &vs[4]]).unwrap();

assert_eq!(g.number_of_edges(), 5);
assert_eq!(g.degree_of(&vs[2]), Ok(3));
```
*/

use super::*;

/// Trait for creating additional **substructures** (paths, cycles)
/// inside an already existing graph.
pub trait GeneratorSubstructures: GraphVertexOrder {
    /// Connects the given vertices in order with a **simple path**.
    ///
    /// Each consecutive pair of vertices is connected by a single edge.
    fn connect_path<'v, P>(&mut self, vertices_on_path: P) -> Result<(), GraphError>
    where
        P: IntoIterator<Item = &'v Vertex<Self::Label>>,
        Self::Label: 'v;

    /// Connects the given vertices with a **cycle**.
    ///
    /// Consecutive vertices are connected by edges and the last vertex is connected back to
    /// the first. With fewer than three vertices this degenerates to a path.
    fn connect_cycle<'v, C>(&mut self, vertices_in_cycle: C) -> Result<(), GraphError>
    where
        C: IntoIterator<Item = &'v Vertex<Self::Label>>,
        Self::Label: 'v;
}

impl<G> GeneratorSubstructures for G
where
    G: GraphEdgeEditing,
{
    fn connect_path<'v, P>(&mut self, vertices_on_path: P) -> Result<(), GraphError>
    where
        P: IntoIterator<Item = &'v Vertex<Self::Label>>,
        Self::Label: 'v,
    {
        for (u, v) in vertices_on_path.into_iter().tuple_windows() {
            self.connect(u, v)?;
        }
        Ok(())
    }

    fn connect_cycle<'v, C>(&mut self, vertices_in_cycle: C) -> Result<(), GraphError>
    where
        C: IntoIterator<Item = &'v Vertex<Self::Label>>,
        Self::Label: 'v,
    {
        let mut iter = vertices_in_cycle.into_iter();

        if let Some(first) = iter.next() {
            let mut prev = first;
            let mut len = 1;
            for cur in iter {
                self.connect(prev, cur)?;
                prev = cur;
                len += 1;
            }

            if len > 2 {
                self.connect(prev, first)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::*;

    #[test]
    fn test_connect_path() {
        let vs = labelled_vertices(6);

        {
            let mut g = graph_on(&vs);
            g.connect_path([]).unwrap();
            assert_eq!(g.number_of_edges(), 0);
        }

        {
            let mut g = graph_on(&vs);
            g.connect_path([&vs[1]]).unwrap();
            assert_eq!(g.number_of_edges(), 0);
        }

        {
            let mut g = graph_on(&vs);
            g.connect_path([&vs[2], &vs[1]]).unwrap();
            assert_eq!(g.number_of_edges(), 1);
            assert!(g.has_edge(&vs[1], &vs[2]));
        }

        {
            let mut g = graph_on(&vs);
            g.connect_path([&vs[0], &vs[3], &vs[1], &vs[4]]).unwrap();
            assert_eq!(
                g.edges().cloned().sorted().collect_vec(),
                [(0, 3), (1, 3), (1, 4)]
                    .into_iter()
                    .map(|(u, v)| Edge::new(vs[u].clone(), vs[v].clone()).unwrap())
                    .collect_vec()
            );
        }
    }

    #[test]
    fn test_connect_cycle() {
        let vs = labelled_vertices(6);

        {
            let mut g = graph_on(&vs);
            g.connect_cycle([]).unwrap();
            assert_eq!(g.number_of_edges(), 0);
        }

        {
            let mut g = graph_on(&vs);
            g.connect_cycle([&vs[1]]).unwrap();
            assert_eq!(g.number_of_edges(), 0);
        }

        {
            let mut g = graph_on(&vs);
            g.connect_cycle([&vs[1], &vs[2]]).unwrap();
            assert_eq!(g.number_of_edges(), 1);
        }

        {
            let mut g = graph_on(&vs);
            g.connect_cycle([&vs[0], &vs[3], &vs[1], &vs[4]]).unwrap();
            assert_eq!(g.number_of_edges(), 4);
            assert!(g.has_edge(&vs[4], &vs[0]));
            assert_eq!(g.degrees().collect_vec(), vec![2, 2, 0, 2, 2, 0]);
        }
    }

    #[test]
    fn path_through_missing_vertex() {
        let vs = labelled_vertices(3);
        let mut g = graph_on(&vs[..2]);
        assert_eq!(
            g.connect_path(&vs),
            Err(GraphError::MissingVertex(vs[2].id()))
        );
        assert_eq!(g.number_of_edges(), 1);
    }
}
