/*!
`lgraphs` is a small library for **l**abelled, undirected graphs.

# Representation

**Vertices** are values of type [`Vertex<L>`](node::Vertex) carrying an arbitrary label. Each
vertex receives a unique [`VertexId`] on creation, and identity is decided by this id alone:
two vertices with the same label are still different vertices, while clones of a vertex are
the same vertex.

**Edges** are unordered pairs of two distinct vertices, see [`Edge`]. The endpoints are stored
normalized (lower id first), so `Edge(u, v)` and `Edge(v, u)` compare equal.

The graph itself, [`UndirectedGraph`](repr::UndirectedGraph) (or simply [`Graph`](repr::Graph)),
maps every vertex to its neighbors and every neighbor to the connecting edge. Each edge is stored
once per endpoint and both copies are always written and removed together.

# Design

Functionality is exposed through traits implemented on the graph itself:
- [`ops`] contains the basic queries and edits such as `out_vertices`, `add_edge`, `remove_edge`,
- [`algo`] contains traversals (`graph.bfs()`, `graph.dfs_from(v)`) and connectivity queries,
- [`gens`] contains generators placing edges on existing vertices: complete, regular, random
  as well as paths and cycles.

Generators that need parameters are configurable structs following the *Builder* pattern, see
[`Gnp`](gens::Gnp). All fallible operations return [`GraphError`].

In most use-cases, `use lgraphs::{prelude::*, algo::*};` suffices.

```
use lgraphs::{prelude::*, algo::*, gens::*};

let vs: Vec<_> = (0..8).map(|i| Vertex::new(format!("v{i}"))).collect();
let mut g = Graph::from_edges(vs.clone(), []).unwrap();

g.add_regular_edges(3).unwrap();
assert!(g.is_regular(3));
assert!(g.is_connected().unwrap());

let path = g.shortest_path(&vs[0], &vs[4]).unwrap().unwrap();
assert_eq!(path.len(), 2);
```
*/

pub mod algo;
pub mod edge;
pub mod error;
pub mod gens;
pub mod node;
pub mod ops;
pub mod repr;
#[cfg(test)]
pub(crate) mod testing;
pub mod utils;

pub use edge::Edge;
pub use error::GraphError;
pub use node::*;

/// `lgraphs::prelude` includes vertices, edges, errors, all basic graph operation traits as well as the graph representation.
pub mod prelude {
    pub use super::{edge::*, error::*, node::*, ops::*, repr::*};
}
