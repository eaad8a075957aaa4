/*!
# Graph Generators

This module provides extension traits that place edges on the vertices already present in a
graph:

- [`CompleteEdges`]: connects every pair of distinct vertices,
- [`RegularEdges`]: makes every vertex have the same degree `d`,
- [`GeneratorSubstructures`]: paths and cycles through given vertices,
- [`Gnp`] / [`RandomEdges`]: every pair independently with probability `p`.

All generators walk the vertices in container order (see [`repr`](crate::repr)) and add edges
through [`GraphEdgeEditing`], so the symmetry of the adjacency is preserved. Generators that
need parameters follow the builder pattern:

```rust
use lgraphs::{prelude::*, gens::*};
use rand::SeedableRng;

let vs: Vec<_> = (0..10).map(|i| Vertex::new(i.to_string())).collect();
let mut g = Graph::from_edges(vs, []).unwrap();

let rng = &mut rand::rngs::StdRng::seed_from_u64(42);
Gnp::new().prob(1.0).add_random_edges(&mut g, rng).unwrap();
assert_eq!(g.number_of_edges(), 45);
```
*/

use itertools::Itertools;
use tracing::debug;

use crate::prelude::*;

mod complete;
mod gnp;
mod regular;
mod substructures;

pub use complete::*;
pub use gnp::*;
pub use regular::*;
pub use substructures::*;
