/*!
# Graph Representation

Graphs are stored as adjacency maps: every vertex maps each of its neighbors to the edge
connecting them. An undirected edge therefore occupies two slots, one at each endpoint, and
both slots are always written and cleared together.

Vertices are kept in insertion order ("container order"), which is the order used by
[`vertices`](crate::ops::GraphVertexOrder::vertices), by traversals started without an explicit
start vertex and by the edge generators in [`gens`](crate::gens).
*/

use crate::{ops::*, *};

mod neighborhood;
mod undirected;

pub use neighborhood::*;
pub use undirected::*;
