/*!
# Graph Algorithms

This module provides the **graph algorithms** built on top of the graph representation in this crate.
All algorithms are re-exported at the top level of this module, so you can simply do:
```rust
use lgraphs::algo::*;
```
and gain access to traversals and connectivity queries.
If possible, algorithms are provided as **iterators**, making it easy to consume results lazily.
*/

mod connectivity;
mod traversal;

use crate::prelude::*;

pub use connectivity::*;
pub use traversal::*;
