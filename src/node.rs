/*!
# Vertex Representation

A [`Vertex`] is a labelled node. Its identity is a [`VertexId`] handed out when the vertex is
created, **not** its label: two vertices built from the same label are distinct nodes, while
clones of one vertex all refer to the same node.

Graphs key their adjacency by [`VertexId`], so labels may be any type and need neither `Eq`
nor `Hash`.
*/

use std::{
    fmt::{Debug, Display},
    hash::{Hash, Hasher},
    sync::atomic::{AtomicU64, Ordering},
};

/// Stable handle identifying a vertex across all graphs of the process
pub type VertexId = u64;

/// Number of vertices in a graph
pub type NumVertices = usize;

static NEXT_VERTEX_ID: AtomicU64 = AtomicU64::new(0);

/// Returns a handle that has never been returned before
fn fresh_vertex_id() -> VertexId {
    NEXT_VERTEX_ID.fetch_add(1, Ordering::Relaxed)
}

/// A node of a graph carrying a label of type `L`.
///
/// Equality, ordering and hashing only consider the vertex' id.
///
/// ```
/// use lgraphs::prelude::*;
///
/// let v = Vertex::new("v");
/// let w = Vertex::new("v");
///
/// assert_ne!(v, w);
/// assert_eq!(v, v.clone());
/// assert_eq!(v.to_string(), "Vertex(v)");
/// ```
#[derive(Clone)]
pub struct Vertex<L = String> {
    id: VertexId,
    label: L,
}

impl<L> Vertex<L> {
    /// Creates a new vertex with a fresh identity
    pub fn new(label: L) -> Self {
        Self {
            id: fresh_vertex_id(),
            label,
        }
    }

    /// Returns the identity of this vertex
    pub fn id(&self) -> VertexId {
        self.id
    }

    /// Returns the label this vertex was created with
    pub fn label(&self) -> &L {
        &self.label
    }

    /// Returns *true* if both vertices are the same node
    pub fn is_same(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl From<&str> for Vertex<String> {
    fn from(label: &str) -> Self {
        Self::new(label.to_owned())
    }
}

impl<L> PartialEq for Vertex<L> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<L> Eq for Vertex<L> {}

impl<L> PartialOrd for Vertex<L> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<L> Ord for Vertex<L> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.id.cmp(&other.id)
    }
}

impl<L> Hash for Vertex<L> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl<L: Display> Display for Vertex<L> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Vertex({})", self.label)
    }
}

impl<L: Debug> Debug for Vertex<L> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Vertex({:?})", self.label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fxhash::FxHashSet;

    #[test]
    fn identity_is_not_label() {
        let v = Vertex::new('a');
        let w = Vertex::new('a');

        assert_ne!(v.id(), w.id());
        assert!(!v.is_same(&w));
        assert_eq!(v.label(), w.label());

        let set: FxHashSet<_> = [v.clone(), w.clone(), v.clone()].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn ids_increase() {
        let v = Vertex::new(0);
        let w = Vertex::new(1);
        assert!(v < w);
    }

    #[test]
    fn display_and_debug() {
        let v = Vertex::from("v");
        assert_eq!(format!("{v}"), "Vertex(v)");
        assert_eq!(format!("{v:?}"), "Vertex(\"v\")");
    }
}
