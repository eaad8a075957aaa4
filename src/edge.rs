use std::{
    fmt::{Debug, Display},
    hash::{Hash, Hasher},
};

use crate::{error::GraphError, node::*};

/// An undirected edge between two distinct vertices.
///
/// Edges are normalized on construction: the endpoint with the smaller [`VertexId`] comes
/// first. Hence `Edge(v, w)` and `Edge(w, v)` are equal, hash identically and print identically.
///
/// ```
/// use lgraphs::prelude::*;
///
/// let v = Vertex::from("v");
/// let w = Vertex::from("w");
///
/// let e = Edge::new(v.clone(), w.clone()).unwrap();
/// assert_eq!(e, Edge::new(w.clone(), v.clone()).unwrap());
/// assert_eq!(e.to_string(), "Edge(Vertex(v), Vertex(w))");
///
/// assert_eq!(Edge::try_from_endpoints([v.clone()]), Err(GraphError::InvalidArity(1)));
/// assert_eq!(Edge::new(v.clone(), v.clone()), Err(GraphError::SelfLoop(v.id())));
/// ```
#[derive(Clone)]
pub struct Edge<L = String>(Vertex<L>, Vertex<L>);

impl<L> Edge<L> {
    /// Creates the edge `{v, w}`.
    /// Fails if both endpoints are the same vertex.
    pub fn new(v: Vertex<L>, w: Vertex<L>) -> Result<Self, GraphError> {
        if v.is_same(&w) {
            return Err(GraphError::SelfLoop(v.id()));
        }

        Ok(if v.id() < w.id() {
            Edge(v, w)
        } else {
            Edge(w, v)
        })
    }

    /// Creates an edge from an arbitrary collection of endpoints.
    /// Fails if the collection does not contain exactly two vertices.
    pub fn try_from_endpoints<I>(endpoints: I) -> Result<Self, GraphError>
    where
        I: IntoIterator<Item = Vertex<L>>,
    {
        let mut endpoints = endpoints.into_iter();
        match (endpoints.next(), endpoints.next()) {
            (Some(v), Some(w)) => {
                let rest = endpoints.count();
                if rest > 0 {
                    return Err(GraphError::InvalidArity(2 + rest));
                }
                Self::new(v, w)
            }
            (Some(_), None) => Err(GraphError::InvalidArity(1)),
            _ => Err(GraphError::InvalidArity(0)),
        }
    }

    /// Returns the endpoint with the smaller id
    pub fn first(&self) -> &Vertex<L> {
        &self.0
    }

    /// Returns the endpoint with the larger id
    pub fn second(&self) -> &Vertex<L> {
        &self.1
    }

    /// Returns the ids of both endpoints (smaller first)
    pub fn ids(&self) -> (VertexId, VertexId) {
        (self.0.id(), self.1.id())
    }

    /// Returns *true* if `v` is an endpoint of this edge
    pub fn contains(&self, v: &Vertex<L>) -> bool {
        self.0.is_same(v) || self.1.is_same(v)
    }

    /// Returns the endpoint that is not `v` or `None` if `v` is no endpoint
    pub fn opposite(&self, v: &Vertex<L>) -> Option<&Vertex<L>> {
        if self.0.is_same(v) {
            Some(&self.1)
        } else if self.1.is_same(v) {
            Some(&self.0)
        } else {
            None
        }
    }
}

impl<L> PartialEq for Edge<L> {
    fn eq(&self, other: &Self) -> bool {
        self.ids() == other.ids()
    }
}

impl<L> Eq for Edge<L> {}

impl<L> Hash for Edge<L> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.ids().hash(state);
    }
}

impl<L> PartialOrd for Edge<L> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<L> Ord for Edge<L> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.ids().cmp(&other.ids())
    }
}

impl<L> TryFrom<(Vertex<L>, Vertex<L>)> for Edge<L> {
    type Error = GraphError;

    fn try_from(value: (Vertex<L>, Vertex<L>)) -> Result<Self, Self::Error> {
        Self::new(value.0, value.1)
    }
}

impl<L: Clone> TryFrom<(&Vertex<L>, &Vertex<L>)> for Edge<L> {
    type Error = GraphError;

    fn try_from(value: (&Vertex<L>, &Vertex<L>)) -> Result<Self, Self::Error> {
        Self::new(value.0.clone(), value.1.clone())
    }
}

impl<L> TryFrom<Vec<Vertex<L>>> for Edge<L> {
    type Error = GraphError;

    fn try_from(value: Vec<Vertex<L>>) -> Result<Self, Self::Error> {
        Self::try_from_endpoints(value)
    }
}

impl<L: Display> Display for Edge<L> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Edge({}, {})", self.0, self.1)
    }
}

impl<L: Debug> Debug for Edge<L> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Edge({:?}, {:?})", self.0, self.1)
    }
}
