use thiserror::Error;

use crate::node::{NumVertices, VertexId};

/// Errors raised by edge construction, graph editing and the structural algorithms.
///
/// Vertices are reported by their [`VertexId`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GraphError {
    #[error("edges must connect exactly two vertices, got {0}")]
    InvalidArity(usize),
    #[error("edges must connect two distinct vertices, got vertex #{0} twice")]
    SelfLoop(VertexId),
    #[error("vertex #{0} is not part of the graph")]
    MissingVertex(VertexId),
    #[error("no edge between vertex #{0} and vertex #{1}")]
    MissingEdge(VertexId, VertexId),
    #[error("vertex #{0} is already part of the graph and has incident edges")]
    VertexHasEdges(VertexId),
    #[error("a regular graph on {vertices} vertices cannot have degree {degree}")]
    DegreeTooLarge {
        degree: NumVertices,
        vertices: NumVertices,
    },
    #[error("a regular graph of odd degree {degree} needs an even number of vertices, got {vertices}")]
    OddDegreeOddOrder {
        degree: NumVertices,
        vertices: NumVertices,
    },
    #[error("circulant construction requires an even degree, got {0}")]
    OddDegree(NumVertices),
    #[error("operation requires at least one vertex")]
    EmptyGraph,
    #[error("{0} is not a valid probability")]
    InvalidProbability(f64),
}
