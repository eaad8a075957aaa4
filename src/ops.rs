use crate::*;

/// Provides getters pertaining to the vertex-set of a graph
pub trait GraphVertexOrder {
    /// Label type carried by the vertices of the graph
    type Label: Clone;

    /// Returns the number of vertices of the graph
    fn number_of_vertices(&self) -> NumVertices;

    /// Returns an iterator over V in container order, i.e. the order of insertion
    fn vertices(&self) -> impl Iterator<Item = &Vertex<Self::Label>> + '_;

    /// Returns the graph's copy of the vertex with identity `id` (if present)
    fn find_vertex(&self, id: VertexId) -> Option<&Vertex<Self::Label>>;

    /// Returns *true* if `v` is a vertex of the graph
    fn has_vertex(&self, v: &Vertex<Self::Label>) -> bool {
        self.find_vertex(v.id()).is_some()
    }

    /// Returns the first vertex in container order (if any)
    fn first_vertex(&self) -> Option<&Vertex<Self::Label>> {
        self.vertices().next()
    }

    /// Returns *true* if the graph has no vertices (and thus no edges)
    fn is_empty(&self) -> bool {
        self.number_of_vertices() == 0
    }
}

/// Traits pertaining getters for neighborhoods & edges
pub trait AdjacencyList: GraphVertexOrder + Sized {
    /// Returns an iterator over the neighbors of `v`.
    /// Fails if `v` is not a vertex of the graph.
    fn out_vertices(
        &self,
        v: &Vertex<Self::Label>,
    ) -> Result<impl Iterator<Item = &Vertex<Self::Label>> + '_, GraphError>;

    /// Returns an iterator over the edges incident to `v`.
    /// Fails if `v` is not a vertex of the graph.
    fn out_edges(
        &self,
        v: &Vertex<Self::Label>,
    ) -> Result<impl Iterator<Item = &Edge<Self::Label>> + '_, GraphError>;

    /// Returns the number of neighbors of `v`.
    /// Fails if `v` is not a vertex of the graph.
    fn degree_of(&self, v: &Vertex<Self::Label>) -> Result<NumVertices, GraphError>;

    /// Returns the edge stored between `u` and `v`.
    /// Returns `None` if either vertex is absent or they are not adjacent.
    fn get_edge(&self, u: &Vertex<Self::Label>, v: &Vertex<Self::Label>)
    -> Option<&Edge<Self::Label>>;

    /// Returns an iterator over all edges of the graph.
    /// Every undirected edge is reported exactly once.
    fn edges(&self) -> impl Iterator<Item = &Edge<Self::Label>> + '_;

    /// Returns the number of (undirected) edges of the graph
    fn number_of_edges(&self) -> usize;

    /// Returns *true* if the graph has no edges
    fn is_singleton_graph(&self) -> bool {
        self.number_of_edges() == 0
    }

    /// Returns *true* if `u` and `v` are adjacent
    fn has_edge(&self, u: &Vertex<Self::Label>, v: &Vertex<Self::Label>) -> bool {
        self.get_edge(u, v).is_some()
    }

    /// Returns the degrees of all vertices in container order
    fn degrees(&self) -> impl Iterator<Item = NumVertices> + '_ {
        self.vertices().map(|v| self.degree_of(v).unwrap_or_default())
    }

    /// Returns the maximum degree in the graph
    fn max_degree(&self) -> NumVertices {
        self.degrees().max().unwrap_or(0)
    }

    /// Returns *true* if every vertex has exactly `degree` neighbors
    fn is_regular(&self, degree: NumVertices) -> bool {
        self.degrees().all(|d| d == degree)
    }
}

/// Provides functions to insert vertices and insert/delete edges.
///
/// Every edge is stored on both of its endpoints; implementations must keep both sides in sync.
pub trait GraphEdgeEditing: AdjacencyList {
    /// Adds `v` without neighbors.
    ///
    /// Adding a vertex that is already present is a no-op as long as it has no incident edges
    /// and fails otherwise; use [`GraphEdgeEditing::remove_edges_at_vertex`] to reset a vertex.
    fn add_vertex(&mut self, v: Vertex<Self::Label>) -> Result<(), GraphError>;

    /// Adds all vertices in the collection
    fn add_vertices<I>(&mut self, vertices: I) -> Result<(), GraphError>
    where
        I: IntoIterator<Item = Vertex<Self::Label>>,
    {
        for v in vertices {
            self.add_vertex(v)?;
        }
        Ok(())
    }

    /// Stores `e` between its endpoints.
    /// An edge already stored between the same endpoints is replaced and returned.
    /// Fails if either endpoint is not a vertex of the graph.
    fn add_edge(&mut self, e: Edge<Self::Label>) -> Result<Option<Edge<Self::Label>>, GraphError>;

    /// Adds all edges in the collection
    fn add_edges<I>(&mut self, edges: I) -> Result<(), GraphError>
    where
        I: IntoIterator<Item = Edge<Self::Label>>,
    {
        for e in edges {
            self.add_edge(e)?;
        }
        Ok(())
    }

    /// Creates the edge `{u, v}` and adds it to the graph
    fn connect(
        &mut self,
        u: &Vertex<Self::Label>,
        v: &Vertex<Self::Label>,
    ) -> Result<Option<Edge<Self::Label>>, GraphError> {
        self.add_edge(Edge::new(u.clone(), v.clone())?)
    }

    /// Removes the edge between the endpoints of `e` and returns the stored edge.
    /// Fails if no such edge is stored.
    fn remove_edge(&mut self, e: &Edge<Self::Label>) -> Result<Edge<Self::Label>, GraphError>;

    /// Removes all edges incident to `v` and returns their number.
    /// Fails if `v` is not a vertex of the graph.
    fn remove_edges_at_vertex(&mut self, v: &Vertex<Self::Label>) -> Result<usize, GraphError>;
}

/// A super trait for creating a graph from scratch from sequences of vertices and edges
pub trait GraphFromScratch: Sized + GraphVertexOrder {
    /// Creates a graph containing `vertices` and `edges`.
    /// Fails if an edge references a vertex not in `vertices`.
    fn from_edges<V, E>(vertices: V, edges: E) -> Result<Self, GraphError>
    where
        V: IntoIterator<Item = Vertex<Self::Label>>,
        E: IntoIterator<Item = Edge<Self::Label>>;
}

impl<G> GraphFromScratch for G
where
    G: Default + GraphEdgeEditing,
{
    fn from_edges<V, E>(vertices: V, edges: E) -> Result<Self, GraphError>
    where
        V: IntoIterator<Item = Vertex<Self::Label>>,
        E: IntoIterator<Item = Edge<Self::Label>>,
    {
        let mut graph = Self::default();
        graph.add_vertices(vertices)?;
        graph.add_edges(edges)?;
        Ok(graph)
    }
}
