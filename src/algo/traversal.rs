/*!
Graph traversal algorithms.

This module provides:
- A generic traversal iterator [`TraversalSearch`] which is a BFS or DFS depending on its
  frontier (queue or stack).
- A high-level [`Traversal`] trait that exposes traversals directly as methods on graphs.

Visited-state lives in the traversal itself and is created fresh for every search, so
vertices never carry traversal flags and several searches may run on one graph at once.
*/

use std::collections::VecDeque;

use fxhash::{FxHashMap, FxHashSet};

use super::*;

/// Abstraction for the traversal frontier data structure.
///
/// Different implementations determine the traversal order:
///
/// - [`VecDeque`] -> queue semantics -> **BFS**
/// - [`Vec`] -> stack semantics -> **DFS**
pub trait VertexSequencer<T> {
    /// Creates a new sequencer initialized with a single item.
    fn init(u: T) -> Self;

    /// Pushes an item into the frontier.
    fn push(&mut self, item: T);

    /// Removes and returns the next item from the frontier.
    fn pop(&mut self) -> Option<T>;

    /// Returns the number of items currently in the frontier.
    fn cardinality(&self) -> usize;
}

impl<T> VertexSequencer<T> for VecDeque<T> {
    fn init(u: T) -> Self {
        Self::from(vec![u])
    }
    fn push(&mut self, u: T) {
        self.push_back(u)
    }
    fn pop(&mut self) -> Option<T> {
        self.pop_front()
    }
    fn cardinality(&self) -> usize {
        self.len()
    }
}

impl<T> VertexSequencer<T> for Vec<T> {
    fn init(u: T) -> Self {
        vec![u]
    }
    fn push(&mut self, u: T) {
        self.push(u)
    }
    fn pop(&mut self) -> Option<T> {
        self.pop()
    }
    fn cardinality(&self) -> usize {
        self.len()
    }
}

/// Generic traversal iterator supporting BFS and DFS variants.
///
/// A vertex is marked visited when it is pushed into the frontier, not when it is popped,
/// hence every reachable vertex is yielded exactly once.
pub struct TraversalSearch<'a, G, S>
where
    G: AdjacencyList,
    S: VertexSequencer<&'a Vertex<G::Label>>,
{
    graph: &'a G,
    visited: FxHashSet<VertexId>,
    sequencer: S,
    stop_at: Option<VertexId>,
}

/// A BFS traversal iterator over the graph, visiting vertices in
/// breadth-first order from a given start vertex.
pub type BFS<'a, G> = TraversalSearch<'a, G, VecDeque<&'a Vertex<<G as GraphVertexOrder>::Label>>>;

/// A DFS traversal iterator over the graph, visiting vertices in
/// depth-first order from a given start vertex.
pub type DFS<'a, G> = TraversalSearch<'a, G, Vec<&'a Vertex<<G as GraphVertexOrder>::Label>>>;

impl<'a, G, S> Iterator for TraversalSearch<'a, G, S>
where
    G: AdjacencyList,
    S: VertexSequencer<&'a Vertex<G::Label>>,
{
    type Item = &'a Vertex<G::Label>;

    fn next(&mut self) -> Option<Self::Item> {
        let u = self.sequencer.pop()?;
        let graph = self.graph;

        if self.stop_at == Some(u.id()) {
            while self.sequencer.pop().is_some() {} // drop all
        } else {
            // `u` was taken from the graph, so its neighborhood always exists
            for v in graph.out_vertices(u).into_iter().flatten() {
                if self.visited.insert(v.id()) {
                    self.sequencer.push(v);
                }
            }
        }

        Some(u)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let lower = if self.stop_at.is_some() {
            // reaching the stopper drops the remaining frontier
            self.sequencer.cardinality().min(1)
        } else {
            self.sequencer.cardinality()
        };

        (
            lower,
            Some(
                self.graph
                    .number_of_vertices()
                    .saturating_sub(self.visited.len())
                    + self.sequencer.cardinality(),
            ),
        )
    }
}

impl<'a, G, S> TraversalSearch<'a, G, S>
where
    G: AdjacencyList,
    S: VertexSequencer<&'a Vertex<G::Label>>,
{
    /// Creates a new traversal iterator starting from `start`.
    /// Fails if `start` is not a vertex of `graph`.
    pub fn new(graph: &'a G, start: &Vertex<G::Label>) -> Result<Self, GraphError> {
        let start = graph
            .find_vertex(start.id())
            .ok_or(GraphError::MissingVertex(start.id()))?;

        let mut visited = FxHashSet::default();
        visited.insert(start.id());

        Ok(Self {
            graph,
            visited,
            sequencer: S::init(start),
            stop_at: None,
        })
    }

    /// Returns the ids of all vertices discovered so far
    pub fn visited(&self) -> &FxHashSet<VertexId> {
        &self.visited
    }

    /// Returns *true* if `v` has been discovered
    pub fn did_visit(&self, v: &Vertex<G::Label>) -> bool {
        self.visited.contains(&v.id())
    }

    /// Returns the number of vertices discovered so far
    pub fn number_of_visited(&self) -> usize {
        self.visited.len()
    }

    /// Tries to restart the search at a yet unvisited vertex and returns
    /// true iff successful. Requires that search came to a hold earlier,
    /// i.e. self.next() returned None
    pub fn try_restart_at_unvisited(&mut self) -> bool {
        debug_assert_eq!(self.sequencer.cardinality(), 0);
        let graph = self.graph;
        match graph.vertices().find(|u| !self.visited.contains(&u.id())) {
            None => false,
            Some(u) => {
                self.visited.insert(u.id());
                self.sequencer.push(u);
                true
            }
        }
    }

    /// Sets a stopper vertex. If this vertex is reached, the iterator returns it and afterwards only None.
    pub fn set_stop_at(&mut self, stopper: &Vertex<G::Label>) {
        self.stop_at = Some(stopper.id());
    }

    /// Sets a stopper vertex. If this vertex is reached, the iterator returns it and afterwards only None.
    pub fn stop_at(mut self, stopper: &Vertex<G::Label>) -> Self {
        self.set_stop_at(stopper);
        self
    }

    /// Excludes a vertex from the search. It will be treated as if it was already visited,
    /// i.e. no edges to or from that vertex will be taken.
    ///
    /// # Warning
    /// Calling this method has no effect if the vertex is already in the frontier. It is therefore
    /// highly recommended to call this method directly after the constructor.
    pub fn exclude_vertex(&mut self, u: &Vertex<G::Label>) {
        self.visited.insert(u.id());
    }

    /// Builder-variant of [`TraversalSearch::exclude_vertex`]
    pub fn with_vertex_excluded(mut self, u: &Vertex<G::Label>) -> Self {
        self.exclude_vertex(u);
        self
    }
}

/// Provides convenient traversal methods (BFS, DFS, shortest paths)
pub trait Traversal: AdjacencyList + Sized {
    /// Returns a BFS iterator starting at the first vertex in container order.
    /// Fails on a graph without vertices.
    ///
    /// # Examples
    /// ```
    /// use lgraphs::{prelude::*, algo::*};
    ///
    /// let vs: Vec<_> = ["a", "b", "c"].into_iter().map(Vertex::from).collect();
    /// let mut g = Graph::from_edges(vs.clone(), []).unwrap();
    /// g.connect(&vs[0], &vs[1]).unwrap();
    ///
    /// let mut bfs = g.bfs().unwrap();
    /// assert_eq!(bfs.by_ref().count(), 2);
    /// assert!(!bfs.did_visit(&vs[2]));
    /// ```
    fn bfs(&self) -> Result<BFS<'_, Self>, GraphError> {
        let start = self.first_vertex().ok_or(GraphError::EmptyGraph)?;
        TraversalSearch::new(self, start)
    }

    /// Returns an iterator that traverses vertices reachable from `start`
    /// in **breadth-first search (BFS) order**.
    fn bfs_from(&self, start: &Vertex<Self::Label>) -> Result<BFS<'_, Self>, GraphError> {
        TraversalSearch::new(self, start)
    }

    /// Returns an iterator that traverses vertices reachable from `start`
    /// in **depth-first search (DFS) order**.
    fn dfs_from(&self, start: &Vertex<Self::Label>) -> Result<DFS<'_, Self>, GraphError> {
        TraversalSearch::new(self, start)
    }

    /// Computes a path with the fewest edges from `start` to `end` using BFS.
    ///
    /// Returns `Ok(Some(path))` with both endpoints included if a path exists and `Ok(None)`
    /// otherwise. Fails if either vertex is not part of the graph.
    fn shortest_path(
        &self,
        start: &Vertex<Self::Label>,
        end: &Vertex<Self::Label>,
    ) -> Result<Option<Vec<&Vertex<Self::Label>>>, GraphError> {
        let end = self
            .find_vertex(end.id())
            .ok_or(GraphError::MissingVertex(end.id()))?;
        let start = self
            .find_vertex(start.id())
            .ok_or(GraphError::MissingVertex(start.id()))?;

        let mut parent: FxHashMap<VertexId, &Vertex<Self::Label>> = FxHashMap::default();
        let mut queue = VecDeque::from(vec![start]);
        let mut visited = FxHashSet::default();
        visited.insert(start.id());

        while let Some(u) = queue.pop_front() {
            if u.is_same(end) {
                let mut path = vec![u];
                let mut node = u;
                while let Some(&p) = parent.get(&node.id()) {
                    path.push(p);
                    node = p;
                }
                path.reverse();
                return Ok(Some(path));
            }

            for v in self.out_vertices(u)? {
                if visited.insert(v.id()) {
                    parent.insert(v.id(), u);
                    queue.push_back(v);
                }
            }
        }

        Ok(None)
    }
}

impl<G> Traversal for G where G: AdjacencyList + Sized {}
