use itertools::Itertools;

use super::*;

/// Neighborhood of a single vertex: the stored edge for every neighbor.
///
/// Neighbors are identified by their position in the owning graph's vertex list and are kept
/// in insertion order.
#[derive(Clone)]
pub struct Neighborhood<L> {
    entries: Vec<(usize, Edge<L>)>,
}

impl<L> Default for Neighborhood<L> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<L> Neighborhood<L> {
    /// Returns the number of neighbors in the Neighborhood
    pub fn num_of_neighbors(&self) -> usize {
        self.entries.len()
    }

    /// Returns an iterator over the positions of all neighbors
    pub fn neighbors(&self) -> impl Iterator<Item = usize> + '_ {
        self.entries.iter().map(|(u, _)| *u)
    }

    /// Returns an iterator over all stored edges
    pub fn edges(&self) -> impl Iterator<Item = &Edge<L>> + '_ {
        self.entries.iter().map(|(_, e)| e)
    }

    /// Returns an iterator over `(neighbor position, edge)` pairs
    pub fn entries(&self) -> impl Iterator<Item = (usize, &Edge<L>)> + '_ {
        self.entries.iter().map(|(u, e)| (*u, e))
    }

    /// Returns the edge stored for neighbor `u`
    pub fn edge_to(&self, u: usize) -> Option<&Edge<L>> {
        self.entries.iter().find(|(x, _)| *x == u).map(|(_, e)| e)
    }

    /// Returns *true* if `u` is in the Neighborhood
    pub fn has_neighbor(&self, u: usize) -> bool {
        self.entries.iter().any(|(x, _)| *x == u)
    }

    /// Stores `edge` for neighbor `u`.
    /// Returns the previously stored edge if `u` was a neighbor before.
    pub fn insert(&mut self, u: usize, edge: Edge<L>) -> Option<Edge<L>> {
        match self.entries.iter_mut().find(|(x, _)| *x == u) {
            Some((_, stored)) => Some(std::mem::replace(stored, edge)),
            None => {
                self.entries.push((u, edge));
                None
            }
        }
    }

    /// Removes neighbor `u` and returns its edge if `u` was a neighbor
    pub fn remove(&mut self, u: usize) -> Option<Edge<L>> {
        let (pos, _) = self.entries.iter().find_position(|(x, _)| *x == u)?;
        Some(self.entries.remove(pos).1)
    }

    /// Removes all neighbors and returns their positions
    pub fn clear(&mut self) -> Vec<usize> {
        self.entries.drain(..).map(|(u, _)| u).collect_vec()
    }
}
