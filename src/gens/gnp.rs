use rand::Rng;

use super::*;
use crate::utils::Probability;

/// A G(n, p) graph can be defined by either a probability or the average degree which is more
/// common in practice
#[derive(Debug, Copy, Clone)]
enum GnpType {
    /// Direct probability value
    Prob(f64),
    /// Average degree of a vertex
    AvgDeg(f64),
}

/// `G(n,p)` placement connects every unordered pair of distinct vertices with probability `p`,
/// independently of all other pairs.
///
/// Without configuration `p = 1/2`, i.e. every simple graph on the vertices is equally likely.
/// Parameters are validated only when the generator is applied to a graph.
///
/// ```
/// use lgraphs::{prelude::*, gens::*};
/// use rand::SeedableRng;
///
/// let vs: Vec<_> = (0..50).map(|i| Vertex::new(format!("v{i}"))).collect();
/// let mut g = Graph::from_edges(vs, []).unwrap();
///
/// let rng = &mut rand::rngs::StdRng::seed_from_u64(3);
/// assert!(Gnp::new().prob(1.5).add_random_edges(&mut g, rng).is_err());
/// assert_eq!(g.number_of_edges(), 0);
///
/// let added = Gnp::new().avg_deg(4.0).add_random_edges(&mut g, rng).unwrap();
/// assert_eq!(added, g.number_of_edges());
/// ```
#[derive(Debug, Copy, Clone)]
pub struct Gnp {
    p: GnpType,
}

impl Default for Gnp {
    fn default() -> Self {
        Self {
            p: GnpType::Prob(0.5),
        }
    }
}

impl Gnp {
    /// Creates a new `G(n,p)` generator with `p = 1/2`
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates `p` directly
    pub fn prob(mut self, prob: f64) -> Self {
        self.p = GnpType::Prob(prob);
        self
    }

    /// Updates `p` such that `p = d/(n - 1)` where `n` is the number of vertices of the graph
    /// the generator is applied to.
    pub fn avg_deg(mut self, deg: f64) -> Self {
        self.p = GnpType::AvgDeg(deg);
        self
    }

    /// Resolves the edge probability for a graph with `n` vertices
    fn probability_for(&self, n: NumVertices) -> Result<f64, GraphError> {
        let p = match self.p {
            GnpType::Prob(p) => p,
            GnpType::AvgDeg(d) if n > 1 => d / (n - 1) as f64,
            GnpType::AvgDeg(d) => {
                // no pairs to connect, only the sign of `d` matters
                if d < 0.0 { d } else { 0.0 }
            }
        };

        if p.is_valid_probability() {
            Ok(p)
        } else {
            Err(GraphError::InvalidProbability(p))
        }
    }

    /// Walks all pairs `i < j` of vertices in container order and connects them with the
    /// configured probability. Returns the number of pairs connected; pairs that were already
    /// connected have their edge replaced.
    pub fn add_random_edges<G, R>(&self, graph: &mut G, rng: &mut R) -> Result<usize, GraphError>
    where
        G: GraphEdgeEditing,
        R: Rng,
    {
        let vs = graph.vertices().cloned().collect_vec();
        let p = self.probability_for(vs.len())?;

        let mut added = 0;
        for (i, u) in vs.iter().enumerate() {
            for v in &vs[i + 1..] {
                if rng.random_bool(p) {
                    graph.connect(u, v)?;
                    added += 1;
                }
            }
        }

        debug!(vertices = vs.len(), p, added, "placed random edges");
        Ok(added)
    }
}

/// Shorthand for applying a [`Gnp`] generator with a fixed probability
pub trait RandomEdges {
    /// Connects every pair of distinct vertices independently with probability `p`.
    /// Fails without modifying the graph if `p` is not in `[0, 1]`.
    fn add_random_edges<R: Rng>(&mut self, p: f64, rng: &mut R) -> Result<usize, GraphError>;
}

impl<G> RandomEdges for G
where
    G: GraphEdgeEditing,
{
    fn add_random_edges<R: Rng>(&mut self, p: f64, rng: &mut R) -> Result<usize, GraphError> {
        Gnp::new().prob(p).add_random_edges(self, rng)
    }
}
