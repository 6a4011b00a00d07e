//! Selection of the T sites that become aluminium.
//!
//! Every algorithm returns the substituted sites as T-site indices (position
//! among the Si atoms of the structure), which is what the writers in
//! [`crate::output`] expect.

pub mod chains;
pub mod clusters;
pub mod merw;
pub mod random;

use crate::connectivity::TSiteGraph;
use crate::error::ZError;
use crate::params::MerwParams;
use rand::Rng;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Algorithm {
    /// `nsubst` sites drawn uniformly without replacement.
    Random { nsubst: usize },
    /// One chain of neighbouring Al per entry, with the given lengths.
    Chains { lengths: Vec<usize> },
    /// A single compact cluster of `nsubst` Al grown around a random seed.
    Clusters { nsubst: usize },
    /// Maximum-entropy random walk placement of `nsubst` Al.
    Merw { nsubst: usize, params: MerwParams },
}

impl Algorithm {
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Random { .. } => "random",
            Algorithm::Chains { .. } => "chains",
            Algorithm::Clusters { .. } => "clusters",
            Algorithm::Merw { .. } => "merw",
        }
    }

    /// Runs the algorithm on `graph`, which is consumed in the process.
    pub fn select<R: Rng>(&self, graph: &mut TSiteGraph, rng: &mut R) -> Result<Vec<usize>, ZError> {
        match self {
            Algorithm::Random { nsubst } => random::generate_random(graph.size(), *nsubst, rng),
            Algorithm::Chains { lengths } => chains::generate_chains(graph, lengths, rng),
            Algorithm::Clusters { nsubst } => {
                clusters::clusters_substitutions(graph, *nsubst, rng)
            }
            Algorithm::Merw { nsubst, params } => {
                merw::merw_substitutions(graph, *nsubst, params, rng)
            }
        }
    }
}

/// Removes `value` from `pool` if present.
fn remove_value(pool: &mut Vec<usize>, value: usize) {
    if let Some(k) = pool.iter().position(|&p| p == value) {
        pool.remove(k);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connectivity::tests::ring;
    use rand::{rngs::StdRng, SeedableRng};
    use std::collections::BTreeSet;

    #[test]
    fn names() {
        assert_eq!(Algorithm::Random { nsubst: 1 }.name(), "random");
        assert_eq!(Algorithm::Chains { lengths: vec![] }.name(), "chains");
        assert_eq!(Algorithm::Clusters { nsubst: 1 }.name(), "clusters");
        let merw = Algorithm::Merw {
            nsubst: 1,
            params: MerwParams::default(),
        };
        assert_eq!(merw.name(), "merw");
    }

    #[test]
    fn dispatch_gives_distinct_in_range_sites() {
        let structure = ring(12);
        let algorithms = [
            Algorithm::Random { nsubst: 4 },
            Algorithm::Chains {
                lengths: vec![2, 1],
            },
            Algorithm::Clusters { nsubst: 4 },
            Algorithm::Merw {
                nsubst: 3,
                params: MerwParams {
                    neqsteps: 10,
                    nvisits: 2,
                },
            },
        ];
        for algorithm in &algorithms {
            let mut rng = StdRng::seed_from_u64(42);
            let mut graph = TSiteGraph::from_structure(&structure);
            let als = algorithm.select(&mut graph, &mut rng).unwrap();
            let unique: BTreeSet<usize> = als.iter().copied().collect();
            assert_eq!(unique.len(), als.len(), "{}", algorithm.name());
            assert!(als.iter().all(|&a| a < 12), "{}", algorithm.name());
        }
    }

    #[test]
    fn remove_value_ignores_missing() {
        let mut pool = vec![1, 2, 3];
        remove_value(&mut pool, 2);
        remove_value(&mut pool, 7);
        assert_eq!(pool, vec![1, 3]);
    }
}
