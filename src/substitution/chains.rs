use super::remove_value;
use crate::connectivity::TSiteGraph;
use crate::error::ZError;
use log::debug;
use rand::Rng;

/// Places one chain of neighbouring Al per entry of `lengths`.
///
/// Each chain starts at a random root that is neither substituted nor next to
/// a substituted site, then grows by hopping to a random current neighbour of
/// its last site. While growing, the neighbours that were not chosen are cut
/// out of the graph so chains cannot branch or touch each other.
pub fn generate_chains<R: Rng>(
    graph: &mut TSiteGraph,
    lengths: &[usize],
    rng: &mut R,
) -> Result<Vec<usize>, ZError> {
    let total = lengths
        .iter()
        .try_fold(0usize, |acc, &length| acc.checked_add(length))
        .filter(|&total| total <= graph.size())
        .ok_or_else(|| {
            ZError::Substitution(format!(
                "chains of lengths {lengths:?} do not fit on {} T sites",
                graph.size()
            ))
        })?;

    let neighbours = graph.neighbours();
    let mut roots: Vec<usize> = (0..graph.size()).collect();
    let mut als = Vec::with_capacity(total);

    for (chain, &length) in lengths.iter().enumerate() {
        if roots.is_empty() {
            return Err(ZError::Substitution(
                "no more root atoms available".to_string(),
            ));
        }

        let root = roots.remove(rng.gen_range(0..roots.len()));
        als.push(root);
        for &n in &neighbours[root] {
            remove_value(&mut roots, n);
        }
        debug!("chain {chain}: root {root}, length {length}");

        let mut last = root;
        for j in 1..length {
            let next = graph.random_neighbour(last, rng).ok_or_else(|| {
                ZError::Substitution(format!("no more neighbours available for site {last}"))
            })?;

            remove_value(&mut roots, next);
            for &n in &neighbours[next] {
                remove_value(&mut roots, n);
            }

            for &n in &neighbours[last] {
                if n != next {
                    graph.isolate(n);
                }
            }
            graph.unlink(last, next);

            als.push(next);
            last = next;

            if j == length - 1 {
                for &n in &neighbours[next] {
                    graph.isolate(n);
                }
            }
        }
    }

    Ok(als)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connectivity::tests::ring;
    use rand::{rngs::StdRng, SeedableRng};

    fn adjacent_on_ring(i: usize, j: usize, n: usize) -> bool {
        (i + 1) % n == j || (j + 1) % n == i
    }

    #[test]
    fn single_chain_is_connected() {
        for seed in 0..10 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut graph = TSiteGraph::from_structure(&ring(12));
            let als = generate_chains(&mut graph, &[3], &mut rng).unwrap();
            assert_eq!(als.len(), 3);
            assert!(adjacent_on_ring(als[0], als[1], 12));
            assert!(adjacent_on_ring(als[1], als[2], 12));
            assert_ne!(als[0], als[2]);
        }
    }

    #[test]
    fn chains_do_not_touch() {
        for seed in 0..10 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut graph = TSiteGraph::from_structure(&ring(24));
            let als = generate_chains(&mut graph, &[2, 2], &mut rng).unwrap();
            assert_eq!(als.len(), 4);
            assert!(adjacent_on_ring(als[0], als[1], 24));
            assert!(adjacent_on_ring(als[2], als[3], 24));
            for &a in &als[..2] {
                for &b in &als[2..] {
                    assert_ne!(a, b);
                    assert!(!adjacent_on_ring(a, b, 24), "seed {seed}: {als:?}");
                }
            }
        }
    }

    #[test]
    fn single_sites() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut graph = TSiteGraph::from_structure(&ring(12));
        let als = generate_chains(&mut graph, &[1, 1, 1], &mut rng).unwrap();
        assert_eq!(als.len(), 3);
        for (n, &a) in als.iter().enumerate() {
            for &b in &als[n + 1..] {
                assert!(!adjacent_on_ring(a, b, 12));
            }
        }
    }

    #[test]
    #[should_panic(expected = "no more root atoms available")]
    fn runs_out_of_roots() {
        let mut rng = StdRng::seed_from_u64(4);
        let mut graph = TSiteGraph::from_structure(&ring(6));
        generate_chains(&mut graph, &[1, 1, 1, 1], &mut rng).unwrap();
    }

    #[test]
    fn oversized_lengths() {
        let mut rng = StdRng::seed_from_u64(6);
        let mut graph = TSiteGraph::from_structure(&ring(12));
        for lengths in [vec![13], vec![usize::MAX], vec![usize::MAX, 1], vec![6, 7]] {
            let err = generate_chains(&mut graph, &lengths, &mut rng).unwrap_err();
            assert!(matches!(err, ZError::Substitution(_)), "{lengths:?}");
        }
    }

    #[test]
    fn huge_length_from_input() {
        let config =
            crate::params::GenerationConfig::parse("LTA chains out 1 2 18446744073709551615 1")
                .unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        let mut graph = TSiteGraph::from_structure(&ring(12));
        assert!(config.algorithm.select(&mut graph, &mut rng).is_err());
    }

    #[test]
    #[should_panic(expected = "no more neighbours available")]
    fn isolated_root() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut graph = TSiteGraph::new(3);
        generate_chains(&mut graph, &[2], &mut rng).unwrap();
    }
}
