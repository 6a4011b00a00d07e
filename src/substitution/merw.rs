use super::remove_value;
use crate::connectivity::TSiteGraph;
use crate::error::ZError;
use crate::params::MerwParams;
use log::debug;
use nalgebra::{DMatrix, SymmetricEigen};
use rand::Rng;

/// Attempts at finding a non isolated walker start before giving up and
/// substituting the isolated site directly.
const START_ATTEMPTS: usize = 20;

/// Amplitude of the noise added to the adjacency matrix before
/// diagonalisation, so that disconnected graphs still have a unique
/// dominant eigenvector.
const NOISE: f64 = 0.01;

/// Places `nsubst` Al with a maximum-entropy random walk.
///
/// Each new Al is the first site a walker visits `nvisits` times after
/// `neqsteps` equilibration steps. Substituted sites are cut out of the
/// graph, so the walk always stays on the remaining Si. When more than half
/// of the sites must be substituted, the complement is placed instead and
/// the remaining sites are returned.
pub fn merw_substitutions<R: Rng>(
    graph: &mut TSiteGraph,
    nsubst: usize,
    params: &MerwParams,
    rng: &mut R,
) -> Result<Vec<usize>, ZError> {
    let tatoms = graph.size();
    if nsubst > tatoms {
        return Err(ZError::Substitution(format!(
            "cannot place {nsubst} Al on {tatoms} T sites"
        )));
    }

    let (target, permute) = if nsubst > tatoms / 2 {
        (tatoms - nsubst, true)
    } else {
        (nsubst, false)
    };

    let mut als = Vec::with_capacity(target);
    if target > 0 {
        let mut pool: Vec<usize> = (0..tatoms).collect();
        let first = pool.remove(rng.gen_range(0..pool.len()));
        als.push(first);
        graph.isolate(first);
        let mut neighbours = graph.neighbours();

        for _ in 1..target {
            if pool.is_empty() {
                return Err(ZError::Substitution("no more atoms available".to_string()));
            }

            let transition = compute_s(graph, rng)?;

            let mut start = pool[rng.gen_range(0..pool.len())];
            for _ in 1..START_ATTEMPTS {
                if !neighbours[start].is_empty() {
                    break;
                }
                start = pool[rng.gen_range(0..pool.len())];
            }

            let next = if neighbours[start].is_empty() {
                debug!("walker start {start} is isolated, substituting it directly");
                start
            } else {
                let next = merw(&transition, &neighbours, start, params, rng)?;
                if !pool.contains(&next) {
                    return Err(ZError::Substitution(format!(
                        "the walker selected site {next}, which is already substituted"
                    )));
                }
                next
            };

            remove_value(&mut pool, next);
            als.push(next);
            graph.isolate(next);
            neighbours = graph.neighbours();
        }
    }

    if permute {
        Ok((0..tatoms).filter(|i| !als.contains(i)).collect())
    } else {
        Ok(als)
    }
}

/// Maximal entropy transition matrix of the current graph:
/// `S_ij = A_ij / λ * ψ_j / ψ_i` with (λ, ψ) the dominant eigenpair of the
/// (slightly perturbed) adjacency matrix.
pub fn compute_s<R: Rng>(graph: &TSiteGraph, rng: &mut R) -> Result<DMatrix<f64>, ZError> {
    let n = graph.size();
    let adjacency = graph.adjacency().map(|x| x as f64);

    let mut perturbed = adjacency.clone();
    for i in 0..n {
        for j in i..n {
            let noise = NOISE * rng.gen::<f64>();
            perturbed[(i, j)] += noise;
            if i != j {
                perturbed[(j, i)] += noise;
            }
        }
    }

    let eigen = SymmetricEigen::new(perturbed);
    let max_index = eigen.eigenvalues.imax();
    let max_eval = eigen.eigenvalues[max_index];
    if max_eval <= 0.0 {
        return Err(ZError::Substitution(
            "adjacency matrix has no positive eigenvalue".to_string(),
        ));
    }
    let psi = eigen.eigenvectors.column(max_index);

    Ok(DMatrix::from_fn(n, n, |i, j| {
        adjacency[(i, j)] / max_eval * (psi[j] / psi[i])
    }))
}

/// Runs one walk from `start` and returns the first site reaching
/// `nvisits` visits after equilibration.
pub fn merw<R: Rng>(
    transition: &DMatrix<f64>,
    neighbours: &[Vec<usize>],
    start: usize,
    params: &MerwParams,
    rng: &mut R,
) -> Result<usize, ZError> {
    let mut position = start;
    for _ in 0..params.neqsteps {
        position = merw_step(transition, neighbours, position, rng)?;
    }

    let mut visits = vec![0; neighbours.len()];
    loop {
        position = merw_step(transition, neighbours, position, rng)?;
        visits[position] += 1;
        if visits[position] >= params.nvisits {
            return Ok(position);
        }
    }
}

/// Moves the walker from `i` to one of its neighbours, with the
/// probabilities of row `i` of the transition matrix.
pub fn merw_step<R: Rng>(
    transition: &DMatrix<f64>,
    neighbours: &[Vec<usize>],
    i: usize,
    rng: &mut R,
) -> Result<usize, ZError> {
    let options = &neighbours[i];
    let (&last, rest) = options.split_last().ok_or_else(|| {
        ZError::Substitution(format!("the walker is stuck on isolated site {i}"))
    })?;

    let p: f64 = rng.gen();
    let mut acc = 0.0;
    for &j in rest {
        acc += transition[(i, j)];
        if p <= acc {
            return Ok(j);
        }
    }
    Ok(last)
}
