use crate::connectivity::TSiteGraph;
use crate::error::ZError;
use rand::Rng;

/// Grows one cluster of `nsubst` Al around a random seed site.
///
/// Substituted sites are expanded in the order they were added, and each
/// contributes its not yet substituted neighbours in ascending order, so the
/// cluster fills shell by shell around the seed.
pub fn clusters_substitutions<R: Rng>(
    graph: &TSiteGraph,
    nsubst: usize,
    rng: &mut R,
) -> Result<Vec<usize>, ZError> {
    if nsubst == 0 {
        return Ok(Vec::new());
    }
    if graph.size() == 0 {
        return Err(ZError::Substitution(
            "no T sites to grow a cluster on".to_string(),
        ));
    }

    let neighbours = graph.neighbours();
    let mut als = vec![rng.gen_range(0..graph.size())];

    let mut current = 0;
    while als.len() < nsubst {
        let site = *als.get(current).ok_or_else(|| {
            ZError::Substitution(format!(
                "cluster cannot grow beyond {} sites",
                als.len()
            ))
        })?;
        for &n in &neighbours[site] {
            if als.len() == nsubst {
                break;
            }
            if !als.contains(&n) {
                als.push(n);
            }
        }
        current += 1;
    }

    Ok(als)
}
