use crate::error::ZError;
use rand::Rng;

/// Draws `nsubst` distinct T sites out of `tatoms`, uniformly.
pub fn generate_random<R: Rng>(tatoms: usize, nsubst: usize, rng: &mut R) -> Result<Vec<usize>, ZError> {
    if nsubst > tatoms {
        return Err(ZError::Substitution(format!(
            "cannot place {nsubst} Al on {tatoms} T sites"
        )));
    }

    let mut pool: Vec<usize> = (0..tatoms).collect();
    let als = (0..nsubst)
        .map(|_| {
            let index = rng.gen_range(0..pool.len());
            pool.remove(index)
        })
        .collect();

    Ok(als)
}
