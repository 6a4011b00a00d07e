//! Generation of a whole batch of substituted structures.

use crate::connectivity::TSiteGraph;
use crate::error::ZError;
use crate::output::{print_gro_structure, print_structure};
use crate::params::{GenerationConfig, SEED_VARIABLE};
use crate::structure::Structure;
use log::{info, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::path::PathBuf;

/// Random generator for a batch: seeded when `seed` is given, from system
/// entropy otherwise.
pub fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => {
            info!("using fixed random seed: {seed}");
            StdRng::seed_from_u64(seed)
        }
        None => {
            info!("{SEED_VARIABLE} is not set, seeding from system entropy");
            StdRng::from_entropy()
        }
    }
}

/// Writes `config.nstruct` structures, each with its own substitution, and
/// returns the paths of the written files.
///
/// The output directory is created when missing. The first failure stops the
/// batch and is returned.
pub fn generate<R: Rng>(
    config: &GenerationConfig,
    structure: &Structure,
    rng: &mut R,
) -> Result<Vec<PathBuf>, ZError> {
    let out_dir = &config.out_dir;
    if out_dir.exists() {
        warn!(
            "output directory {} already exists, files may be overwritten",
            out_dir.display()
        );
    } else {
        std::fs::create_dir_all(out_dir)?;
    }

    if structure.tatoms() == 0 {
        warn!("no Si atoms found, there is nothing to substitute");
    }

    let mut written = Vec::with_capacity(config.nstruct);
    for i in 0..config.nstruct {
        info!("Progress: {}/{}", i + 1, config.nstruct);

        let mut graph = TSiteGraph::from_structure(structure);
        let als = config.algorithm.select(&mut graph, rng)?;

        written.push(print_structure(
            structure,
            &als,
            i,
            &config.name_zeo,
            &config.name_alg,
            out_dir,
        )?);
        if config.write_gro {
            written.push(print_gro_structure(
                structure,
                &als,
                i,
                &config.name_zeo,
                &config.name_alg,
                out_dir,
            )?);
        }
    }

    Ok(written)
}
