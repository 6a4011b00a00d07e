//! Run parameters: random-walk tuning and the `generate.input` batch file.

use crate::error::ZError;
use crate::substitution::Algorithm;
use log::warn;
use std::path::{Path, PathBuf};
use std::str::SplitWhitespace;

/// Environment variable holding a fixed random seed.
pub const SEED_VARIABLE: &str = "RANDOM_SEED";

/// Tuning of the maximum-entropy random walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MerwParams {
    /// Number of steps to find the equilibrium position
    pub neqsteps: usize,
    /// Number of visits needed to select a new Al
    pub nvisits: usize,
}

impl Default for MerwParams {
    fn default() -> Self {
        MerwParams {
            neqsteps: 100,
            nvisits: 20,
        }
    }
}

/// Everything needed to run a batch of substitutions on one framework.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationConfig {
    /// Framework code, e.g. `LTA`
    pub name_zeo: String,
    /// Algorithm name as given in the input (`chains`, `clusters`, `merw`, `random`)
    pub name_alg: String,
    pub out_dir: PathBuf,
    pub nstruct: usize,
    pub algorithm: Algorithm,
    /// Also write a `.gro` file next to every `.cif`
    pub write_gro: bool,
    pub seed: Option<u64>,
}

fn next_token<'a>(tokens: &mut SplitWhitespace<'a>, what: &str) -> Result<&'a str, ZError> {
    tokens
        .next()
        .ok_or_else(|| ZError::Config(format!("missing {what}")))
}

fn next_usize(tokens: &mut SplitWhitespace, what: &str) -> Result<usize, ZError> {
    let token = next_token(tokens, what)?;
    token
        .parse::<usize>()
        .map_err(|e| ZError::Config(format!("could not parse {what} '{token}': {e}")))
}

impl GenerationConfig {
    /// Parses the whitespace separated `generate.input` format:
    ///
    /// ```text
    /// name_zeo name_alg out_dir nstruct <algorithm fields>
    /// ```
    ///
    /// where the algorithm fields are `Nchains len_1 .. len_N` for `chains`,
    /// `Nals` for `clusters` and `random`, and `Nals [Neqsteps Nvisits]` for
    /// `merw`.
    pub fn parse(input: &str) -> Result<Self, ZError> {
        let mut tokens = input.split_whitespace();

        let name_zeo = next_token(&mut tokens, "zeolite name")?.to_string();
        let name_alg = next_token(&mut tokens, "algorithm name")?.to_string();
        let out_dir = PathBuf::from(next_token(&mut tokens, "output directory")?);
        let nstruct = next_usize(&mut tokens, "number of structures")?;

        let algorithm = match name_alg.as_str() {
            "chains" => {
                let nchains = next_usize(&mut tokens, "number of chains")?;
                let lengths = (0..nchains)
                    .map(|_| next_usize(&mut tokens, "chain length"))
                    .collect::<Result<Vec<_>, _>>()?;
                Algorithm::Chains { lengths }
            }
            "clusters" => Algorithm::Clusters {
                nsubst: next_usize(&mut tokens, "number of Al")?,
            },
            "merw" => {
                let nsubst = next_usize(&mut tokens, "number of Al")?;
                let mut params = MerwParams::default();
                if tokens.clone().next().is_some() {
                    params.neqsteps = next_usize(&mut tokens, "number of equilibration steps")?;
                    params.nvisits = next_usize(&mut tokens, "number of visits")?;
                }
                Algorithm::Merw { nsubst, params }
            }
            "random" => Algorithm::Random {
                nsubst: next_usize(&mut tokens, "number of Al")?,
            },
            other => {
                return Err(ZError::Config(format!(
                    "wrong algorithm name introduced: '{other}'"
                )));
            }
        };

        if let Some(extra) = tokens.next() {
            warn!("ignoring trailing input starting at '{extra}'");
        }

        Ok(GenerationConfig {
            name_zeo,
            name_alg,
            out_dir,
            nstruct,
            algorithm,
            write_gro: false,
            seed: None,
        })
    }

    pub fn read(path: &Path) -> Result<Self, ZError> {
        let input = std::fs::read_to_string(path).map_err(|e| {
            ZError::Config(format!(
                "unable to open file {} for reading: {e}",
                path.display()
            ))
        })?;
        Self::parse(&input)
    }

    /// Reads the seed from `RANDOM_SEED`, leaving it unset when the variable
    /// is missing. See [`parse_seed`] for malformed values.
    pub fn seed_from_env(mut self) -> Self {
        self.seed = std::env::var(SEED_VARIABLE)
            .ok()
            .map(|value| parse_seed(&value));
        self
    }
}

/// Reads a seed the way C's `atoi` does: the leading integer is used and
/// anything after it is dropped, so a value with no leading digits gives 0.
/// A malformed value still yields a fixed, reproducible seed.
pub fn parse_seed(value: &str) -> u64 {
    let trimmed = value.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let digits = rest.bytes().take_while(u8::is_ascii_digit);
    let magnitude = digits.fold(0u64, |acc, d| {
        acc.wrapping_mul(10).wrapping_add(u64::from(d - b'0'))
    });

    let seed = if negative {
        magnitude.wrapping_neg()
    } else {
        magnitude
    };

    let clean = value.trim();
    if clean.parse::<i64>().is_err() && clean.parse::<u64>().is_err() {
        warn!("{SEED_VARIABLE}='{value}' is not an integer, using seed {seed}");
    }
    seed
}
