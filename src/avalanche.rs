use alloc::string::String;

use rand::distributions::Alphanumeric;
use rand::Rng;
use thiserror::Error;

use crate::hamming::hamming_distance;
use crate::hash::HashValue;

/// Minimum input length (in characters) for the avalanche test
pub const MIN_LEN: usize = 2;

/// Default avalanche input
pub const DEFAULT_INPUT: &str = "hello";

#[derive(Clone, Copy, Debug, Error, PartialEq)]
pub enum Error {
    #[error("input string is too short for an effective avalanche test ({0} characters)")]
    TooShort(usize),
    #[error("character {0:?} has no successor code point")]
    NoSuccessor(char),
    #[error("avalanche sweep needs at least one trial")]
    NoTrials,
}

/// Bit difference between the hashes of an input and its one-character mutation
#[derive(Clone, Debug, PartialEq)]
pub struct AvalancheReport {
    pub original: String,
    pub modified: String,
    pub original_hash: HashValue,
    pub modified_hash: HashValue,
    pub bit_difference: u32,
}

/// Replace the middle character (index `len / 2`) with the next code point
///
/// errors: strings shorter than [MIN_LEN] characters, and middle characters
/// at U+D7FF or U+10FFFF (the next code point is not a `char`)
pub fn mutate_middle(input: &str) -> Result<String, Error> {
    let len = input.chars().count();
    if len < MIN_LEN {
        return Err(Error::TooShort(len));
    }

    let mid = len / 2;
    let mut res = String::with_capacity(input.len() + 4);
    for (i, c) in input.chars().enumerate() {
        if i == mid {
            let next = char::from_u32(c as u32 + 1).ok_or(Error::NoSuccessor(c))?;
            res.push(next);
        } else {
            res.push(c);
        }
    }

    Ok(res)
}

/// Run the avalanche test on a single input
pub fn collect<F>(hash_fn: F, input: &str) -> Result<AvalancheReport, Error>
where
    F: Fn(&str) -> HashValue,
{
    let modified = mutate_middle(input)?;
    let original_hash = hash_fn(input);
    let modified_hash = hash_fn(&modified);
    let bit_difference = hamming_distance(original_hash, modified_hash);

    tracing::debug!(input, modified = modified.as_str(), bit_difference, "avalanche collected");

    Ok(AvalancheReport {
        original: input.into(),
        modified,
        original_hash,
        modified_hash,
        bit_difference,
    })
}

/// Bit differences over many random inputs
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AvalancheSummary {
    pub trials: usize,
    pub min: u32,
    pub max: u32,
    pub mean: f64,
}

/// Run the avalanche test on `trials` random alphanumeric inputs of `len` characters
///
/// Alphanumeric characters always have a successor, so only the length can fail.
pub fn sweep<F, R>(
    hash_fn: F,
    rng: &mut R,
    len: usize,
    trials: usize,
) -> Result<AvalancheSummary, Error>
where
    F: Fn(&str) -> HashValue,
    R: Rng,
{
    if len < MIN_LEN {
        return Err(Error::TooShort(len));
    }
    if trials == 0 {
        return Err(Error::NoTrials);
    }

    let mut min = u32::MAX;
    let mut max = 0_u32;
    let mut total = 0_u64;

    for _ in 0..trials {
        let input: String = (&mut *rng).sample_iter(&Alphanumeric).take(len).collect();
        let bits = collect(&hash_fn, &input)?.bit_difference;
        min = min.min(bits);
        max = max.max(bits);
        total += bits as u64;
    }

    let summary = AvalancheSummary {
        trials,
        min,
        max,
        mean: total as f64 / trials as f64,
    };
    tracing::debug!(trials, min, max, mean = summary.mean, "avalanche sweep collected");

    Ok(summary)
}
