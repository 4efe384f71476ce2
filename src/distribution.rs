//! Bucket distribution of hash values
//!
//! Sample `i` is `prefix + i`, and lands in bucket `hash(sample) % n`.
//! The report is observational: it carries the raw bucket loads and some
//! summary statistics, but makes no pass/fail judgement.

use alloc::{vec, vec::Vec};

use libm::sqrt;
use thiserror::Error;

use crate::hash::HashValue;
use crate::sample::labels;

#[derive(Clone, Copy, Debug, Error, PartialEq)]
pub enum Error {
    #[error("distribution test needs at least one sample")]
    ZeroSamples,
    #[error("histogram needs at least one bin")]
    ZeroBins,
}

/// Bucket loads produced by the distribution test
#[derive(Clone, Debug, PartialEq)]
pub struct DistributionReport {
    buckets: Vec<u64>,
    samples: u64,
}

impl DistributionReport {
    /// Build a report from raw bucket loads
    pub fn from_buckets(buckets: Vec<u64>) -> Result<Self, Error> {
        if buckets.is_empty() {
            return Err(Error::ZeroSamples);
        }
        let samples = buckets.iter().sum();
        Ok(Self { buckets, samples })
    }

    /// Per-bucket sample counts, indexed by `hash % n`
    pub fn buckets(&self) -> &[u64] {
        &self.buckets
    }

    /// Total number of samples (the sum of all bucket loads)
    pub fn samples(&self) -> u64 {
        self.samples
    }

    /// Number of buckets that received no sample
    pub fn empty_buckets(&self) -> usize {
        self.buckets.iter().filter(|&&b| b == 0).count()
    }

    /// Smallest bucket load
    pub fn min_load(&self) -> u64 {
        self.buckets.iter().copied().min().unwrap_or(0)
    }

    /// Largest bucket load
    pub fn max_load(&self) -> u64 {
        self.buckets.iter().copied().max().unwrap_or(0)
    }

    /// Expected load per bucket under a perfectly uniform hash
    pub fn mean_load(&self) -> f64 {
        self.samples as f64 / self.buckets.len() as f64
    }

    /// Standard deviation of the bucket loads
    pub fn std_dev(&self) -> f64 {
        let mean = self.mean_load();
        let var = self
            .buckets
            .iter()
            .map(|&b| {
                let d = b as f64 - mean;
                d * d
            })
            .sum::<f64>()
            / self.buckets.len() as f64;
        sqrt(var)
    }

    /// Pearson chi-square statistic against the uniform expectation
    ///
    /// Roughly `n - 1` for a uniform hash with `n` buckets.
    pub fn chi_square(&self) -> f64 {
        let expected = self.mean_load();
        if expected == 0.0 {
            return 0.0;
        }
        self.buckets
            .iter()
            .map(|&b| {
                let d = b as f64 - expected;
                d * d / expected
            })
            .sum()
    }

    /// Re-bin the bucket indices into `bins` equal-width ranges
    ///
    /// Mirrors a histogram of `hash % n` values; the bin counts sum to [samples](Self::samples).
    pub fn histogram(&self, bins: usize) -> Result<Vec<u64>, Error> {
        if bins == 0 {
            return Err(Error::ZeroBins);
        }

        let n = self.buckets.len();
        let mut res = vec![0_u64; bins];
        for (idx, &load) in self.buckets.iter().enumerate() {
            // idx < n, so the bin index is always < bins
            let bin = ((idx as u128 * bins as u128) / n as u128) as usize;
            res[bin] += load;
        }
        Ok(res)
    }
}

/// Run the distribution test over `n` generated inputs and `n` buckets
pub fn collect<F>(hash_fn: F, prefix: &str, n: usize) -> Result<DistributionReport, Error>
where
    F: Fn(&str) -> HashValue,
{
    if n == 0 {
        return Err(Error::ZeroSamples);
    }

    let mut buckets = vec![0_u64; n];
    for input in labels(prefix, n) {
        let bucket = hash_fn(&input) % n as HashValue;
        buckets[bucket as usize] += 1;
    }

    let report = DistributionReport::from_buckets(buckets)?;
    tracing::debug!(
        samples = report.samples(),
        empty = report.empty_buckets(),
        max = report.max_load(),
        "distribution collected"
    );
    Ok(report)
}
