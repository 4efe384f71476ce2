//! Harness driver
//!
//! Runs every collector against one hash function, in a fixed order, and
//! hands each result to a [Reporter]. Nothing is shared between collectors.

use std::io;

use rand::rngs::StdRng;
use rand::SeedableRng;
use thiserror::Error;

use crate::avalanche::{self, AvalancheReport, AvalancheSummary};
use crate::collision::{self, CollisionReport};
use crate::distribution::{self, DistributionReport};
use crate::hash::HashValue;
use crate::sample::{Sample, DEFAULT_PREFIX};
use crate::throughput::{self, ThroughputReport};

/// Strings hashed and printed before the collectors run
pub const DEFAULT_PROBES: [&str; 5] = ["hello", "world", "Hello", "hash", "function"];

/// Default sample count for the distribution and collision tests
pub const DEFAULT_SAMPLES: usize = 10_000;

#[derive(Debug, Error)]
pub enum Error {
    #[error("distribution test failed: {0}")]
    Distribution(#[from] distribution::Error),
    #[error("failed to write report: {0}")]
    Io(#[from] io::Error),
}

/// Harness parameters
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub probes: Vec<String>,
    pub prefix: String,
    pub distribution_samples: usize,
    pub collision_samples: usize,
    pub avalanche_input: String,
    /// Random inputs for the avalanche sweep, zero disables it
    pub sweep_trials: usize,
    pub sweep_len: usize,
    pub sweep_seed: u64,
    pub throughput_samples: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            probes: DEFAULT_PROBES.iter().map(|s| s.to_string()).collect(),
            prefix: DEFAULT_PREFIX.into(),
            distribution_samples: DEFAULT_SAMPLES,
            collision_samples: DEFAULT_SAMPLES,
            avalanche_input: avalanche::DEFAULT_INPUT.into(),
            sweep_trials: 1000,
            sweep_len: 16,
            sweep_seed: crate::hash::INIT_STATE,
            throughput_samples: throughput::DEFAULT_SAMPLES,
        }
    }
}

/// Reporting sink for harness results
pub trait Reporter {
    /// Hashes of the configured probe strings
    fn probes(&mut self, samples: &[Sample]) -> io::Result<()>;

    fn distribution(&mut self, report: &DistributionReport) -> io::Result<()>;

    fn collisions(&mut self, report: &CollisionReport) -> io::Result<()>;

    fn avalanche(&mut self, report: &AvalancheReport) -> io::Result<()>;

    fn avalanche_sweep(&mut self, summary: &AvalancheSummary) -> io::Result<()>;

    /// An avalanche input that could not be tested; the run carries on
    fn inapplicable(&mut self, err: &avalanche::Error) -> io::Result<()>;

    fn throughput(&mut self, report: &ThroughputReport) -> io::Result<()>;
}

/// Drives the statistical tests for a single hash function
pub struct Harness<F> {
    config: Config,
    hash_fn: F,
}

impl<F> Harness<F>
where
    F: Fn(&str) -> HashValue,
{
    pub fn new(config: Config, hash_fn: F) -> Self {
        Self { config, hash_fn }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Run probes, distribution, collision, avalanche and throughput tests in order
    pub fn run<R: Reporter>(&self, reporter: &mut R) -> Result<(), Error> {
        let cfg = &self.config;
        let hash_fn = &self.hash_fn;
        tracing::info!(prefix = cfg.prefix.as_str(), "starting hash harness");

        let probes: Vec<Sample> = cfg
            .probes
            .iter()
            .map(|p| Sample::new(p.clone(), hash_fn))
            .collect();
        reporter.probes(&probes)?;

        tracing::info!(samples = cfg.distribution_samples, "running distribution test");
        let report = distribution::collect(hash_fn, &cfg.prefix, cfg.distribution_samples)?;
        reporter.distribution(&report)?;

        tracing::info!(samples = cfg.collision_samples, "running collision test");
        let report = collision::collect(hash_fn, &cfg.prefix, cfg.collision_samples);
        reporter.collisions(&report)?;

        tracing::info!(input = cfg.avalanche_input.as_str(), "running avalanche test");
        match avalanche::collect(hash_fn, &cfg.avalanche_input) {
            Ok(report) => reporter.avalanche(&report)?,
            Err(e) => {
                tracing::warn!(error = %e, "avalanche test skipped");
                reporter.inapplicable(&e)?;
            }
        }

        if cfg.sweep_trials > 0 {
            let mut rng = StdRng::seed_from_u64(cfg.sweep_seed);
            match avalanche::sweep(hash_fn, &mut rng, cfg.sweep_len, cfg.sweep_trials) {
                Ok(summary) => reporter.avalanche_sweep(&summary)?,
                Err(e) => {
                    tracing::warn!(error = %e, "avalanche sweep skipped");
                    reporter.inapplicable(&e)?;
                }
            }
        }

        tracing::info!(samples = cfg.throughput_samples, "running throughput test");
        let report = throughput::collect(hash_fn, &cfg.prefix, cfg.throughput_samples);
        reporter.throughput(&report)?;

        tracing::info!("hash harness finished");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hash::djb2_xor;

    #[derive(Default)]
    struct Recorder {
        events: Vec<&'static str>,
        skipped: Vec<avalanche::Error>,
    }

    impl Reporter for Recorder {
        fn probes(&mut self, _: &[Sample]) -> io::Result<()> {
            self.events.push("probes");
            Ok(())
        }

        fn distribution(&mut self, _: &DistributionReport) -> io::Result<()> {
            self.events.push("distribution");
            Ok(())
        }

        fn collisions(&mut self, _: &CollisionReport) -> io::Result<()> {
            self.events.push("collisions");
            Ok(())
        }

        fn avalanche(&mut self, _: &AvalancheReport) -> io::Result<()> {
            self.events.push("avalanche");
            Ok(())
        }

        fn avalanche_sweep(&mut self, _: &AvalancheSummary) -> io::Result<()> {
            self.events.push("sweep");
            Ok(())
        }

        fn inapplicable(&mut self, err: &avalanche::Error) -> io::Result<()> {
            self.events.push("inapplicable");
            self.skipped.push(*err);
            Ok(())
        }

        fn throughput(&mut self, _: &ThroughputReport) -> io::Result<()> {
            self.events.push("throughput");
            Ok(())
        }
    }

    fn small_config() -> Config {
        Config {
            distribution_samples: 100,
            collision_samples: 100,
            sweep_trials: 10,
            throughput_samples: 100,
            ..Config::default()
        }
    }

    #[test]
    fn check_defaults() {
        let cfg = Config::default();
        assert_eq!(cfg.probes, ["hello", "world", "Hello", "hash", "function"]);
        assert_eq!(cfg.prefix, "string_");
        assert_eq!(cfg.distribution_samples, 10_000);
        assert_eq!(cfg.collision_samples, 10_000);
        assert_eq!(cfg.avalanche_input, "hello");
        assert_eq!(cfg.throughput_samples, 100_000);
    }

    #[test]
    fn check_run_order() {
        let mut rec = Recorder::default();
        Harness::new(small_config(), djb2_xor).run(&mut rec).unwrap();
        assert_eq!(
            rec.events,
            ["probes", "distribution", "collisions", "avalanche", "sweep", "throughput"]
        );
    }

    #[test]
    fn check_inapplicable_avalanche_continues() {
        let cfg = Config {
            avalanche_input: "x".into(),
            sweep_trials: 0,
            ..small_config()
        };
        let mut rec = Recorder::default();
        Harness::new(cfg, djb2_xor).run(&mut rec).unwrap();
        assert_eq!(
            rec.events,
            ["probes", "distribution", "collisions", "inapplicable", "throughput"]
        );
        assert_eq!(rec.skipped, [avalanche::Error::TooShort(1)]);
    }

    #[test]
    fn check_zero_distribution_samples() {
        let cfg = Config {
            distribution_samples: 0,
            ..small_config()
        };
        let mut rec = Recorder::default();
        let err = Harness::new(cfg, djb2_xor).run(&mut rec).unwrap_err();
        assert!(matches!(
            err,
            Error::Distribution(distribution::Error::ZeroSamples)
        ));
        assert_eq!(rec.events, ["probes"]);
    }
}
