use core::hint::black_box;
use std::time::{Duration, Instant};

use crate::hash::HashValue;
use crate::sample::labels;

/// Default number of hashes timed by the throughput test
pub const DEFAULT_SAMPLES: usize = 100_000;

/// Wall-clock time spent hashing a batch of generated inputs
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ThroughputReport {
    pub elapsed: Duration,
    pub samples: u64,
}

impl ThroughputReport {
    /// Hashes per second over the timed batch
    pub fn hashes_per_sec(&self) -> f64 {
        if self.samples == 0 {
            return 0.0;
        }
        let secs = self.elapsed.as_secs_f64();
        if secs == 0.0 {
            f64::INFINITY
        } else {
            self.samples as f64 / secs
        }
    }
}

/// Time `hash_fn` over `m` inputs `prefix + i`
///
/// Label generation falls inside the timed loop.
pub fn collect<F>(hash_fn: F, prefix: &str, m: usize) -> ThroughputReport
where
    F: Fn(&str) -> HashValue,
{
    let start = Instant::now();
    for input in labels(prefix, m) {
        black_box(hash_fn(black_box(input.as_str())));
    }
    let elapsed = start.elapsed();

    tracing::debug!(
        samples = m,
        elapsed_us = elapsed.as_micros() as u64,
        "throughput collected"
    );

    ThroughputReport {
        elapsed,
        samples: m as u64,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hash::djb2_xor;

    #[test]
    fn check_sample_count_is_stable() {
        let first = collect(djb2_xor, "string_", 10_000);
        let second = collect(djb2_xor, "string_", 10_000);
        assert_eq!(first.samples, 10_000);
        assert_eq!(second.samples, 10_000);
        assert!(first.hashes_per_sec() > 0.0);
    }

    #[test]
    fn check_hashes_per_sec() {
        let report = ThroughputReport {
            elapsed: Duration::from_millis(500),
            samples: 1000,
        };
        assert_eq!(report.hashes_per_sec(), 2000.0);

        let empty = collect(djb2_xor, "string_", 0);
        assert_eq!(empty.samples, 0);
        assert_eq!(empty.hashes_per_sec(), 0.0);

        let instant = ThroughputReport {
            elapsed: Duration::from_secs(0),
            samples: 1,
        };
        assert!(instant.hashes_per_sec().is_infinite());
    }
}
