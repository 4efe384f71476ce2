use hashbrown::HashSet;

use crate::hash::HashValue;
use crate::sample::labels;

/// Full-width hash collisions over a generated sample set
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CollisionReport {
    pub collisions: u64,
    pub samples: u64,
}

impl CollisionReport {
    /// Fraction of samples whose hash was already seen
    pub fn rate(&self) -> f64 {
        if self.samples == 0 {
            0.0
        } else {
            self.collisions as f64 / self.samples as f64
        }
    }
}

/// Count samples whose hash exactly duplicates an earlier sample's hash
///
/// Inputs are `prefix + i` for `i` in `0..n`, processed in order.
pub fn collect<F>(hash_fn: F, prefix: &str, n: usize) -> CollisionReport
where
    F: Fn(&str) -> HashValue,
{
    let mut seen: HashSet<HashValue> = HashSet::with_capacity(n);
    let mut collisions = 0_u64;

    for input in labels(prefix, n) {
        // insert returns false when the value was already present
        if !seen.insert(hash_fn(&input)) {
            collisions += 1;
        }
    }

    tracing::debug!(collisions, samples = n, "collisions collected");

    CollisionReport {
        collisions,
        samples: n as u64,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hash::djb2_xor;

    #[test]
    fn check_no_collisions_reference_set() {
        let report = collect(djb2_xor, "string_", 10_000);
        assert_eq!(report.collisions, 0);
        assert_eq!(report.samples, 10_000);
        assert_eq!(report.rate(), 0.0);

        // same inputs, same answer
        assert_eq!(collect(djb2_xor, "string_", 10_000), report);
    }

    #[test]
    fn check_counts_duplicates() {
        // maps the ten inputs onto four values
        let report = collect(|s| djb2_xor(s) % 4, "k", 10);
        assert_eq!(report.collisions, 6);
        assert_eq!(report.rate(), 0.6);

        let constant = collect(|_| 7, "k", 25);
        assert_eq!(constant.collisions, 24);
        assert!(constant.collisions <= constant.samples - 1);
    }

    #[test]
    fn check_zero_samples() {
        let report = collect(djb2_xor, "string_", 0);
        assert_eq!(report, CollisionReport { collisions: 0, samples: 0 });
        assert_eq!(report.rate(), 0.0);
    }
}
