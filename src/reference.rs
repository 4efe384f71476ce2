use num::bigint::BigUint;
use num::ToPrimitive;

use crate::hash::{HashValue, INIT_STATE};

/// Hash a string with unbounded-precision djb2-xor
///
/// The accumulator never wraps, so long inputs grow roughly five bits per character.
pub fn djb2_xor_unbounded(s: &str) -> BigUint {
    let mut h = BigUint::from(INIT_STATE);
    for c in s.chars() {
        h = ((&h << 5usize) + &h) ^ BigUint::from(c as u32);
    }
    h
}

/// Reduce an unbounded hash modulo 2^64
pub fn truncate(h: &BigUint) -> HashValue {
    let mask = BigUint::from(HashValue::MAX);
    // masked value always fits
    (h & &mask).to_u64().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hash::djb2_xor;
    use alloc::format;

    #[test]
    fn check_unbounded_matches_short_inputs() {
        for s in ["", "a", "hello", "world", "Hello", "hash", "function"].iter() {
            assert_eq!(djb2_xor_unbounded(s), BigUint::from(djb2_xor(s)));
            assert!(djb2_xor_unbounded(s).bits() <= 64);
        }
    }

    #[test]
    fn check_unbounded_growth() {
        let h = djb2_xor_unbounded("string_9999");
        assert_eq!(h.to_str_radix(10), "272045713467526171759");
        assert_eq!(h.bits(), 68);
        assert_eq!(truncate(&h), djb2_xor("string_9999"));
    }

    #[test]
    fn check_truncate_agrees_with_wrapping() {
        for i in 0..2000 {
            let s = format!("string_{}", i);
            assert_eq!(truncate(&djb2_xor_unbounded(&s)), djb2_xor(&s));
        }
    }
}
