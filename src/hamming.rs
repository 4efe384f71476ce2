use crate::hash::HashValue;

/// Find the hamming distance between two hash values
///
/// Always in the range `0..=HASH_BITS`.
pub fn hamming_distance(left: HashValue, right: HashValue) -> u32 {
    (left ^ right).count_ones()
}
