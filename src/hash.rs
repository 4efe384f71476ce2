/// Output of the djb2-xor hash function
///
/// The accumulator is 64 bits wide and wraps modulo 2^64 on overflow.
pub type HashValue = u64;

/// Width of a [HashValue] in bits
pub const HASH_BITS: u32 = HashValue::BITS;

/// Initial accumulator state (the classic djb2 seed)
pub const INIT_STATE: HashValue = 5381;

/// Left-shift applied to the accumulator each round (`h << 5 + h == h * 33`)
const SHIFT: u32 = 5;

/// Mix a single Unicode scalar value into the accumulator
#[inline(always)]
pub fn mix(h: HashValue, c: char) -> HashValue {
    (h << SHIFT).wrapping_add(h) ^ c as HashValue
}

/// Hash a string with the djb2-xor function
///
/// The empty string hashes to [INIT_STATE].
pub fn djb2_xor(s: &str) -> HashValue {
    s.chars().fold(INIT_STATE, mix)
}

/// Streaming djb2-xor state
///
/// Feeding a string in several pieces gives the same digest as hashing
/// the concatenation in one call.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Djb2Xor {
    h: HashValue,
    total_len: u64,
}

impl Djb2Xor {
    /// Create a new Djb2Xor instance
    pub fn new() -> Self {
        Self {
            h: INIT_STATE,
            total_len: 0,
        }
    }

    /// Resume hashing from a previously observed state
    pub fn from_state(state: HashValue) -> Self {
        Self {
            h: state,
            total_len: 0,
        }
    }

    /// Provide input to Djb2Xor
    pub fn input(&mut self, msg: &str) {
        for c in msg.chars() {
            self.h = mix(self.h, c);
            self.total_len += 1;
        }
    }

    /// Get the current internal state
    pub fn state(&self) -> HashValue {
        self.h
    }

    /// Number of characters absorbed since the last reset
    pub fn total_len(&self) -> u64 {
        self.total_len
    }

    /// Finalize the digest, resetting the state for reuse
    pub fn finalize(&mut self) -> HashValue {
        let res = self.h;
        self.h = INIT_STATE;
        self.total_len = 0;
        res
    }

    /// Convenience function to calculate a Djb2Xor digest
    pub fn digest(msg: &str) -> HashValue {
        let mut hash = Self::new();
        hash.input(msg);
        hash.finalize()
    }
}

impl Default for Djb2Xor {
    fn default() -> Self {
        Self::new()
    }
}
