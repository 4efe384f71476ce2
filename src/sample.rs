use alloc::string::String;
use core::fmt::Write;
use core::ops::Range;

use crate::hash::HashValue;

/// Default label prefix for generated inputs
pub const DEFAULT_PREFIX: &str = "string_";

/// An input string together with its hash
#[derive(Clone, Debug, PartialEq)]
pub struct Sample {
    pub input: String,
    pub hash: HashValue,
}

impl Sample {
    /// Hash `input` with the given function
    pub fn new<F>(input: String, hash_fn: F) -> Self
    where
        F: Fn(&str) -> HashValue,
    {
        let hash = hash_fn(&input);
        Self { input, hash }
    }
}

/// Deterministic label generator: `prefix` followed by the decimal index
pub struct Labels<'a> {
    prefix: &'a str,
    range: Range<usize>,
}

impl<'a> Iterator for Labels<'a> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let i = self.range.next()?;
        let mut label = String::with_capacity(self.prefix.len() + 20);
        label.push_str(self.prefix);
        // writing into a String cannot fail
        let _ = write!(label, "{}", i);
        Some(label)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.range.size_hint()
    }
}

impl<'a> ExactSizeIterator for Labels<'a> {}

/// Generate `count` labels `prefix0`, `prefix1`, ..., `prefix{count - 1}`
pub fn labels(prefix: &str, count: usize) -> Labels<'_> {
    Labels {
        prefix,
        range: 0..count,
    }
}
