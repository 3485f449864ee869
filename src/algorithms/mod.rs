//! Core edit distance algorithms
//!
//! Each algorithm is implemented as a standalone generic function over slices,
//! plus a `&str` convenience entry point and a calculator struct implementing
//! one of the traits below.

pub mod damerau;
pub mod hamming;
pub mod levenshtein;

pub use damerau::*;
pub use hamming::*;
pub use levenshtein::*;

use crate::distance::ratio;
use crate::error::Result;

/// Trait for edit distance algorithms that accept any pair of strings.
pub trait EditDistance: Send + Sync {
    fn distance(&self, a: &str, b: &str) -> usize;

    /// Length-normalized distance (0.0 identical, 1.0 nothing shared)
    fn ratio(&self, a: &str, b: &str) -> f64 {
        let dist = EditDistance::distance(self, a, b);
        ratio(dist, a.chars().count(), b.chars().count())
    }

    /// Name of the algorithm for debugging/logging
    fn name(&self) -> &'static str;
}

/// Trait for edit distance algorithms with preconditions on their input.
///
/// Hamming distance, for one, is undefined for strings of different lengths.
pub trait FallibleEditDistance: Send + Sync {
    fn distance(&self, a: &str, b: &str) -> Result<usize>;

    /// Length-normalized distance, failing whenever the distance does.
    fn ratio(&self, a: &str, b: &str) -> Result<f64> {
        let dist = FallibleEditDistance::distance(self, a, b)?;
        Ok(ratio(dist, a.chars().count(), b.chars().count()))
    }

    fn name(&self) -> &'static str;
}
