//! Hamming distance implementation
//!
//! Counts positions where the elements differ. Only defined for sequences of
//! equal length; anything else is reported as
//! [`DistanceError::LengthMismatch`] before any comparison happens.
//!
//! # Complexity
//! - Time: O(n) where n is the sequence length
//! - Space: O(1) beyond the result (`&str` inputs are collected into `char`s)

use super::FallibleEditDistance;
use crate::distance::Distance;
use crate::error::{DistanceError, Result};

#[inline]
fn count_mismatches<T: PartialEq>(lhs: &[T], rhs: &[T]) -> Result<usize> {
    if lhs.len() != rhs.len() {
        return Err(DistanceError::LengthMismatch {
            lhs: lhs.len(),
            rhs: rhs.len(),
        });
    }

    Ok(lhs.iter().zip(rhs).filter(|(l, r)| l != r).count())
}

/// Compute the Hamming distance between two sequences of equal length.
///
/// # Errors
///
/// Returns [`DistanceError::LengthMismatch`] if the lengths differ.
///
/// # Example
/// ```
/// use editdist::{hamming, DistanceError};
///
/// assert_eq!(hamming(b"1011101", b"1001001").unwrap().distance(), 2);
/// assert_eq!(
///     hamming(b"abc", b"ab").unwrap_err(),
///     DistanceError::LengthMismatch { lhs: 3, rhs: 2 }
/// );
/// ```
pub fn hamming<'a, T: PartialEq + Clone>(lhs: &'a [T], rhs: &'a [T]) -> Result<Distance<'a, T>> {
    let distance = count_mismatches(lhs, rhs)?;
    Ok(Distance::new(distance, lhs, rhs))
}

/// Hamming distance over the `char`s of two strings.
///
/// Lengths are compared in `char`s, not bytes.
pub fn hamming_str(a: &str, b: &str) -> Result<Distance<'static, char>> {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let distance = count_mismatches(&a, &b)?;
    Ok(Distance::new(distance, a, b))
}

/// Hamming distance calculator
///
/// Stateless calculator - all instances are equivalent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Hamming;

impl Hamming {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl FallibleEditDistance for Hamming {
    fn distance(&self, a: &str, b: &str) -> Result<usize> {
        hamming_str(a, b).map(|d| d.distance())
    }

    fn name(&self) -> &'static str {
        "hamming"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hamming_basic() {
        assert_eq!(hamming_str("", "").unwrap().distance(), 0);
        assert_eq!(hamming_str("abc", "abc").unwrap().distance(), 0);
        assert_eq!(hamming_str("abc", "axc").unwrap().distance(), 1);
        assert_eq!(hamming_str("karolin", "kathrin").unwrap().distance(), 3);
    }

    #[test]
    fn test_hamming_known_pairs() {
        assert_eq!(hamming_str("toned", "roses").unwrap().distance(), 3);
        assert_eq!(hamming_str("1011101", "1001001").unwrap().distance(), 2);
        assert_eq!(hamming_str("2173896", "2233796").unwrap().distance(), 3);
        assert_eq!(hamming_str("CABBAGE", "EABBAGC").unwrap().distance(), 2);
    }

    #[test]
    fn test_hamming_different_lengths() {
        assert_eq!(
            hamming_str("abc", "ab").unwrap_err(),
            DistanceError::LengthMismatch { lhs: 3, rhs: 2 }
        );
        assert!(hamming_str("", "a").is_err());
        assert!(hamming(&[1, 2, 3], &[1, 2]).is_err());
    }

    #[test]
    fn test_hamming_counts_chars_not_bytes() {
        // 'é' is two bytes but one char
        assert_eq!(hamming_str("café", "cafe").unwrap().distance(), 1);
    }

    #[test]
    fn test_hamming_generic_sequences() {
        let a = [true, false, true, true];
        let b = [true, true, true, false];
        let d = hamming(&a, &b).unwrap();
        assert_eq!(d.distance(), 2);
        assert!((d.ratio() - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_hamming_struct() {
        let h = Hamming::new();
        assert_eq!(h.distance("abc", "xyz"), Ok(3));
        assert_eq!(
            h.distance("abc", "xy"),
            Err(DistanceError::LengthMismatch { lhs: 3, rhs: 2 })
        );
        assert_eq!(h.ratio("abc", "abc"), Ok(0.0));
        assert!(h.ratio("abc", "xy").is_err());
        assert_eq!(h.name(), "hamming");
    }
}
