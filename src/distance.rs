//! Distance result wrapper
//!
//! Every algorithm returns a [`Distance`]: the raw edit count together with the
//! two sequences it was computed from, so that derived measures such as
//! [`Distance::ratio`] need no recomputation.

use std::borrow::Cow;
use std::fmt;

/// A numeric distance bundled with the sequences it was measured between.
///
/// Results built from slices borrow their inputs; results built from `&str`
/// entry points own the collected `char`s. Use [`Distance::into_owned`] to
/// detach a borrowed result.
///
/// A `Distance` compares equal to a `usize` holding the same count:
///
/// ```
/// use editdist::levenshtein_str;
///
/// let d = levenshtein_str("kitten", "sitting");
/// assert_eq!(d, 3);
/// assert_eq!(d.to_string(), "3");
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Distance<'a, T: Clone> {
    distance: usize,
    lhs: Cow<'a, [T]>,
    rhs: Cow<'a, [T]>,
}

impl<'a, T: Clone> Distance<'a, T> {
    /// Wrap a computed distance with the sequences it was measured between.
    #[must_use]
    pub fn new(
        distance: usize,
        lhs: impl Into<Cow<'a, [T]>>,
        rhs: impl Into<Cow<'a, [T]>>,
    ) -> Self {
        Self {
            distance,
            lhs: lhs.into(),
            rhs: rhs.into(),
        }
    }

    /// Number of edits separating the two sequences
    #[inline]
    #[must_use]
    pub fn distance(&self) -> usize {
        self.distance
    }

    /// Left-hand input sequence
    #[inline]
    #[must_use]
    pub fn lhs(&self) -> &[T] {
        &self.lhs
    }

    /// Right-hand input sequence
    #[inline]
    #[must_use]
    pub fn rhs(&self) -> &[T] {
        &self.rhs
    }

    /// Length-normalized distance in `[0.0, 1.0]`.
    ///
    /// Computed as `2.0 * D / L` where `D` is the distance and `L` the combined
    /// length of both sequences. `0.0` means identical. The value is capped at
    /// `1.0`, which is reached when nothing is shared between the sequences
    /// (for example one of them is empty). Two empty sequences are identical
    /// and yield `0.0`.
    ///
    /// The ratio depends on the algorithm that produced the distance.
    ///
    /// ```
    /// use editdist::hamming_str;
    ///
    /// let d = hamming_str("toned", "roses").unwrap();
    /// assert!((d.ratio() - 0.6).abs() < 1e-12);
    /// ```
    #[must_use]
    pub fn ratio(&self) -> f64 {
        ratio(self.distance, self.lhs.len(), self.rhs.len())
    }

    /// Detach the result from the borrowed input sequences.
    #[must_use]
    pub fn into_owned(self) -> Distance<'static, T> {
        Distance {
            distance: self.distance,
            lhs: Cow::Owned(self.lhs.into_owned()),
            rhs: Cow::Owned(self.rhs.into_owned()),
        }
    }
}

/// `2.0 * distance / (lhs_len + rhs_len)`, capped at `1.0`; `0.0` when both are empty.
#[inline]
pub(crate) fn ratio(distance: usize, lhs_len: usize, rhs_len: usize) -> f64 {
    let total = lhs_len + rhs_len;
    if total == 0 {
        return 0.0;
    }
    (2.0 * distance as f64 / total as f64).min(1.0)
}

impl<T: Clone> fmt::Display for Distance<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.distance)
    }
}

impl<T: Clone> PartialEq<usize> for Distance<'_, T> {
    fn eq(&self, other: &usize) -> bool {
        self.distance == *other
    }
}

impl<T: Clone> From<Distance<'_, T>> for usize {
    fn from(d: Distance<'_, T>) -> usize {
        d.distance
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ratio_identical() {
        let a = ['a', 'b', 'c'];
        let d = Distance::new(0, &a[..], &a[..]);
        assert_eq!(d.ratio(), 0.0);
    }

    #[test]
    fn test_ratio_both_empty() {
        let empty: [u8; 0] = [];
        let d = Distance::new(0, &empty[..], &empty[..]);
        assert_eq!(d.ratio(), 0.0);
    }

    #[test]
    fn test_ratio_against_empty_is_capped() {
        let a = [1u8, 2, 3];
        let empty: [u8; 0] = [];
        let d = Distance::new(3, &a[..], &empty[..]);
        assert_eq!(d.ratio(), 1.0);
    }

    #[test]
    fn test_ratio_half() {
        let a: Vec<char> = "abcd".chars().collect();
        let b: Vec<char> = "abxy".chars().collect();
        let d = Distance::new(2, a, b);
        assert!((d.ratio() - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_display_and_conversion() {
        let a = [1, 2];
        let b = [2, 1];
        let d = Distance::new(2, &a[..], &b[..]);
        assert_eq!(format!("{}", d), "2");
        assert_eq!(d.lhs(), &[1, 2]);
        assert_eq!(d.rhs(), &[2, 1]);
        let n: usize = d.into();
        assert_eq!(n, 2);
    }

    #[test]
    fn test_into_owned_outlives_input() {
        let owned = {
            let a = vec!["x".to_string(), "y".to_string()];
            let b = vec!["y".to_string()];
            Distance::new(1, &a[..], &b[..]).into_owned()
        };
        assert_eq!(owned.distance(), 1);
        assert_eq!(owned.lhs().len(), 2);
    }
}
