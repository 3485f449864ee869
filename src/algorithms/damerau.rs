//! Damerau-Levenshtein distance implementation
//!
//! Extends Levenshtein with transposition of two adjacent elements, counted
//! as a single edit. Particularly useful for typo detection where letter swaps
//! are common.
//!
//! Two variants are provided:
//!
//! - [`damerau_levenshtein`]: the unrestricted distance. A transposed pair may
//!   be edited again, so `"CA"` to `"ABC"` costs 2 (`CA -> AC -> ABC`).
//! - [`optimal_string_alignment`]: the restricted variant (OSA), where no
//!   substring is edited more than once. `"CA"` to `"ABC"` costs 3.
//!
//! For every pair, `damerau_levenshtein <= optimal_string_alignment <= levenshtein`.
//!
//! # Complexity
//! - Time: O(m*n) where m and n are the sequence lengths
//! - Space: O(m*n), the transposition lookback needs the full matrix

use super::EditDistance;
use crate::distance::Distance;
use ahash::AHashMap;
use std::hash::Hash;

/// Unrestricted Damerau-Levenshtein over a flat (m+2) x (n+2) matrix.
///
/// Row and column 0 hold a sentinel larger than any reachable distance;
/// row and column 1 hold the distances from the empty prefix.
fn unrestricted_distance<T: Eq + Hash>(a: &[T], b: &[T]) -> usize {
    let m = a.len();
    let n = b.len();

    if m == 0 {
        return n;
    }
    if n == 0 {
        return m;
    }

    let max_dist = m + n;
    let width = n + 2;
    let at = |i: usize, j: usize| i * width + j;

    let mut d = vec![0usize; (m + 2) * width];
    d[at(0, 0)] = max_dist;
    for i in 0..=m {
        d[at(i + 1, 0)] = max_dist;
        d[at(i + 1, 1)] = i;
    }
    for j in 0..=n {
        d[at(0, j + 1)] = max_dist;
        d[at(1, j + 1)] = j;
    }

    // Last row of `a` in which each element was seen
    let mut last_row: AHashMap<&T, usize> = AHashMap::with_capacity(m.min(64));

    for i in 1..=m {
        // Last column of `b` in this row that matched a[i - 1]
        let mut last_match_col = 0usize;

        for j in 1..=n {
            let i1 = last_row.get(&b[j - 1]).copied().unwrap_or(0);
            let j1 = last_match_col;

            let cost = if a[i - 1] == b[j - 1] {
                last_match_col = j;
                0
            } else {
                1
            };

            d[at(i + 1, j + 1)] = (d[at(i, j)] + cost) // substitution
                .min(d[at(i + 1, j)] + 1) // insertion
                .min(d[at(i, j + 1)] + 1) // deletion
                .min(d[at(i1, j1)] + (i - i1 - 1) + 1 + (j - j1 - 1)); // transposition
        }

        last_row.insert(&a[i - 1], i);
    }

    d[at(m + 1, n + 1)]
}

/// Optimal string alignment over a flat (|rhs|+1) x (|lhs|+1) matrix.
fn restricted_distance<T: PartialEq>(lhs: &[T], rhs: &[T]) -> usize {
    let rows = rhs.len() + 1;
    let width = lhs.len() + 1;
    let at = |i: usize, j: usize| i * width + j;

    let mut d = vec![0usize; rows * width];
    for i in 0..rows {
        d[at(i, 0)] = i;
    }
    for j in 0..width {
        d[at(0, j)] = j;
    }

    for i in 1..rows {
        for j in 1..width {
            let cost = usize::from(rhs[i - 1] != lhs[j - 1]);
            let mut cell = (d[at(i, j - 1)] + 1) // insertion
                .min(d[at(i - 1, j)] + 1) // deletion
                .min(d[at(i - 1, j - 1)] + cost); // substitution

            if i >= 2 && j >= 2 && rhs[i - 1] == lhs[j - 2] && rhs[i - 2] == lhs[j - 1] {
                cell = cell.min(d[at(i - 2, j - 2)] + 1);
            }

            d[at(i, j)] = cell;
        }
    }

    d[rows * width - 1]
}

/// Compute the (unrestricted) Damerau-Levenshtein distance between two sequences.
///
/// # Complexity
/// - Time: O(m*n)
/// - Space: O(m*n). The full (m+2) x (n+2) matrix is allocated up front with no
///   length limit, so two inputs of 10,000 elements need roughly 800 MB on a
///   64-bit target. Use [`levenshtein_bounded`](super::levenshtein_bounded) to
///   screen long inputs first.
///
/// # Example
/// ```
/// use editdist::{damerau_levenshtein, damerau_levenshtein_str};
///
/// assert_eq!(damerau_levenshtein_str("CA", "ABC").distance(), 2);
/// assert_eq!(damerau_levenshtein_str("CABBAGE", "EABBAGC").distance(), 2);
///
/// let a = [3, 1, 2];
/// let b = [1, 3, 2];
/// assert_eq!(damerau_levenshtein(&a, &b).distance(), 1);
/// ```
#[must_use]
pub fn damerau_levenshtein<'a, T: Eq + Hash + Clone>(
    lhs: &'a [T],
    rhs: &'a [T],
) -> Distance<'a, T> {
    Distance::new(unrestricted_distance(lhs, rhs), lhs, rhs)
}

/// Damerau-Levenshtein distance over the `char`s of two strings.
#[must_use]
pub fn damerau_levenshtein_str(a: &str, b: &str) -> Distance<'static, char> {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let distance = unrestricted_distance(&a, &b);
    Distance::new(distance, a, b)
}

/// Optimal String Alignment (OSA) distance, the restricted Damerau-Levenshtein.
///
/// Only needs equality on the elements, so it also serves element types that
/// cannot be hashed.
///
/// ```
/// use editdist::optimal_string_alignment_str;
///
/// assert_eq!(optimal_string_alignment_str("CA", "ABC").distance(), 3);
/// assert_eq!(optimal_string_alignment_str("ab", "ba").distance(), 1);
/// ```
#[must_use]
pub fn optimal_string_alignment<'a, T: PartialEq + Clone>(
    lhs: &'a [T],
    rhs: &'a [T],
) -> Distance<'a, T> {
    Distance::new(restricted_distance(lhs, rhs), lhs, rhs)
}

/// OSA distance over the `char`s of two strings.
#[must_use]
pub fn optimal_string_alignment_str(a: &str, b: &str) -> Distance<'static, char> {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let distance = restricted_distance(&a, &b);
    Distance::new(distance, a, b)
}

/// Which Damerau-Levenshtein recurrence a [`DamerauLevenshtein`] uses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Variant {
    /// Transposed pairs may be edited further
    #[default]
    Unrestricted,
    /// Each substring is edited at most once (OSA)
    OptimalStringAlignment,
}

/// Damerau-Levenshtein distance calculator
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DamerauLevenshtein {
    pub variant: Variant,
}

impl DamerauLevenshtein {
    #[must_use]
    pub fn new() -> Self {
        Self {
            variant: Variant::Unrestricted,
        }
    }

    #[must_use]
    pub fn osa() -> Self {
        Self {
            variant: Variant::OptimalStringAlignment,
        }
    }
}

impl EditDistance for DamerauLevenshtein {
    fn distance(&self, a: &str, b: &str) -> usize {
        match self.variant {
            Variant::Unrestricted => damerau_levenshtein_str(a, b).distance(),
            Variant::OptimalStringAlignment => optimal_string_alignment_str(a, b).distance(),
        }
    }

    fn name(&self) -> &'static str {
        match self.variant {
            Variant::Unrestricted => "damerau_levenshtein",
            Variant::OptimalStringAlignment => "optimal_string_alignment",
        }
    }
}
