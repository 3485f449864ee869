//! Levenshtein (edit) distance implementation
//!
//! Counts the minimum number of insertions, deletions and substitutions needed
//! to turn one sequence into the other.
//!
//! # Complexity
//! - Time: O(m*n) where m and n are the sequence lengths
//! - Space: O(min(m,n)), two rolling rows with the shorter sequence on the column axis

use super::EditDistance;
use crate::distance::Distance;
use smallvec::{smallvec, SmallVec};

/// Row buffer; rows up to 64 cells stay on the stack.
type Row = SmallVec<[usize; 64]>;

/// Split a pair into (rows, columns) so that the columns are the shorter side.
#[inline]
fn orient<'s, T>(a: &'s [T], b: &'s [T]) -> (&'s [T], &'s [T]) {
    if a.len() < b.len() {
        (b, a)
    } else {
        (a, b)
    }
}

/// Two-row DP over the full (|a|+1) x (|b|+1) grid.
fn dp_distance<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    let (source, target) = orient(a, b);
    let n = target.len();

    if n == 0 {
        return source.len();
    }

    let mut prev: Row = (0..=n).collect();
    let mut curr: Row = smallvec![0; n + 1];

    for (i, s) in source.iter().enumerate() {
        curr[0] = i + 1;

        for (j, t) in target.iter().enumerate() {
            let cost = usize::from(s != t);
            curr[j + 1] = (prev[j + 1] + 1) // deletion
                .min(curr[j] + 1) // insertion
                .min(prev[j] + cost); // substitution
        }

        std::mem::swap(&mut prev, &mut curr);
    }

    prev[n]
}

/// Compute the Levenshtein distance between two sequences.
///
/// Any element type with equality works: characters, bytes, tokens.
///
/// # Example
/// ```
/// use editdist::levenshtein;
///
/// let a: Vec<char> = "Saturday".chars().collect();
/// let b: Vec<char> = "Sunday".chars().collect();
/// assert_eq!(levenshtein(&a, &b).distance(), 3);
///
/// let words = ["the", "quick", "fox"];
/// let other = ["the", "slow", "brown", "fox"];
/// assert_eq!(levenshtein(&words, &other).distance(), 2);
/// ```
#[must_use]
pub fn levenshtein<'a, T: PartialEq + Clone>(lhs: &'a [T], rhs: &'a [T]) -> Distance<'a, T> {
    Distance::new(dp_distance(lhs, rhs), lhs, rhs)
}

/// Levenshtein distance over the `char`s of two strings.
#[must_use]
pub fn levenshtein_str(a: &str, b: &str) -> Distance<'static, char> {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let distance = dp_distance(&a, &b);
    Distance::new(distance, a, b)
}

/// Compute Levenshtein distance with optional max threshold.
///
/// Returns `None` as soon as the distance is known to exceed `max_distance`.
/// Returns `Some(distance)` if distance is within threshold or no threshold set.
///
/// # Example
/// ```
/// use editdist::levenshtein_bounded;
///
/// let a: Vec<char> = "kitten".chars().collect();
/// let b: Vec<char> = "sitting".chars().collect();
/// assert_eq!(levenshtein_bounded(&a, &b, None), Some(3));
/// assert_eq!(levenshtein_bounded(&a, &b, Some(3)), Some(3));
/// assert_eq!(levenshtein_bounded(&a, &b, Some(2)), None);
/// ```
#[must_use]
pub fn levenshtein_bounded<T: PartialEq>(
    lhs: &[T],
    rhs: &[T],
    max_distance: Option<usize>,
) -> Option<usize> {
    let Some(max_d) = max_distance else {
        return Some(dp_distance(lhs, rhs));
    };

    // The distance is at least the length difference
    if lhs.len().abs_diff(rhs.len()) > max_d {
        return None;
    }

    let (source, target) = orient(lhs, rhs);
    let n = target.len();

    let mut prev: Row = (0..=n).collect();
    let mut curr: Row = smallvec![0; n + 1];

    for (i, s) in source.iter().enumerate() {
        curr[0] = i + 1;
        let mut row_min = curr[0];

        for (j, t) in target.iter().enumerate() {
            let cost = usize::from(s != t);
            let cell = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
            curr[j + 1] = cell;
            row_min = row_min.min(cell);
        }

        // Row minima never decrease
        if row_min > max_d {
            return None;
        }

        std::mem::swap(&mut prev, &mut curr);
    }

    let result = prev[n];
    (result <= max_d).then_some(result)
}

/// Levenshtein distance calculator with optional early termination
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Levenshtein {
    /// Maximum distance to compute (for early termination)
    pub max_distance: Option<usize>,
}

impl Levenshtein {
    #[must_use]
    pub fn new() -> Self {
        Self { max_distance: None }
    }

    #[must_use]
    pub fn with_max_distance(max_distance: usize) -> Self {
        Self {
            max_distance: Some(max_distance),
        }
    }

    /// Returns `None` if the distance exceeds `max_distance`.
    #[must_use]
    pub fn compute(&self, a: &str, b: &str) -> Option<usize> {
        let a_chars: SmallVec<[char; 64]> = a.chars().collect();
        let b_chars: SmallVec<[char; 64]> = b.chars().collect();
        levenshtein_bounded(&a_chars, &b_chars, self.max_distance)
    }
}

impl EditDistance for Levenshtein {
    fn distance(&self, a: &str, b: &str) -> usize {
        // An exceeded bound reports max_distance + 1
        match self.max_distance {
            Some(max_d) => self.compute(a, b).unwrap_or(max_d.saturating_add(1)),
            None => levenshtein_str(a, b).distance(),
        }
    }

    fn name(&self) -> &'static str {
        "levenshtein"
    }
}
