//! editdist - Edit distances between ordered sequences
//!
//! Levenshtein, Damerau-Levenshtein and Hamming distances over any slice of
//! equality-comparable elements: characters, bytes, tokens.
//!
//! # Features
//! - Generic over the element type, with `&str` entry points comparing `char`s
//! - Results carry both inputs and derive a length-normalized [`Distance::ratio`]
//! - Unrestricted and restricted (OSA) Damerau-Levenshtein
//! - Calculator structs behind the [`EditDistance`] and [`FallibleEditDistance`] traits
//! - Optional `serde` feature serializing [`Distance`]
//!
//! # Example
//! ```
//! use editdist::{damerau_levenshtein_str, hamming_str, levenshtein_str, DistanceError};
//!
//! assert_eq!(levenshtein_str("kitten", "sitting").distance(), 3);
//! assert_eq!(damerau_levenshtein_str("CA", "ABC").distance(), 2);
//! assert_eq!(hamming_str("toned", "roses").unwrap().distance(), 3);
//!
//! let err = hamming_str("abc", "ab").unwrap_err();
//! assert_eq!(err, DistanceError::LengthMismatch { lhs: 3, rhs: 2 });
//!
//! assert_eq!(levenshtein_str("same", "same").ratio(), 0.0);
//! ```

pub mod algorithms;
pub mod distance;
pub mod error;

pub use algorithms::{
    damerau_levenshtein, damerau_levenshtein_str, hamming, hamming_str, levenshtein,
    levenshtein_bounded, levenshtein_str, optimal_string_alignment, optimal_string_alignment_str,
    DamerauLevenshtein, EditDistance, FallibleEditDistance, Hamming, Levenshtein, Variant,
};
pub use distance::Distance;
pub use error::{DistanceError, Result};
