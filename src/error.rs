//! Error types for distance computations.

use thiserror::Error;

/// Errors returned by distance functions that have preconditions on their input.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DistanceError {
    /// Hamming distance is only defined for sequences of equal length
    #[error("Cannot compute Hamming distance for sequences of different lengths: lhs={lhs}, rhs={rhs}")]
    LengthMismatch { lhs: usize, rhs: usize },
}

/// Result alias used throughout the crate.
pub type Result<T, E = DistanceError> = std::result::Result<T, E>;
