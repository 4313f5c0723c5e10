//! Error types for clustering operations.
//!
//! Degenerate metric inputs are not errors: the scorers return `0.0` for
//! those. Everything here is raised at an entry point before any work starts.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ClusterError {
    /// The requested cluster count is outside the allowed range or exceeds
    /// the number of points.
    #[error("invalid cluster count k={k}: must be within [{min}, {max}]")]
    InvalidClusterCount { k: usize, min: usize, max: usize },

    #[error("invalid k range [{min}, {max}]: need 1 <= min <= max")]
    InvalidRange { min: usize, max: usize },

    #[error("invalid parameter {name}: {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    /// Feature vectors of different lengths were mixed.
    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("scaler not fitted, call fit() first")]
    NotFitted,
}

pub type Result<T> = std::result::Result<T, ClusterError>;
