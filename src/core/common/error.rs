// src/core/common/error.rs

use std::fmt;

/// Error type shared by every fallible operation in the crate.
///
/// All variants describe local, detectable precondition failures. None of
/// them is transient or retryable: the caller is expected to fix the input
/// or the call site rather than retry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KdPointError {
    /// Two points (or the members of one batch) do not share a
    /// dimensionality. Exact-equality checks are exempt by contract: they
    /// return `false` on mismatch instead of raising this.
    DimensionMismatch { expected: usize, found: usize },
    /// An operation that needs at least one point received none.
    EmptyInput(String),
    /// The requested path exists in the API surface but has no
    /// implementation (currently only datapoint decoding).
    NotImplemented { feature: String },
    /// An axis index is not valid for the points being ordered.
    AxisOutOfBounds { axis: usize, dims: usize },
}

impl fmt::Display for KdPointError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DimensionMismatch { expected, found } => {
                write!(f, "Dimension mismatch: expected {}, found {}", expected, found)
            }
            Self::EmptyInput(msg) => write!(f, "Empty input: {}", msg),
            Self::NotImplemented { feature } => {
                write!(f, "Feature not implemented: {}", feature)
            }
            Self::AxisOutOfBounds { axis, dims } => {
                write!(f, "Axis {} out of bounds for dimensionality {}", axis, dims)
            }
        }
    }
}

impl std::error::Error for KdPointError {}
