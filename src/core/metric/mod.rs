// src/core/metric/mod.rs

//! Euclidean distance between datapoints.
//!
//! Both functions are pure and symmetric. The squared variant exists on
//! its own because nearest-neighbor comparisons only need relative order,
//! so the square root can be skipped on the hot path.

use crate::core::common::KdPointError;
use crate::core::point::Datapoint;

/// Computes the squared Euclidean distance between two datapoints.
///
/// This is the sum over every axis of the squared coordinate difference.
/// Two points with identical coordinate vectors are at squared distance
/// exactly `0.0`. Payloads are ignored, so the points may carry different
/// payload types.
///
/// # Errors
///
/// Returns `KdPointError::DimensionMismatch` when the two points do not
/// share a dimensionality. Neither vector is ever silently truncated to
/// the other's length.
pub fn distance_sq<P, Q>(p: &Datapoint<P>, q: &Datapoint<Q>) -> Result<f64, KdPointError> {
    if p.dimensionality() != q.dimensionality() {
        return Err(KdPointError::DimensionMismatch {
            expected: p.dimensionality(),
            found: q.dimensionality(),
        });
    }
    Ok(p.coords()
        .iter()
        .zip(q.coords().iter())
        .map(|(a, b)| (b - a).powi(2))
        .sum())
}

/// Computes the Euclidean distance between two datapoints.
///
/// # Errors
///
/// Returns `KdPointError::DimensionMismatch` when the two points do not
/// share a dimensionality.
pub fn distance<P, Q>(p: &Datapoint<P>, q: &Datapoint<Q>) -> Result<f64, KdPointError> {
    distance_sq(p, q).map(f64::sqrt)
}
