#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]
#![warn(clippy::missing_docs_in_private_items)]
#![warn(clippy::panic)]
#![warn(clippy::arithmetic_side_effects)]
#![forbid(unsafe_code)]
#![warn(clippy::missing_const_for_fn, clippy::approx_constant, clippy::all)]

//! # Kdpoint: Point Primitives for k-d Tree Construction
//!
//! `kdpoint` supplies the geometric data model under a k-d spatial index:
//! - An N-dimensional [`Datapoint`] carrying a typed, opaque payload
//! - [`PointSet`], the ordered collection sorting and building operate on
//! - Exact equality and Euclidean [`distance`]/[`distance_sq`] metrics
//! - Runtime-parameterized axis ordering ([`AxisOrder`]) with an in-place
//!   unstable [`sort_points`]
//! - A conversion pipeline ([`ToDatapoint`], [`FromDatapoint`],
//!   [`convert_batch`]) that turns batches of domain objects into
//!   validated point sets and hands them to an external [`TreeBuilder`]
//!
//! Tree construction and query algorithms themselves live outside this
//! crate, behind the [`TreeBuilder`] seam.

pub mod core;

// Re-export key types for easier use by library consumers
pub use crate::core::common::KdPointError;
pub use crate::core::convert::{
    convert_batch, convert_points, FromDatapoint, ToDatapoint, TreeBuilder,
};
pub use crate::core::metric::{distance, distance_sq};
pub use crate::core::order::{sort_points, AxisOrder, PointOrder};
pub use crate::core::point::{Datapoint, PointSet, Projection};

/// Core result type for the library
pub type Result<T> = std::result::Result<T, KdPointError>;
