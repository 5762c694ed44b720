// src/core/point/mod.rs

//! N-dimensional point primitives.
//!
//! A [`Datapoint`] couples a fixed-length coordinate vector with an optional
//! payload of any type, and a [`PointSet`] is the ordered collection of
//! points that sorting and tree construction operate on. Coordinates are
//! immutable after construction; every accessor hands out either a shared
//! view or an independent copy, never a mutable alias into internal storage.

mod projection;
mod random;

pub use projection::Projection;

use std::fmt;
use std::ops::Index;

use crate::core::common::KdPointError;
use crate::core::order::{sort_points, AxisOrder};

/// A point in N-dimensional space with an optional associated payload.
///
/// The coordinate vector is fixed at construction; its length defines the
/// point's dimensionality for the rest of its lifetime. The payload is
/// opaque to every geometric operation in this crate: distance, ordering,
/// and equality all ignore it.
#[derive(Debug, Clone)]
pub struct Datapoint<P> {
    data: Option<P>,
    coords: Vec<f64>,
}

impl<P> Datapoint<P> {
    /// Creates a new datapoint from a payload and a coordinate sequence.
    ///
    /// The coordinates are moved (or copied, for borrowed input) into
    /// storage owned by the new point, so later changes to the caller's
    /// original buffer cannot affect it.
    ///
    /// # Arguments
    ///
    /// * `data` - The payload to associate with this point
    /// * `coords` - The coordinate values, one per spatial dimension
    pub fn new(data: P, coords: impl Into<Vec<f64>>) -> Self {
        Self {
            data: Some(data),
            coords: coords.into(),
        }
    }

    /// Creates a datapoint that carries coordinates but no payload.
    ///
    /// Useful for probe points in distance queries and for generated test
    /// data, where there is no domain object to associate.
    pub fn detached(coords: impl Into<Vec<f64>>) -> Self {
        Self {
            data: None,
            coords: coords.into(),
        }
    }

    /// Returns the number of spatial dimensions this point spans.
    #[must_use]
    pub fn dimensionality(&self) -> usize {
        self.coords.len()
    }

    /// Returns a read-only view of the coordinate sequence.
    ///
    /// The view cannot be used to mutate the point. Use
    /// [`to_coords`](Self::to_coords) when an owned, independent copy is
    /// needed instead.
    #[must_use]
    pub fn coords(&self) -> &[f64] {
        &self.coords
    }

    /// Returns an owned copy of the coordinate sequence.
    ///
    /// The copy is independent of the point's internal storage: mutating
    /// it has no effect on this point or on any later accessor call.
    #[must_use]
    pub fn to_coords(&self) -> Vec<f64> {
        self.coords.clone()
    }

    /// Returns a reference to the associated payload, if one is present.
    #[must_use]
    pub fn data(&self) -> Option<&P> {
        self.data.as_ref()
    }

    /// Compares two points coordinate by coordinate for exact equality.
    ///
    /// Returns `false` immediately when the dimensionalities differ,
    /// regardless of coordinate values. Otherwise every coordinate pair is
    /// compared with exact floating-point equality. There is no epsilon
    /// tolerance: two points a rounding error apart are not equal. This is
    /// identity of representation, not geometric closeness, and a
    /// coordinate of NaN makes a point unequal even to itself.
    ///
    /// Payloads are ignored, so the two points may carry different payload
    /// types.
    #[must_use]
    pub fn eq_exact<Q>(&self, other: &Datapoint<Q>) -> bool {
        if self.coords.len() != other.coords.len() {
            return false;
        }
        self.coords
            .iter()
            .zip(other.coords.iter())
            .all(|(a, b)| a == b)
    }

    /// Returns `true` when every coordinate is finite (not NaN or
    /// infinite).
    ///
    /// Non-finite coordinates are representable but poison exact equality
    /// and distance ordering; callers ingesting untrusted numeric data can
    /// screen with this before indexing.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.coords.iter().all(|c| c.is_finite())
    }
}

impl<P: fmt::Debug> fmt::Display for Datapoint<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.data {
            Some(data) => write!(f, "{{data: {:?}}} ", data)?,
            None => write!(f, "{{data: none}} ")?,
        }
        write!(f, "{{set: [")?;
        for (i, value) in self.coords.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}:{}", i, value)?;
        }
        write!(f, "]}}")
    }
}

/// An ordered, owned collection of datapoints.
///
/// This is the unit that batch conversion produces, axis sorting reorders
/// in place, and tree construction consumes. Insertion order is preserved
/// until a sort rearranges it.
#[derive(Debug, Clone)]
pub struct PointSet<P> {
    points: Vec<Datapoint<P>>,
}

impl<P> PointSet<P> {
    /// Creates an empty point set.
    #[must_use]
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    /// Creates an empty point set with room for `capacity` points.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            points: Vec::with_capacity(capacity),
        }
    }

    /// Appends a point to the end of the set.
    pub fn push(&mut self, point: Datapoint<P>) {
        self.points.push(point);
    }

    /// Returns the number of points in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` when the set contains no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns the point at `index`, or `None` when out of range.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Datapoint<P>> {
        self.points.get(index)
    }

    /// Returns the points as a read-only slice.
    #[must_use]
    pub fn points(&self) -> &[Datapoint<P>] {
        &self.points
    }

    /// Returns the points as a mutable slice.
    ///
    /// Intended for tree builders that need to reorder sub-ranges with
    /// [`sort_points`] while recursing; individual coordinates remain
    /// immutable.
    pub fn as_mut_slice(&mut self) -> &mut [Datapoint<P>] {
        &mut self.points
    }

    /// Consumes the set and returns the underlying vector of points.
    #[must_use]
    pub fn into_points(self) -> Vec<Datapoint<P>> {
        self.points
    }

    /// Returns an iterator over the points in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Datapoint<P>> {
        self.points.iter()
    }

    /// Compares two sets pairwise with [`Datapoint::eq_exact`].
    ///
    /// Returns `false` when the lengths differ. This is sequence equality:
    /// the same points in a different order are not equal.
    #[must_use]
    pub fn eq_exact<Q>(&self, other: &PointSet<Q>) -> bool {
        if self.points.len() != other.points.len() {
            return false;
        }
        self.points
            .iter()
            .zip(other.points.iter())
            .all(|(p, q)| p.eq_exact(q))
    }

    /// Checks that every point in the set shares one dimensionality.
    ///
    /// # Returns
    ///
    /// * `Ok(Some(dims))` when the set is non-empty and uniform
    /// * `Ok(None)` when the set is empty
    ///
    /// # Errors
    ///
    /// Returns `KdPointError::DimensionMismatch` naming the first point's
    /// dimensionality and the offending point's dimensionality when they
    /// disagree.
    pub fn uniform_dimensionality(&self) -> Result<Option<usize>, KdPointError> {
        let expected = match self.points.first() {
            Some(first) => first.dimensionality(),
            None => return Ok(None),
        };
        for point in &self.points[1..] {
            if point.dimensionality() != expected {
                return Err(KdPointError::DimensionMismatch {
                    expected,
                    found: point.dimensionality(),
                });
            }
        }
        Ok(Some(expected))
    }

    /// Sorts the set in place by the coordinate on `axis`.
    ///
    /// Ties on the axis may end up in any order. Sorting an empty set is a
    /// no-op and succeeds.
    ///
    /// # Errors
    ///
    /// Returns `KdPointError::AxisOutOfBounds` when `axis` is not a valid
    /// coordinate index for every point in the set; the set is left
    /// unmodified in that case.
    pub fn sort_by_axis(&mut self, axis: usize) -> Result<(), KdPointError> {
        for point in &self.points {
            if axis >= point.dimensionality() {
                return Err(KdPointError::AxisOutOfBounds {
                    axis,
                    dims: point.dimensionality(),
                });
            }
        }
        sort_points(&mut self.points, &AxisOrder::new(axis));
        Ok(())
    }
}

impl<P> Default for PointSet<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> From<Vec<Datapoint<P>>> for PointSet<P> {
    fn from(points: Vec<Datapoint<P>>) -> Self {
        Self { points }
    }
}

impl<P> FromIterator<Datapoint<P>> for PointSet<P> {
    fn from_iter<I: IntoIterator<Item = Datapoint<P>>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}

impl<P> IntoIterator for PointSet<P> {
    type Item = Datapoint<P>;
    type IntoIter = std::vec::IntoIter<Datapoint<P>>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.into_iter()
    }
}

impl<'a, P> IntoIterator for &'a PointSet<P> {
    type Item = &'a Datapoint<P>;
    type IntoIter = std::slice::Iter<'a, Datapoint<P>>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

impl<P> Index<usize> for PointSet<P> {
    type Output = Datapoint<P>;

    fn index(&self, index: usize) -> &Self::Output {
        &self.points[index]
    }
}
