// src/core/order/mod.rs

//! Axis-wise ordering of datapoints.
//!
//! [`PointOrder`] is the ordering-relation contract consumed by
//! [`sort_points`], and [`AxisOrder`] is its standard implementation: a
//! strict less-than on one coordinate index. A recursive space partitioner
//! sorts each sub-range with the axis for its depth (`depth % dims`) to
//! find a median split, so the axis is a runtime value rather than a
//! compile-time choice.

use std::cmp::Ordering;

use crate::core::point::Datapoint;

/// An ordering relation over pairs of datapoints.
///
/// Implementations must behave as a strict weak ordering: `less` is
/// irreflexive, and incomparable pairs (neither less than the other) are
/// treated as ties. Closures of the form
/// `Fn(&Datapoint<P>, &Datapoint<P>) -> bool` implement this trait
/// directly, so ad-hoc relations need no wrapper type.
pub trait PointOrder<P> {
    /// Returns `true` when `p` orders strictly before `q`.
    fn less(&self, p: &Datapoint<P>, q: &Datapoint<P>) -> bool;

    /// Returns the [`Ordering`] between `p` and `q`, deriving ties from
    /// two `less` probes. Implementations may override this with a
    /// cheaper direct comparison.
    fn ordering(&self, p: &Datapoint<P>, q: &Datapoint<P>) -> Ordering {
        if self.less(p, q) {
            Ordering::Less
        } else if self.less(q, p) {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }
}

impl<P, F> PointOrder<P> for F
where
    F: Fn(&Datapoint<P>, &Datapoint<P>) -> bool,
{
    fn less(&self, p: &Datapoint<P>, q: &Datapoint<P>) -> bool {
        self(p, q)
    }
}

/// The standard per-axis ordering: strict less-than on one coordinate.
///
/// This is a plain value (`Copy`, comparable) holding the axis index, so a
/// tree builder can construct one per recursion level. The axis must be a
/// valid coordinate index for every point compared; comparing points whose
/// dimensionality is too small panics with an index-out-of-bounds. Use
/// [`PointSet::sort_by_axis`](crate::core::point::PointSet::sort_by_axis)
/// for the checked variant that surfaces the error instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxisOrder {
    axis: usize,
}

impl AxisOrder {
    /// Creates an ordering on the coordinate at `axis`.
    #[must_use]
    pub fn new(axis: usize) -> Self {
        Self { axis }
    }

    /// Returns the axis index this ordering compares on.
    #[must_use]
    pub fn axis(&self) -> usize {
        self.axis
    }

    /// Creates the conventional ordering for a tree recursion depth:
    /// `axis = depth % dims`, cycling through the axes level by level.
    ///
    /// # Panics
    ///
    /// Panics when `dims` is zero.
    #[must_use]
    pub fn for_depth(depth: usize, dims: usize) -> Self {
        Self { axis: depth % dims }
    }
}

impl<P> PointOrder<P> for AxisOrder {
    fn less(&self, p: &Datapoint<P>, q: &Datapoint<P>) -> bool {
        p.coords()[self.axis] < q.coords()[self.axis]
    }

    // NaN has no order on the axis; such pairs compare as ties.
    fn ordering(&self, p: &Datapoint<P>, q: &Datapoint<P>) -> Ordering {
        p.coords()[self.axis]
            .partial_cmp(&q.coords()[self.axis])
            .unwrap_or(Ordering::Equal)
    }
}

/// Sorts a slice of datapoints in place under the supplied relation.
///
/// The sort is an O(n log n) unstable comparison sort: ties may end up in
/// any order. Taking a slice rather than a whole collection lets a tree
/// builder re-sort sub-partitions while it recurses.
pub fn sort_points<P, O>(points: &mut [Datapoint<P>], order: &O)
where
    O: PointOrder<P> + ?Sized,
{
    points.sort_unstable_by(|p, q| order.ordering(p, q));
}
