// src/core/convert/mod.rs

//! Conversion pipeline between domain objects and datapoints.
//!
//! Domain types opt in through two capability traits: [`ToDatapoint`]
//! (the type can be represented as a point) and [`FromDatapoint`] (the
//! type can absorb a point's coordinates back into itself). On top of
//! those sit the batch drivers: [`convert_points`] turns a homogeneous
//! batch into a validated [`PointSet`], and [`convert_batch`] hands that
//! set straight to a [`TreeBuilder`] for index construction.

use crate::core::common::KdPointError;
use crate::core::point::{Datapoint, PointSet};

/// Capability of a domain object to produce a datapoint representing it.
///
/// `Payload` is the type the produced point carries back to the domain,
/// typically the implementing type itself (cloned or keyed) or an
/// identifier for it.
pub trait ToDatapoint {
    /// Payload type of the produced point.
    type Payload;

    /// Builds the point representation of this object.
    fn to_datapoint(&self) -> Datapoint<Self::Payload>;
}

impl<T: ToDatapoint + ?Sized> ToDatapoint for &T {
    type Payload = T::Payload;

    fn to_datapoint(&self) -> Datapoint<Self::Payload> {
        (**self).to_datapoint()
    }
}

impl<T: ToDatapoint + ?Sized> ToDatapoint for Box<T> {
    type Payload = T::Payload;

    fn to_datapoint(&self) -> Datapoint<Self::Payload> {
        (**self).to_datapoint()
    }
}

/// Capability of a domain object to update itself from a datapoint.
///
/// The mirror image of [`ToDatapoint`], used to carry the results of
/// spatial operations back into domain objects. Implementations read the
/// point's coordinates; the payload type is deliberately unconstrained.
pub trait FromDatapoint {
    /// Absorbs the coordinates of `point` into this object.
    fn update_from<P>(&mut self, point: &Datapoint<P>);
}

/// External tree-construction collaborator.
///
/// The conversion pipeline ends at this seam: it guarantees the
/// [`PointSet`] it passes has uniform dimensionality and that `depth`
/// starts at `0` for a fresh build, and knows nothing about how the
/// builder partitions or balances the result. Closures of the form
/// `Fn(PointSet<P>, usize) -> Tree` implement this trait directly.
pub trait TreeBuilder<P> {
    /// The constructed tree (or tree root) type.
    type Tree;

    /// Consumes `points` and produces a tree, starting at recursion
    /// `depth`.
    fn build(&self, points: PointSet<P>, depth: usize) -> Self::Tree;
}

impl<P, T, F> TreeBuilder<P> for F
where
    F: Fn(PointSet<P>, usize) -> T,
{
    type Tree = T;

    fn build(&self, points: PointSet<P>, depth: usize) -> T {
        self(points, depth)
    }
}

/// Converts an ordered batch of domain objects into a validated point set.
///
/// Each item is converted exactly once and the input order is preserved.
/// The first item's dimensionality sets the expectation for the rest of
/// the batch.
///
/// # Errors
///
/// * `KdPointError::EmptyInput` when `items` is empty
/// * `KdPointError::DimensionMismatch` when any produced point deviates
///   from the first point's dimensionality
pub fn convert_points<T: ToDatapoint>(items: &[T]) -> Result<PointSet<T::Payload>, KdPointError> {
    if items.is_empty() {
        return Err(KdPointError::EmptyInput(
            "conversion batch contains no items".to_string(),
        ));
    }
    let mut points = PointSet::with_capacity(items.len());
    let mut expected = None;
    for item in items {
        let point = item.to_datapoint();
        let found = point.dimensionality();
        match expected {
            None => expected = Some(found),
            Some(expected) if expected != found => {
                return Err(KdPointError::DimensionMismatch { expected, found });
            }
            Some(_) => {}
        }
        points.push(point);
    }
    Ok(points)
}

/// Converts a batch of domain objects and builds a tree from the result.
///
/// Validation happens before construction: the builder is only invoked
/// once every item has produced a point of uniform dimensionality, and it
/// is always invoked with `depth = 0`.
///
/// # Errors
///
/// Propagates the errors of [`convert_points`]; the builder is never
/// called when conversion fails.
pub fn convert_batch<T, B>(items: &[T], builder: &B) -> Result<B::Tree, KdPointError>
where
    T: ToDatapoint,
    B: TreeBuilder<T::Payload>,
{
    let points = convert_points(items)?;
    Ok(builder.build(points, 0))
}

impl<P> PointSet<P> {
    /// Converts `item` and appends the resulting point to this set.
    ///
    /// The append happens through `&mut self`, so it is always visible to
    /// the caller: after this returns, `len` has grown by exactly one.
    pub fn import<T>(&mut self, item: &T)
    where
        T: ToDatapoint<Payload = P> + ?Sized,
    {
        self.push(item.to_datapoint());
    }
}

#[cfg(test)]
mod tests {
    mod test_convert;
}
