// src/core/point/projection.rs

//! Serialization projection of a datapoint.
//!
//! Encoding is supported through a borrowed [`Projection`] record with
//! `data` and `set` fields. Decoding back into a [`Datapoint`] is not
//! implemented; the decode entry point exists only to fail loudly instead
//! of producing a partial point.

use serde::{Serialize, Serializer};

use super::Datapoint;
use crate::core::common::KdPointError;

/// Borrowed structural view of a [`Datapoint`], the shape it serializes as.
///
/// `data` carries the payload (serialized however the payload type
/// serializes, `null` when absent) and `set` carries the coordinates.
#[derive(Debug, Serialize)]
pub struct Projection<'a, P> {
    /// The associated payload, if any.
    pub data: Option<&'a P>,
    /// The coordinate values in axis order.
    pub set: &'a [f64],
}

impl<P> Datapoint<P> {
    /// Returns the serialization view of this point.
    #[must_use]
    pub fn to_projection(&self) -> Projection<'_, P> {
        Projection {
            data: self.data(),
            set: self.coords(),
        }
    }

    /// Reconstructs a datapoint from a serialized projection.
    ///
    /// # Errors
    ///
    /// Always returns `KdPointError::NotImplemented`: no decode path
    /// exists. The entry point is kept so callers hit an explicit failure
    /// rather than a silently missing feature.
    pub fn from_projection(_value: &serde_json::Value) -> Result<Self, KdPointError> {
        Err(KdPointError::NotImplemented {
            feature: "datapoint decoding".to_string(),
        })
    }
}

impl<P: Serialize> Serialize for Datapoint<P> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_projection().serialize(serializer)
    }
}
