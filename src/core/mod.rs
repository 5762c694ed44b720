// src/core/mod.rs

//! Core point, ordering, metric, and conversion functionality.

pub mod common;
pub mod convert;
pub mod metric;
pub mod order;
pub mod point;
