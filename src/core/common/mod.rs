// src/core/common/mod.rs

//! Shared primitives used across the crate.
//!
//! Currently this is the home of [`KdPointError`], the single error type
//! every fallible operation returns.

pub mod error;

pub use error::KdPointError;
