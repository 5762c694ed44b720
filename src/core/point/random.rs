// src/core/point/random.rs

//! Randomized datapoint construction.
//!
//! Both constructors draw from a caller-supplied [`Rng`] rather than a
//! process-wide generator, so tests can pass a seeded source (for example
//! `rand::rngs::StdRng::seed_from_u64`) and get reproducible points.

use rand::Rng;

use super::Datapoint;

impl<P> Datapoint<P> {
    /// Generates a payload-free datapoint with `dims` coordinates drawn
    /// uniformly from `[0, 1)`.
    ///
    /// Useful for synthetic test data or for adding noise to a dataset.
    pub fn random<R: Rng + ?Sized>(rng: &mut R, dims: usize) -> Self {
        Self::random_in_range(rng, dims, 0.0, 1.0)
    }

    /// Generates a payload-free datapoint with `dims` coordinates drawn
    /// uniformly from `[min, max)`.
    ///
    /// Each coordinate is sampled independently.
    ///
    /// # Panics
    ///
    /// Panics when `min >= max` or when either bound is non-finite, since
    /// `[min, max)` is not a samplable range in those cases.
    pub fn random_in_range<R: Rng + ?Sized>(rng: &mut R, dims: usize, min: f64, max: f64) -> Self {
        let coords: Vec<f64> = (0..dims).map(|_| rng.gen_range(min..max)).collect();
        Self::detached(coords)
    }
}
