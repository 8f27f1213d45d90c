//! Injectable sources of uniform randomness.
//!
//! The chain never owns or seeds its randomness. Each `step` borrows a
//! source from the caller, so one source can drive many chains or each
//! chain can get its own.

/// Capability to draw uniform values from `[0, 1)`.
///
/// Every [`rand::Rng`] is a `UniformSource`, so seeded generators such as
/// `StdRng` plug straight in.
///
/// # Example
///
/// ```rust
/// use markovian::core::UniformSource;
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let u = rng.next_uniform();
/// assert!((0.0..1.0).contains(&u));
/// ```
pub trait UniformSource {
    /// Draw the next value, uniformly distributed over `[0, 1)`.
    fn next_uniform(&mut self) -> f64;
}

impl<R: rand::Rng + ?Sized> UniformSource for R {
    fn next_uniform(&mut self) -> f64 {
        self.random::<f64>()
    }
}

/// Deterministic source that cycles through a fixed list of values.
///
/// Useful for replaying a recorded sequence of draws or for pinning the
/// outcome of a step in tests.
///
/// # Example
///
/// ```rust
/// use markovian::core::{ReplaySource, UniformSource};
///
/// let mut source = ReplaySource::new(vec![0.25, 0.75]);
/// assert_eq!(source.next_uniform(), 0.25);
/// assert_eq!(source.next_uniform(), 0.75);
/// assert_eq!(source.next_uniform(), 0.25);
/// ```
#[derive(Clone, Debug)]
pub struct ReplaySource {
    values: Vec<f64>,
    position: usize,
}

impl ReplaySource {
    /// Create a source replaying `values` in order, wrapping around.
    ///
    /// An empty list replays `0.0` forever.
    pub fn new(values: Vec<f64>) -> Self {
        Self {
            values,
            position: 0,
        }
    }

    /// Source that always yields the same value.
    pub fn constant(value: f64) -> Self {
        Self::new(vec![value])
    }

    /// Number of draws taken so far.
    pub fn draws(&self) -> usize {
        self.position
    }
}

impl UniformSource for ReplaySource {
    fn next_uniform(&mut self) -> f64 {
        if self.values.is_empty() {
            self.position += 1;
            return 0.0;
        }
        let value = self.values[self.position % self.values.len()];
        self.position += 1;
        value
    }
}
