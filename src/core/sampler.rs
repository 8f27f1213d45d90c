//! Categorical sampling over a row of relative weights.

use super::error::WeightError;
use super::source::UniformSource;

/// Draws an index in `[0, N)` with probability proportional to its weight.
///
/// Weights need not sum to one. The cumulative sums are computed once at
/// construction, so each draw costs a single uniform value and a binary
/// search.
///
/// # Example
///
/// ```rust
/// use markovian::core::{CategoricalSampler, ReplaySource};
///
/// let sampler = CategoricalSampler::new(&[1.0, 0.0, 3.0]).unwrap();
/// assert_eq!(sampler.probability(2), 0.75);
///
/// let mut source = ReplaySource::new(vec![0.1, 0.5]);
/// assert_eq!(sampler.sample(&mut source), 0);
/// assert_eq!(sampler.sample(&mut source), 2);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct CategoricalSampler {
    cumulative: Vec<f64>,
    last_positive: usize,
}

impl CategoricalSampler {
    /// Build a sampler from a row of weights.
    ///
    /// # Errors
    ///
    /// Fails if the row is empty or sums to zero, or if any weight is
    /// negative or not finite.
    pub fn new(weights: &[f64]) -> Result<Self, WeightError> {
        validate_weights(weights)?;
        Ok(Self::from_validated(weights))
    }

    /// Build from weights already checked by [`validate_weights`].
    pub(crate) fn from_validated(weights: &[f64]) -> Self {
        let mut cumulative = Vec::with_capacity(weights.len());
        let mut running = 0.0;
        let mut last_positive = 0;
        for (i, &w) in weights.iter().enumerate() {
            running += w;
            cumulative.push(running);
            if w > 0.0 {
                last_positive = i;
            }
        }
        Self {
            cumulative,
            last_positive,
        }
    }

    /// Number of categories.
    pub fn len(&self) -> usize {
        self.cumulative.len()
    }

    /// Always `false`; a valid sampler has at least one category.
    pub fn is_empty(&self) -> bool {
        self.cumulative.is_empty()
    }

    /// Sum of the row's weights.
    pub fn total(&self) -> f64 {
        self.cumulative[self.cumulative.len() - 1]
    }

    /// Normalized probability of drawing `index`; zero when out of range.
    pub fn probability(&self, index: usize) -> f64 {
        let Some(&upper) = self.cumulative.get(index) else {
            return 0.0;
        };
        let lower = if index == 0 {
            0.0
        } else {
            self.cumulative[index - 1]
        };
        (upper - lower) / self.total()
    }

    /// Draw an index using one value from `source`.
    pub fn sample<S: UniformSource + ?Sized>(&self, source: &mut S) -> usize {
        self.sample_from_unit(source.next_uniform())
    }

    /// Map a unit value `u` in `[0, 1)` to an index.
    ///
    /// Returns the smallest `i` whose cumulative weight exceeds `u * total`.
    /// Values outside `[0, 1)` are clamped; NaN is treated as `0`.
    /// A zero-weight index is never returned.
    pub fn sample_from_unit(&self, u: f64) -> usize {
        let u = if u.is_nan() { 0.0 } else { u.clamp(0.0, 1.0) };
        let target = u * self.total();
        let index = self.cumulative.partition_point(|&c| c <= target);
        // u * total can round up to total
        index.min(self.last_positive)
    }
}

/// Check that a row of weights can back a [`CategoricalSampler`].
pub(crate) fn validate_weights(weights: &[f64]) -> Result<(), WeightError> {
    let mut total = 0.0;
    for (column, &w) in weights.iter().enumerate() {
        if !w.is_finite() {
            return Err(WeightError::NonFinite { column });
        }
        if w < 0.0 {
            return Err(WeightError::Negative { column, value: w });
        }
        total += w;
    }
    if !total.is_finite() {
        return Err(WeightError::SumOverflow);
    }
    if total <= 0.0 {
        return Err(WeightError::ZeroSum);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::source::ReplaySource;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn single_positive_weight_is_always_chosen() {
        let sampler = CategoricalSampler::new(&[0.0, 0.0, 2.5, 0.0]).unwrap();
        for u in [0.0, 0.1, 0.5, 0.999_999, 1.0] {
            assert_eq!(sampler.sample_from_unit(u), 2);
        }
    }

    #[test]
    fn boundaries_follow_cumulative_weights() {
        let sampler = CategoricalSampler::new(&[1.0, 1.0, 2.0]).unwrap();
        assert_eq!(sampler.sample_from_unit(0.0), 0);
        assert_eq!(sampler.sample_from_unit(0.249), 0);
        assert_eq!(sampler.sample_from_unit(0.25), 1);
        assert_eq!(sampler.sample_from_unit(0.499), 1);
        assert_eq!(sampler.sample_from_unit(0.5), 2);
        assert_eq!(sampler.sample_from_unit(0.999), 2);
    }

    #[test]
    fn zero_weight_columns_are_skipped() {
        let sampler = CategoricalSampler::new(&[0.0, 1.0, 0.0, 1.0, 0.0]).unwrap();
        assert_eq!(sampler.sample_from_unit(0.0), 1);
        assert_eq!(sampler.sample_from_unit(0.5), 3);
        assert_eq!(sampler.sample_from_unit(1.0), 3);
    }

    #[test]
    fn out_of_range_units_are_clamped() {
        let sampler = CategoricalSampler::new(&[1.0, 1.0]).unwrap();
        assert_eq!(sampler.sample_from_unit(-3.0), 0);
        assert_eq!(sampler.sample_from_unit(f64::NAN), 0);
        assert_eq!(sampler.sample_from_unit(7.0), 1);
    }

    #[test]
    fn unnormalized_weights_give_same_distribution() {
        let a = CategoricalSampler::new(&[1.0, 3.0]).unwrap();
        let b = CategoricalSampler::new(&[0.25, 0.75]).unwrap();
        for i in 0..100 {
            let u = i as f64 / 100.0;
            assert_eq!(a.sample_from_unit(u), b.sample_from_unit(u));
        }
        assert_eq!(a.probability(1), 0.75);
        assert_eq!(b.probability(1), 0.75);
    }

    #[test]
    fn probability_out_of_range_is_zero() {
        let sampler = CategoricalSampler::new(&[1.0]).unwrap();
        assert_eq!(sampler.probability(0), 1.0);
        assert_eq!(sampler.probability(1), 0.0);
    }

    #[test]
    fn sample_consumes_one_draw() {
        let sampler = CategoricalSampler::new(&[1.0, 1.0]).unwrap();
        let mut source = ReplaySource::new(vec![0.9, 0.1]);
        assert_eq!(sampler.sample(&mut source), 1);
        assert_eq!(sampler.sample(&mut source), 0);
        assert_eq!(source.draws(), 2);
    }

    #[test]
    fn equal_weights_are_roughly_balanced() {
        let sampler = CategoricalSampler::new(&[1.0, 1.0]).unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        let trials = 10_000;
        let ones = (0..trials).filter(|_| sampler.sample(&mut rng) == 1).count();
        let freq = ones as f64 / trials as f64;
        assert!((freq - 0.5).abs() < 0.02, "frequency was {freq}");
    }

    #[test]
    fn rejects_empty_row() {
        assert_eq!(CategoricalSampler::new(&[]), Err(WeightError::ZeroSum));
    }

    #[test]
    fn rejects_all_zero_row() {
        assert_eq!(
            CategoricalSampler::new(&[0.0, 0.0]),
            Err(WeightError::ZeroSum)
        );
    }

    #[test]
    fn rejects_negative_weight() {
        assert_eq!(
            CategoricalSampler::new(&[1.0, -0.5]),
            Err(WeightError::Negative {
                column: 1,
                value: -0.5
            })
        );
    }

    #[test]
    fn rejects_non_finite_weights() {
        assert_eq!(
            CategoricalSampler::new(&[f64::NAN, 1.0]),
            Err(WeightError::NonFinite { column: 0 })
        );
        assert_eq!(
            CategoricalSampler::new(&[1.0, f64::INFINITY]),
            Err(WeightError::NonFinite { column: 1 })
        );
    }

    #[test]
    fn rejects_overflowing_sum() {
        assert_eq!(
            CategoricalSampler::new(&[f64::MAX, f64::MAX]),
            Err(WeightError::SumOverflow)
        );
    }
}
