//! Builder for constructing Markov chains.

use crate::builder::error::BuildError;
use crate::core::{MarkovChain, TransitionMatrix};

/// Builder for constructing chains with a fluent API.
///
/// Rows are collected in order; the initial state defaults to `0`.
/// Validation happens once, in [`ChainBuilder::build`].
///
/// # Example
///
/// ```
/// use markovian::builder::ChainBuilder;
///
/// let chain = ChainBuilder::new()
///     .row([0.9, 0.1])
///     .row([0.5, 0.5])
///     .initial(1)
///     .build()
///     .unwrap();
///
/// assert_eq!(chain.state_count(), 2);
/// assert_eq!(chain.current_state().index(), 1);
/// ```
#[derive(Clone, Debug, Default)]
pub struct ChainBuilder {
    rows: Vec<Vec<f64>>,
    initial: usize,
}

impl ChainBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one row of weights.
    pub fn row(mut self, weights: impl Into<Vec<f64>>) -> Self {
        self.rows.push(weights.into());
        self
    }

    /// Append several rows at once.
    pub fn rows<I, R>(mut self, rows: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: Into<Vec<f64>>,
    {
        self.rows.extend(rows.into_iter().map(Into::into));
        self
    }

    /// Set the initial state (defaults to `0`).
    pub fn initial(mut self, state: usize) -> Self {
        self.initial = state;
        self
    }

    /// Validate the rows and build the chain.
    /// Returns an error if the matrix or initial state is invalid.
    pub fn build(self) -> Result<MarkovChain, BuildError> {
        let matrix = TransitionMatrix::new(self.rows)?;
        Ok(MarkovChain::with_initial_state(matrix, self.initial)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ChainError, ChainState, ShapeError};

    #[test]
    fn builder_requires_rows() {
        let result = ChainBuilder::new().build();

        assert!(matches!(
            result,
            Err(BuildError::Chain(ChainError::Shape(ShapeError::Empty)))
        ));
    }

    #[test]
    fn builder_rejects_non_square_rows() {
        let result = ChainBuilder::new().row([1.0, 0.0]).row([1.0]).build();

        assert!(matches!(
            result,
            Err(BuildError::Chain(ChainError::Shape(
                ShapeError::NotSquare { row: 1, .. }
            )))
        ));
    }

    #[test]
    fn builder_rejects_out_of_range_initial_state() {
        let result = ChainBuilder::new().row([1.0]).initial(1).build();

        assert!(matches!(
            result,
            Err(BuildError::Chain(ChainError::StateOutOfRange {
                state: 1,
                states: 1
            }))
        ));
    }

    #[test]
    fn fluent_api_builds_chain() {
        let chain = ChainBuilder::new()
            .row(vec![0.0, 1.0])
            .row(vec![1.0, 0.0])
            .build()
            .unwrap();

        assert_eq!(chain.current_state(), ChainState::new(0));
        assert_eq!(chain.state_count(), 2);
    }

    #[test]
    fn add_multiple_rows() {
        let chain = ChainBuilder::new()
            .rows([[0.0, 1.0, 0.0], [0.0, 0.0, 1.0], [1.0, 0.0, 0.0]])
            .initial(2)
            .build()
            .unwrap();

        assert_eq!(chain.state_count(), 3);
        assert_eq!(chain.current_state(), ChainState::new(2));
    }
}
