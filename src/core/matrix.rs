//! Validated square transition matrices.

use super::error::{ChainError, ShapeError};
use super::sampler::validate_weights;
use super::state::ChainState;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// An `N x N` table of non-negative relative weights.
///
/// Row `i`, column `j` holds the relative likelihood of moving from state
/// `i` to state `j`. Rows need not be normalized. A `TransitionMatrix` is
/// always square, has at least one row, and every row has a positive,
/// finite sum; it is immutable once built.
///
/// Serializes as a plain nested array. Deserialization runs the same
/// validation as [`TransitionMatrix::new`].
///
/// # Example
///
/// ```rust
/// use markovian::core::{ChainState, TransitionMatrix};
///
/// let matrix = TransitionMatrix::new(vec![
///     vec![1.0, 3.0],
///     vec![0.0, 1.0],
/// ])
/// .unwrap();
///
/// assert_eq!(matrix.size(), 2);
/// assert_eq!(matrix.probability(ChainState::new(0), ChainState::new(1)), 0.75);
/// assert!(matrix.is_absorbing(ChainState::new(1)));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<f64>>", into = "Vec<Vec<f64>>")]
pub struct TransitionMatrix {
    rows: Vec<Vec<f64>>,
}

impl TransitionMatrix {
    /// Validate and wrap a row-major table of weights.
    ///
    /// # Errors
    ///
    /// - [`ShapeError::Empty`] when there are no rows.
    /// - [`ShapeError::NotSquare`] when a row's length differs from the
    ///   number of rows.
    /// - [`ChainError::DegenerateRow`] when a row has a negative or
    ///   non-finite weight, or its weights sum to zero.
    pub fn new(rows: Vec<Vec<f64>>) -> Result<Self, ChainError> {
        validate_rows(&rows).inspect_err(|e| {
            warn!(error = %e, "rejected transition matrix");
        })?;
        Ok(Self { rows })
    }

    /// Number of states `N`.
    pub fn size(&self) -> usize {
        self.rows.len()
    }

    /// Raw weights for transitions out of `from`, if it is a valid state.
    pub fn row(&self, from: ChainState) -> Option<&[f64]> {
        self.rows.get(from.index()).map(Vec::as_slice)
    }

    /// All rows in state order.
    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    /// Raw weight of the `from -> to` transition; zero when out of range.
    pub fn weight(&self, from: ChainState, to: ChainState) -> f64 {
        self.row(from)
            .and_then(|row| row.get(to.index()))
            .copied()
            .unwrap_or(0.0)
    }

    /// Normalized probability of the `from -> to` transition.
    pub fn probability(&self, from: ChainState, to: ChainState) -> f64 {
        match self.row(from) {
            Some(row) => {
                let total: f64 = row.iter().sum();
                self.weight(from, to) / total
            }
            None => 0.0,
        }
    }

    /// Whether `state` can only transition to itself.
    pub fn is_absorbing(&self, state: ChainState) -> bool {
        match self.row(state) {
            Some(row) => row
                .iter()
                .enumerate()
                .all(|(j, &w)| j == state.index() || w == 0.0),
            None => false,
        }
    }
}

fn validate_rows(rows: &[Vec<f64>]) -> Result<(), ChainError> {
    check_shape(rows)?;
    for (row, weights) in rows.iter().enumerate() {
        validate_weights(weights).map_err(|source| ChainError::DegenerateRow { row, source })?;
    }
    Ok(())
}

fn check_shape(rows: &[Vec<f64>]) -> Result<(), ShapeError> {
    if rows.is_empty() {
        return Err(ShapeError::Empty);
    }
    let expected = rows.len();
    match rows.iter().position(|r| r.len() != expected) {
        Some(row) => Err(ShapeError::NotSquare {
            row,
            len: rows[row].len(),
            expected,
        }),
        None => Ok(()),
    }
}

impl TryFrom<Vec<Vec<f64>>> for TransitionMatrix {
    type Error = ChainError;

    fn try_from(rows: Vec<Vec<f64>>) -> Result<Self, Self::Error> {
        Self::new(rows)
    }
}

impl From<TransitionMatrix> for Vec<Vec<f64>> {
    fn from(matrix: TransitionMatrix) -> Self {
        matrix.rows
    }
}
