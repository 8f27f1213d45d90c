//! Error types for chain construction.

use thiserror::Error;

/// The transition matrix does not have a usable shape.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ShapeError {
    #[error("Transition matrix is empty. Provide at least one row")]
    Empty,

    #[error("Row {row} has {len} weights, expected {expected} (matrix must be square)")]
    NotSquare {
        /// Index of the offending row.
        row: usize,
        /// Number of weights in that row.
        len: usize,
        /// Number of rows in the matrix.
        expected: usize,
    },
}

/// A row of weights cannot back a categorical sampler.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum WeightError {
    #[error("weight at column {column} is negative ({value})")]
    Negative { column: usize, value: f64 },

    #[error("weight at column {column} is not finite")]
    NonFinite { column: usize },

    #[error("weights sum to zero")]
    ZeroSum,

    #[error("weights sum overflows")]
    SumOverflow,
}

/// Errors that can occur when constructing a Markov chain.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ChainError {
    #[error(transparent)]
    Shape(#[from] ShapeError),

    #[error("Row {row} is degenerate: {source}")]
    DegenerateRow {
        row: usize,
        #[source]
        source: WeightError,
    },

    #[error("State {state} is out of range for a chain with {states} states")]
    StateOutOfRange { state: usize, states: usize },
}
