//! Serializable chain configuration.
//!
//! A `ChainConfig` describes how to build a chain: its transition matrix
//! and starting state. It never captures a running chain's state.

use crate::builder::error::BuildError;
use crate::core::{ChainError, MarkovChain, TransitionMatrix};
use serde::{Deserialize, Serialize};

/// Declarative description of a chain.
///
/// The matrix is validated while deserializing; the initial state is
/// range-checked when the chain is built.
///
/// # Example
///
/// ```
/// use markovian::builder::ChainConfig;
///
/// let config = ChainConfig::from_json(
///     r#"{ "matrix": [[0, 1], [1, 0]], "initial_state": 1 }"#,
/// )
/// .unwrap();
///
/// let chain = config.build().unwrap();
/// assert_eq!(chain.current_state().index(), 1);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChainConfig {
    /// Transition weights, one row per state.
    pub matrix: TransitionMatrix,

    /// Starting state. Defaults to `0`.
    #[serde(default)]
    pub initial_state: usize,
}

impl ChainConfig {
    /// Configuration starting in state `0`.
    pub fn new(matrix: TransitionMatrix) -> Self {
        Self {
            matrix,
            initial_state: 0,
        }
    }

    /// Set the starting state.
    pub fn with_initial_state(mut self, state: usize) -> Self {
        self.initial_state = state;
        self
    }

    /// Parse a configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self, BuildError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Render this configuration as JSON.
    pub fn to_json(&self) -> Result<String, BuildError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Build a fresh chain from this configuration.
    pub fn build(&self) -> Result<MarkovChain, ChainError> {
        MarkovChain::with_initial_state(self.matrix.clone(), self.initial_state)
    }
}

impl TryFrom<ChainConfig> for MarkovChain {
    type Error = ChainError;

    fn try_from(config: ChainConfig) -> Result<Self, Self::Error> {
        MarkovChain::with_initial_state(config.matrix, config.initial_state)
    }
}
