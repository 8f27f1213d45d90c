//! Chain state representation.
//!
//! A state is the index of a row in the transition matrix. The chain owns
//! its current state exclusively and only `step` moves it.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Index of one of the `N` states of a Markov chain.
///
/// A `ChainState` carries no bound by itself; a [`MarkovChain`] only ever
/// holds states in `[0, N)`, validated at construction and preserved by
/// sampling.
///
/// # Example
///
/// ```rust
/// use markovian::core::ChainState;
///
/// let state = ChainState::new(3);
/// assert_eq!(state.index(), 3);
/// assert_eq!(state.to_string(), "3");
/// assert_eq!(ChainState::default(), ChainState::new(0));
/// ```
///
/// [`MarkovChain`]: crate::core::MarkovChain
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ChainState(usize);

impl ChainState {
    /// Wrap a raw row index.
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// The row index of this state.
    pub const fn index(self) -> usize {
        self.0
    }

    /// Check whether the state is valid for a chain with `states` states.
    pub const fn is_within(self, states: usize) -> bool {
        self.0 < states
    }
}

impl From<usize> for ChainState {
    fn from(index: usize) -> Self {
        Self(index)
    }
}

impl From<ChainState> for usize {
    fn from(state: ChainState) -> Self {
        state.0
    }
}

impl fmt::Display for ChainState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
