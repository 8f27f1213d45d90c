//! Recorded paths through a chain.
//!
//! A trajectory is the initial state followed by every state the chain
//! visited, in order.

use super::state::ChainState;
use serde::{Deserialize, Serialize};

/// One observed move of the chain.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepRecord {
    /// 1-based step number.
    pub step: usize,
    /// The state being left.
    pub from: ChainState,
    /// The state being entered.
    pub to: ChainState,
}

/// Ordered sequence of visited states.
///
/// Serializes as `{"states": [..]}` for reporting.
///
/// # Example
///
/// ```rust
/// use markovian::core::{ChainState, Trajectory};
///
/// let trajectory = Trajectory::new(ChainState::new(0))
///     .record(ChainState::new(1))
///     .record(ChainState::new(0));
///
/// assert_eq!(trajectory.steps(), 2);
/// assert_eq!(trajectory.visit_counts(2), vec![2, 1]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Trajectory {
    states: Vec<ChainState>,
}

impl Trajectory {
    /// Start a trajectory at `initial`.
    pub fn new(initial: ChainState) -> Self {
        Self {
            states: vec![initial],
        }
    }

    /// Start a trajectory with room for `steps` more states.
    pub fn with_capacity(initial: ChainState, steps: usize) -> Self {
        let mut states = Vec::with_capacity(steps + 1);
        states.push(initial);
        Self { states }
    }

    /// Append the next visited state, returning the extended trajectory.
    pub fn record(mut self, state: ChainState) -> Self {
        self.push(state);
        self
    }

    pub(crate) fn push(&mut self, state: ChainState) {
        self.states.push(state);
    }

    /// Every state in order, starting with the initial one.
    pub fn states(&self) -> &[ChainState] {
        &self.states
    }

    /// The state the trajectory started in.
    pub fn initial(&self) -> ChainState {
        self.states[0]
    }

    /// The most recently visited state.
    pub fn last(&self) -> ChainState {
        self.states[self.states.len() - 1]
    }

    /// Number of states, including the initial one.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Always `false`; a trajectory holds at least its initial state.
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Number of steps taken.
    pub fn steps(&self) -> usize {
        self.states.len() - 1
    }

    /// Each consecutive pair of states as a [`StepRecord`].
    pub fn transitions(&self) -> impl Iterator<Item = StepRecord> + '_ {
        self.states
            .windows(2)
            .enumerate()
            .map(|(i, pair)| StepRecord {
                step: i + 1,
                from: pair[0],
                to: pair[1],
            })
    }

    /// How many times each of `states` states appears in the trajectory.
    ///
    /// States at or beyond `states` are not counted.
    pub fn visit_counts(&self, states: usize) -> Vec<usize> {
        let mut counts = vec![0; states];
        for state in &self.states {
            if let Some(count) = counts.get_mut(state.index()) {
                *count += 1;
            }
        }
        counts
    }

    /// Share of visits per state, excluding the initial state.
    ///
    /// Returns all zeros when no steps were taken.
    pub fn visit_frequencies(&self, states: usize) -> Vec<f64> {
        let mut counts = vec![0usize; states];
        for state in &self.states[1..] {
            if let Some(count) = counts.get_mut(state.index()) {
                *count += 1;
            }
        }
        let steps = self.steps();
        if steps == 0 {
            return vec![0.0; states];
        }
        counts
            .into_iter()
            .map(|c| c as f64 / steps as f64)
            .collect()
    }
}
