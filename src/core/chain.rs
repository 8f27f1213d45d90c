//! The Markov chain model: per-row samplers plus a current state.

use super::error::ChainError;
use super::matrix::TransitionMatrix;
use super::sampler::CategoricalSampler;
use super::source::UniformSource;
use super::state::ChainState;
use super::trajectory::Trajectory;
use tracing::{debug, trace, warn};

/// A finite-state, discrete-time Markov chain.
///
/// The chain owns its transition matrix, one immutable
/// [`CategoricalSampler`] per row (built once at construction), and its
/// current state. Randomness is borrowed from the caller on every step.
///
/// `step` takes `&mut self`; sharing one chain between threads needs
/// external locking, or use one chain per thread.
///
/// # Example
///
/// ```rust
/// use markovian::core::{ChainState, MarkovChain, TransitionMatrix};
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
///
/// let matrix = TransitionMatrix::new(vec![
///     vec![0.0, 1.0, 0.0, 0.0],
///     vec![0.0, 0.0, 1.0, 0.0],
///     vec![0.0, 0.0, 0.0, 1.0],
///     vec![1.0, 0.0, 0.0, 0.0],
/// ])
/// .unwrap();
///
/// let mut chain = MarkovChain::new(matrix);
/// let mut rng = StdRng::seed_from_u64(42);
///
/// let visited: Vec<usize> = (0..8).map(|_| chain.step(&mut rng).index()).collect();
/// assert_eq!(visited, vec![1, 2, 3, 0, 1, 2, 3, 0]);
/// assert_eq!(chain.current_state(), ChainState::new(0));
/// ```
#[derive(Clone, Debug)]
pub struct MarkovChain {
    matrix: TransitionMatrix,
    samplers: Vec<CategoricalSampler>,
    current: ChainState,
}

impl MarkovChain {
    /// Create a chain starting in state `0`.
    pub fn new(matrix: TransitionMatrix) -> Self {
        Self::assemble(matrix, ChainState::default())
    }

    /// Build the per-row samplers; `initial` must already be in range.
    fn assemble(matrix: TransitionMatrix, initial: ChainState) -> Self {
        let samplers: Vec<CategoricalSampler> = matrix
            .rows()
            .iter()
            .map(|row| CategoricalSampler::from_validated(row))
            .collect();
        debug!(
            states = samplers.len(),
            initial = initial.index(),
            "built markov chain"
        );
        Self {
            matrix,
            samplers,
            current: initial,
        }
    }

    /// Create a chain starting in `initial`.
    ///
    /// # Errors
    ///
    /// Returns [`ChainError::StateOutOfRange`] if `initial` is not below
    /// the number of states.
    pub fn with_initial_state(
        matrix: TransitionMatrix,
        initial: usize,
    ) -> Result<Self, ChainError> {
        let initial = ChainState::new(initial);
        let states = matrix.size();
        if !initial.is_within(states) {
            warn!(state = initial.index(), states, "initial state out of range");
            return Err(ChainError::StateOutOfRange {
                state: initial.index(),
                states,
            });
        }
        Ok(Self::assemble(matrix, initial))
    }

    /// Validate `rows` and create a chain starting in `initial`.
    ///
    /// # Errors
    ///
    /// Any error from [`TransitionMatrix::new`] or
    /// [`MarkovChain::with_initial_state`].
    pub fn from_rows(rows: Vec<Vec<f64>>, initial: usize) -> Result<Self, ChainError> {
        Self::with_initial_state(TransitionMatrix::new(rows)?, initial)
    }

    /// Current state (pure).
    pub fn current_state(&self) -> ChainState {
        self.current
    }

    /// Number of states `N`.
    pub fn state_count(&self) -> usize {
        self.samplers.len()
    }

    /// The transition matrix this chain was built from.
    pub fn matrix(&self) -> &TransitionMatrix {
        &self.matrix
    }

    /// The sampler for transitions out of `state`.
    pub fn sampler(&self, state: ChainState) -> Option<&CategoricalSampler> {
        self.samplers.get(state.index())
    }

    /// Advance the chain by one transition.
    ///
    /// Draws exactly one value from `source`, samples the next state from
    /// the current state's row and makes it current.
    pub fn step<S: UniformSource + ?Sized>(&mut self, source: &mut S) -> ChainState {
        let from = self.current;
        let next = self.samplers[from.index()].sample(source);
        debug_assert!(next < self.samplers.len(), "sampled state escaped range");
        self.current = ChainState::new(next);
        trace!(from = from.index(), to = next, "step");
        self.current
    }

    /// Endless iterator of successive states.
    ///
    /// # Example
    ///
    /// ```rust
    /// use markovian::core::{ChainState, MarkovChain, ReplaySource, TransitionMatrix};
    ///
    /// let matrix = TransitionMatrix::new(vec![vec![0.0, 1.0], vec![1.0, 0.0]]).unwrap();
    /// let mut chain = MarkovChain::new(matrix);
    /// let mut source = ReplaySource::constant(0.5);
    ///
    /// let first: Vec<ChainState> = chain.walk(&mut source).take(3).collect();
    /// assert_eq!(first, vec![ChainState::new(1), ChainState::new(0), ChainState::new(1)]);
    /// ```
    pub fn walk<'a, S: UniformSource + ?Sized>(&'a mut self, source: &'a mut S) -> Walk<'a, S> {
        Walk {
            chain: self,
            source,
        }
    }

    /// Take `steps` steps and return each new state.
    pub fn simulate<S: UniformSource + ?Sized>(
        &mut self,
        steps: usize,
        source: &mut S,
    ) -> Vec<ChainState> {
        self.walk(source).take(steps).collect()
    }

    /// Take one step per slot of `out`, writing each new state into it.
    pub fn simulate_into<S: UniformSource + ?Sized>(
        &mut self,
        source: &mut S,
        out: &mut [ChainState],
    ) {
        for slot in out.iter_mut() {
            *slot = self.step(source);
        }
    }

    /// Take `steps` steps and return the path including the starting state.
    pub fn record<S: UniformSource + ?Sized>(
        &mut self,
        steps: usize,
        source: &mut S,
    ) -> Trajectory {
        let mut trajectory = Trajectory::with_capacity(self.current, steps);
        for _ in 0..steps {
            trajectory.push(self.step(source));
        }
        trajectory
    }
}

/// Iterator returned by [`MarkovChain::walk`]. Never ends.
pub struct Walk<'a, S: UniformSource + ?Sized> {
    chain: &'a mut MarkovChain,
    source: &'a mut S,
}

impl<S: UniformSource + ?Sized> Iterator for Walk<'_, S> {
    type Item = ChainState;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.chain.step(&mut *self.source))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}
