//! Markovian: a discrete-time, discrete-state Markov chain simulator
//!
//! A chain is an `N x N` table of relative transition weights plus a
//! current state. Each step samples the next state from the current row.
//! Randomness is never owned by the chain: every step borrows a
//! [`UniformSource`](core::UniformSource) from the caller, so chains are
//! reproducible with seeded generators and independent of any global RNG.
//!
//! # Core Concepts
//!
//! - **TransitionMatrix**: validated square table of non-negative weights
//! - **CategoricalSampler**: per-row weighted index sampler, built once
//! - **MarkovChain**: owns the samplers and the current state
//! - **Builders**: fluent builder, JSON configuration and a matrix macro
//!
//! # Example
//!
//! ```rust
//! use markovian::core::MarkovChain;
//! use markovian::transition_matrix;
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let matrix = transition_matrix![
//!     [0, 1, 0, 0],
//!     [0, 0, 1, 0],
//!     [0, 0, 0, 1],
//!     [1, 0, 0, 0],
//! ]
//! .unwrap();
//!
//! let mut chain = MarkovChain::new(matrix);
//! let mut rng = StdRng::seed_from_u64(0);
//!
//! for expected in [1, 2, 3, 0] {
//!     assert_eq!(chain.step(&mut rng).index(), expected);
//! }
//! ```

pub mod builder;
pub mod core;

// Re-export commonly used types
pub use crate::builder::{BuildError, ChainBuilder, ChainConfig};
pub use crate::core::{
    CategoricalSampler, ChainError, ChainState, MarkovChain, TransitionMatrix, UniformSource,
};
