//! Core Markov chain types and logic.
//!
//! This module contains the sampling engine:
//! - `TransitionMatrix`, a validated square table of relative weights
//! - `CategoricalSampler`, one per row, built once and never mutated
//! - `MarkovChain`, which owns the samplers and the current state
//! - `UniformSource`, the randomness capability passed into every step
//!
//! Nothing here owns or seeds randomness; callers inject it.

mod chain;
mod error;
mod matrix;
mod sampler;
mod source;
mod state;
mod trajectory;

pub use chain::{MarkovChain, Walk};
pub use error::{ChainError, ShapeError, WeightError};
pub use matrix::TransitionMatrix;
pub use sampler::CategoricalSampler;
pub use source::{ReplaySource, UniformSource};
pub use state::ChainState;
pub use trajectory::{StepRecord, Trajectory};
