//! Builder API for ergonomic chain construction.
//!
//! This module provides a fluent builder, a serde-backed configuration
//! type and a matrix literal macro. All of them validate through
//! [`TransitionMatrix::new`](crate::core::TransitionMatrix::new).

pub mod chain;
pub mod config;
pub mod error;
pub mod macros;

pub use chain::ChainBuilder;
pub use config::ChainConfig;
pub use error::BuildError;
