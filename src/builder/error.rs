//! Build errors for chain builders and configuration.

use crate::core::ChainError;
use thiserror::Error;

/// Errors that can occur when building a chain from a builder or config.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Invalid chain: {0}")]
    Chain(#[from] ChainError),

    #[error("Invalid chain configuration: {0}")]
    InvalidConfig(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ShapeError;

    #[test]
    fn chain_errors_are_wrapped() {
        let e: BuildError = ChainError::from(ShapeError::Empty).into();
        assert_eq!(
            e.to_string(),
            "Invalid chain: Transition matrix is empty. Provide at least one row"
        );
    }

    #[test]
    fn config_errors_are_wrapped() {
        let parse = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let e: BuildError = parse.into();
        assert!(e.to_string().starts_with("Invalid chain configuration:"));
    }
}
