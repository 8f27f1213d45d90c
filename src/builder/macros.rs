//! Macros for ergonomic matrix construction.

/// Build a [`TransitionMatrix`](crate::core::TransitionMatrix) from row
/// literals.
///
/// Expands to a validated [`TransitionMatrix::new`](crate::core::TransitionMatrix::new)
/// call, so the result is a `Result`. Weights may be written as integers.
///
/// # Example
///
/// ```
/// use markovian::transition_matrix;
///
/// let matrix = transition_matrix![
///     [0, 1, 0],
///     [0, 0, 1],
///     [1, 0, 0],
/// ]
/// .unwrap();
/// assert_eq!(matrix.size(), 3);
///
/// assert!(transition_matrix![[1, 0], [1]].is_err());
/// ```
#[macro_export]
macro_rules! transition_matrix {
    (
        $(
            [$($weight:expr),* $(,)?]
        ),* $(,)?
    ) => {
        $crate::core::TransitionMatrix::new(::std::vec![
            $(
                ::std::vec![$(($weight) as f64),*]
            ),*
        ])
    };
}
