//! Model output parse failures.

use thiserror::Error;

/// Why a model response could not be turned into a structured summary.
///
/// Both variants render the same fallback transcript; the split exists so
/// logs and tests can tell a syntax failure from a shape failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseFailure {
    /// The response was not JSON at all.
    #[error("Response is not JSON: {0}")]
    NotJson(String),

    /// The response was valid JSON of the wrong shape.
    #[error("Response JSON does not match the summary shape: {0}")]
    WrongShape(String),
}
