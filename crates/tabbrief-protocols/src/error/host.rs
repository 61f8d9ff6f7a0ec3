//! Scripting host errors.

use thiserror::Error;

/// Failure inside a [`crate::ScriptingHost`] implementation.
#[derive(Debug, Clone, Error)]
pub enum HostError {
    /// The host endpoint could not be reached.
    #[error("Host unreachable: {0}")]
    Unreachable(String),

    /// The host answered with a protocol-level error.
    #[error("Host protocol error: {0}")]
    Protocol(String),

    /// The injected expression threw inside the page.
    #[error("Evaluation failed: {0}")]
    Evaluation(String),
}
