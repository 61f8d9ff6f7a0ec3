//! Generative model errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    /// The capability is absent or disabled in this environment.
    #[error("Model capability unavailable: {0}")]
    Unavailable(String),

    /// The model endpoint rejected the call.
    #[error("Model API error: {status} - {message}")]
    Api { status: u16, message: String },

    /// Transport failure talking to the model endpoint.
    #[error("Network error: {0}")]
    Network(String),

    /// Session could not be created.
    #[error("Session error: {0}")]
    Session(String),
}
