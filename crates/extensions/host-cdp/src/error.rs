//! CDP error types.

use thiserror::Error;

/// CDP client errors.
#[derive(Debug, Error)]
pub enum CdpError {
    /// Browser not found or not running with remote debugging.
    #[error("Browser not available at {0}. Start it with --remote-debugging-port=9222")]
    BrowserNotAvailable(String),

    /// Failed to establish the WebSocket connection.
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// WebSocket error after connecting.
    #[error("WebSocket error: {0}")]
    WebSocket(String),

    /// CDP protocol error.
    #[error("CDP error: {message} (code: {code})")]
    Protocol { code: i64, message: String },

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// HTTP error (for endpoint discovery).
    #[error("HTTP error: {0}")]
    Http(String),

    /// The evaluated expression threw inside the page.
    #[error("JavaScript error: {0}")]
    JavaScript(String),

    /// Timeout waiting for a response.
    #[error("Timeout: {0}")]
    Timeout(String),

    /// The connection went away mid-call.
    #[error("Session closed")]
    SessionClosed,

    /// The browser answered with an unexpected payload.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl From<tokio_tungstenite::tungstenite::Error> for CdpError {
    fn from(e: tokio_tungstenite::tungstenite::Error) -> Self {
        CdpError::WebSocket(e.to_string())
    }
}

impl From<reqwest::Error> for CdpError {
    fn from(e: reqwest::Error) -> Self {
        CdpError::Http(e.to_string())
    }
}
