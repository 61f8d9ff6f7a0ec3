//! Generative model contract.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ModelError;

/// Runtime-detectable availability of the model capability.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Availability {
    /// The capability is present and can open sessions.
    Ready,

    /// The capability is absent or disabled; carries the reason.
    Unavailable(String),
}

impl Availability {
    pub fn is_ready(&self) -> bool {
        matches!(self, Availability::Ready)
    }
}

/// Configuration for one model session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Language the session is expected to respond in (BCP 47 tag).
    pub language: String,
}

impl SessionConfig {
    pub fn new(language: impl Into<String>) -> Self {
        Self {
            language: language.into(),
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::new("en")
    }
}

/// A generative model the orchestrator can open sessions against.
#[async_trait]
pub trait LanguageModel: Send + Sync {
    /// Returns the model host ID.
    fn id(&self) -> &str;

    /// Probe whether the capability is usable right now.
    async fn availability(&self) -> Availability;

    /// Open a session configured for the expected output language.
    async fn open_session(
        &self,
        config: SessionConfig,
    ) -> Result<Box<dyn ModelSession>, ModelError>;
}

/// One open conversation with the model.
#[async_trait]
pub trait ModelSession: Send + Sync {
    /// Submit a prompt and return the model's text response.
    ///
    /// `constraint` is a JSON-schema-like structural output constraint the
    /// model is asked, but not guaranteed, to conform to.
    async fn prompt(&self, input: &str, constraint: Option<&Value>)
        -> Result<String, ModelError>;
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
