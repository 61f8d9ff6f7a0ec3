//! Extraction contract: request/reply unions and the scripting host seam.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ExtractError, HostError};

/// What the user asked to extract from the active tab.
///
/// One variant per inbound action; created per user action and consumed once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ExtractionRequest {
    /// The page's full rendered visible text.
    AllContent,

    /// The user's current text selection (empty if none).
    SelectedContent,
}

/// Reply half of the extraction contract.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ExtractionReply {
    /// Extraction succeeded; `text` may be empty.
    Extracted { text: String },

    /// Extraction failed before or during injection.
    Failed { error: ExtractError },
}

/// A tab as reported by the host environment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TabInfo {
    /// Host-assigned target identifier.
    pub target_id: String,

    /// Tab title.
    pub title: String,

    /// Fully qualified tab URL.
    pub url: String,
}

/// One per-target result marshaled back from an injected expression.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InjectionResult {
    /// The expression's return value, as the host serialized it.
    pub result: Value,
}

impl InjectionResult {
    pub fn new(result: Value) -> Self {
        Self { result }
    }
}

/// Host capability: evaluate a pure expression inside a tab's page context.
///
/// The host executes out-of-process and marshals back one result per target.
/// Implementations must not mutate the page.
#[async_trait]
pub trait ScriptingHost: Send + Sync {
    /// The tab that is active in the currently focused window, if any.
    async fn active_tab(&self) -> Result<Option<TabInfo>, HostError>;

    /// Run `expression` in the page context of `target_id`.
    async fn run_in_tab(
        &self,
        target_id: &str,
        expression: &str,
    ) -> Result<Vec<InjectionResult>, HostError>;
}

#[cfg(test)]
#[path = "extraction_tests.rs"]
mod tests;
