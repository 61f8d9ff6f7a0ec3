//! Extraction relay errors.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why extraction produced no text.
///
/// Serializable so a reply union can carry it across a message channel.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ExtractError {
    /// No tab is active in the focused window.
    #[error("No active tab in the focused window")]
    NoActiveTab,

    /// The tab's URL scheme forbids script injection.
    #[error("Scripts cannot run on this page: {url}")]
    RestrictedPage { url: String },

    /// The host call itself failed; carries the underlying message.
    #[error("Script injection failed: {message}")]
    Injection { message: String },
}
