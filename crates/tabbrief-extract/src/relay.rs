//! The extraction relay.

use std::sync::Arc;

use tracing::debug;

use tabbrief_protocols::{
    ExtractError, ExtractionReply, ExtractionRequest, ScriptingHost,
};

use crate::scripts::{expression_for, is_restricted};

/// Relays an [`ExtractionRequest`] into the active tab and returns the text.
///
/// Everything stateful lives behind the [`ScriptingHost`] seam; the relay
/// itself holds no per-request state.
pub struct ExtractionRelay {
    host: Arc<dyn ScriptingHost>,
}

impl ExtractionRelay {
    pub fn new(host: Arc<dyn ScriptingHost>) -> Self {
        Self { host }
    }

    /// Extract text for `request`, or fail with the reason.
    ///
    /// The restricted-scheme guard runs before any injection so a forbidden
    /// page costs no host round trip and yields a precise message.
    pub async fn extract(&self, request: ExtractionRequest) -> Result<String, ExtractError> {
        let tab = self
            .host
            .active_tab()
            .await
            .map_err(|e| ExtractError::Injection {
                message: e.to_string(),
            })?
            .ok_or(ExtractError::NoActiveTab)?;

        if is_restricted(&tab.url) {
            return Err(ExtractError::RestrictedPage { url: tab.url });
        }

        let expression = expression_for(request);
        debug!(target_id = %tab.target_id, %expression, "injecting into active tab");

        let results = self
            .host
            .run_in_tab(&tab.target_id, expression)
            .await
            .map_err(|e| ExtractError::Injection {
                message: e.to_string(),
            })?;

        // The host marshals one result per target; this call has exactly one.
        let first = results.first().ok_or_else(|| ExtractError::Injection {
            message: "host returned no injection results".to_string(),
        })?;

        Ok(first.result.as_str().unwrap_or("").to_string())
    }

    /// Message-level entry point: fold [`Self::extract`] into the reply union.
    pub async fn handle(&self, request: ExtractionRequest) -> ExtractionReply {
        match self.extract(request).await {
            Ok(text) => ExtractionReply::Extracted { text },
            Err(error) => ExtractionReply::Failed { error },
        }
    }
}

#[cfg(test)]
#[path = "relay_tests.rs"]
mod tests;
