//! `ScriptingHost` over the CDP client.

use async_trait::async_trait;
use tracing::debug;

use tabbrief_protocols::{HostError, InjectionResult, ScriptingHost, TabInfo};

use crate::client::CdpClient;
use crate::error::CdpError;

/// Scripting host backed by a browser's DevTools endpoint.
///
/// Connections are per call: tab discovery is plain HTTP, and each injection
/// opens one WebSocket, attaches, evaluates, and disconnects. One request is
/// in flight at a time upstream, so there is nothing to pool.
pub struct CdpScriptingHost {
    endpoint: String,
}

impl CdpScriptingHost {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl ScriptingHost for CdpScriptingHost {
    /// The `/json/list` endpoint orders targets by recency; the first `page`
    /// entry is the tab the user is looking at.
    async fn active_tab(&self) -> Result<Option<TabInfo>, HostError> {
        let pages = CdpClient::list_pages(&self.endpoint)
            .await
            .map_err(host_error)?;

        Ok(pages
            .into_iter()
            .find(|page| page.page_type == "page")
            .map(|page| TabInfo {
                target_id: page.id,
                title: page.title,
                url: page.url,
            }))
    }

    async fn run_in_tab(
        &self,
        target_id: &str,
        expression: &str,
    ) -> Result<Vec<InjectionResult>, HostError> {
        let client = CdpClient::connect(&self.endpoint)
            .await
            .map_err(host_error)?;
        let session_id = client.attach(target_id).await.map_err(host_error)?;
        debug!(%target_id, %session_id, "attached; evaluating");

        let value = client
            .evaluate(&session_id, expression)
            .await
            .map_err(host_error)?;

        Ok(vec![InjectionResult::new(value)])
    }
}

fn host_error(error: CdpError) -> HostError {
    match error {
        CdpError::BrowserNotAvailable(message)
        | CdpError::ConnectionFailed(message)
        | CdpError::Http(message) => HostError::Unreachable(message),
        CdpError::JavaScript(message) => HostError::Evaluation(message),
        other => HostError::Protocol(other.to_string()),
    }
}

#[cfg(test)]
#[path = "host_tests.rs"]
mod tests;
