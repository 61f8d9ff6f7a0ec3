//! Ollama model host implementation.

use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

use tabbrief_protocols::{
    Availability, LanguageModel, ModelError, ModelSession, SessionConfig,
};

use crate::api::{ChatMessage, ChatRequest, ChatResponse};

/// Generative model backed by a local Ollama server.
pub struct OllamaModel {
    endpoint: String,
    model: String,
    client: reqwest::Client,
}

impl OllamaModel {
    pub fn new(endpoint: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into().trim_end_matches('/').to_string(),
            model: model.into(),
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl LanguageModel for OllamaModel {
    fn id(&self) -> &str {
        "ollama"
    }

    async fn availability(&self) -> Availability {
        let url = format!("{}/api/version", self.endpoint);
        match self.client.get(&url).send().await {
            Ok(response) if response.status().is_success() => Availability::Ready,
            Ok(response) => {
                Availability::Unavailable(format!("version probe returned {}", response.status()))
            }
            Err(e) => Availability::Unavailable(e.to_string()),
        }
    }

    async fn open_session(
        &self,
        config: SessionConfig,
    ) -> Result<Box<dyn ModelSession>, ModelError> {
        debug!(language = %config.language, model = %self.model, "opening model session");
        Ok(Box::new(OllamaSession {
            client: self.client.clone(),
            chat_url: format!("{}/api/chat", self.endpoint),
            model: self.model.clone(),
            system: format!("Always respond in the language with tag \"{}\".", config.language),
        }))
    }
}

struct OllamaSession {
    client: reqwest::Client,
    chat_url: String,
    model: String,
    system: String,
}

#[async_trait]
impl ModelSession for OllamaSession {
    async fn prompt(
        &self,
        input: &str,
        constraint: Option<&Value>,
    ) -> Result<String, ModelError> {
        let request = ChatRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage::system(&self.system),
                ChatMessage::user(input),
            ],
            stream: false,
            format: constraint.cloned(),
        };

        let response = self
            .client
            .post(&self.chat_url)
            .json(&request)
            .send()
            .await
            .map_err(|e| ModelError::Network(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            // Ollama error JSON: {"error": "..."}
            let message = serde_json::from_str::<Value>(&body)
                .ok()
                .and_then(|v| v["error"].as_str().map(String::from))
                .unwrap_or(body);
            return Err(ModelError::Api { status, message });
        }

        let chat: ChatResponse = response
            .json()
            .await
            .map_err(|e| ModelError::Network(e.to_string()))?;

        Ok(chat.message.content)
    }
}

#[cfg(test)]
#[path = "provider_tests.rs"]
mod tests;
