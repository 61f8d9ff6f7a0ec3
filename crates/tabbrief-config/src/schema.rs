//! Configuration schema definitions.

use serde::{Deserialize, Serialize};

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub browser: BrowserConfig,

    #[serde(default)]
    pub model: ModelConfig,
}

/// Browser host configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrowserConfig {
    /// DevTools debugging endpoint of the running browser.
    #[serde(default = "default_devtools_endpoint")]
    pub devtools_endpoint: String,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            devtools_endpoint: default_devtools_endpoint(),
        }
    }
}

fn default_devtools_endpoint() -> String {
    "http://localhost:9222".to_string()
}

/// Model host configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelConfig {
    /// Local model server endpoint.
    #[serde(default = "default_model_endpoint")]
    pub endpoint: String,

    /// Model name to open sessions against.
    #[serde(default = "default_model_name")]
    pub name: String,

    /// Expected output language (BCP 47 tag).
    #[serde(default = "default_language")]
    pub language: String,

    /// Cap on extracted text interpolated into the prompt, in characters.
    /// `0` disables the cap.
    #[serde(default = "default_max_prompt_chars")]
    pub max_prompt_chars: usize,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            endpoint: default_model_endpoint(),
            name: default_model_name(),
            language: default_language(),
            max_prompt_chars: default_max_prompt_chars(),
        }
    }
}

fn default_model_endpoint() -> String {
    "http://localhost:11434".to_string()
}

fn default_model_name() -> String {
    "llama3.2".to_string()
}

fn default_language() -> String {
    "en".to_string()
}

fn default_max_prompt_chars() -> usize {
    60_000
}
