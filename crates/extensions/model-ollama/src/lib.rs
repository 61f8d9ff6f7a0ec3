//! # tabbrief Ollama Model
//!
//! [`LanguageModel`](tabbrief_protocols::LanguageModel) implementation over a
//! locally running Ollama server. Availability maps to a version probe;
//! structured output constraints are forwarded as the `format` field of the
//! chat call.

mod api;
mod provider;

pub use provider::OllamaModel;
