//! The summarization orchestrator.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tracing::{debug, warn};

use tabbrief_extract::ExtractionRelay;
use tabbrief_protocols::{
    summary_schema, Availability, ExtractError, ExtractionReply, ExtractionRequest, LanguageModel,
    ModelError, SessionConfig, StatusSink, SummaryOutcome,
};

use crate::prompt::{build_prompt, DEFAULT_MAX_PROMPT_CHARS};
use crate::render::{render_model_failure, render_summary, render_unparsed};
use crate::status::TerminalStatus;
use crate::ticker::ElapsedTicker;
use crate::parse::parse_summary;

/// Outcome of one request: the transcript to display and how it ended.
#[derive(Debug, Clone)]
pub struct SummaryReport {
    pub transcript: String,
    pub status: TerminalStatus,
}

/// Drives one extraction-and-summarization pipeline at a time.
///
/// Owns the elapsed ticker and the status surface for the lifetime of a
/// request; instances are independent, so tests can run several without
/// interference.
pub struct Orchestrator {
    relay: ExtractionRelay,
    model: Arc<dyn LanguageModel>,
    sink: Arc<dyn StatusSink>,
    language: String,
    max_prompt_chars: usize,
    in_flight: AtomicBool,
}

impl Orchestrator {
    pub fn new(
        relay: ExtractionRelay,
        model: Arc<dyn LanguageModel>,
        sink: Arc<dyn StatusSink>,
    ) -> Self {
        Self {
            relay,
            model,
            sink,
            language: "en".to_string(),
            max_prompt_chars: DEFAULT_MAX_PROMPT_CHARS,
            in_flight: AtomicBool::new(false),
        }
    }

    /// Set the expected output language for model sessions.
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Cap the extracted text interpolated into the prompt; `0` disables.
    pub fn with_max_prompt_chars(mut self, max_chars: usize) -> Self {
        self.max_prompt_chars = max_chars;
        self
    }

    /// Run one request to a terminal status. Never returns an error: every
    /// failure becomes a transcript plus status.
    pub async fn run(&self, request: ExtractionRequest) -> SummaryReport {
        let Some(_guard) = FlightGuard::acquire(&self.in_flight) else {
            return self.finish(
                TerminalStatus::Busy,
                TerminalStatus::Busy.message().to_string(),
            );
        };

        let text = match self.relay.handle(request).await {
            ExtractionReply::Extracted { text } => text,
            ExtractionReply::Failed { error } => {
                let status = match error {
                    ExtractError::RestrictedPage { .. } => TerminalStatus::RestrictedPage,
                    _ => TerminalStatus::ScriptingError,
                };
                return self.finish(status, error.to_string());
            }
        };

        if text.trim().is_empty() {
            let status = match request {
                ExtractionRequest::AllContent => TerminalStatus::NoText,
                ExtractionRequest::SelectedContent => TerminalStatus::NothingSelected,
            };
            return self.finish(status, status.message().to_string());
        }

        debug!(chars = text.chars().count(), "extracted text; invoking model");

        // The ticker lives exactly as long as the model work.
        let outcome = {
            let _ticker = ElapsedTicker::start(self.sink.clone());
            self.invoke_model(&text).await
        };

        match outcome {
            Ok(SummaryOutcome::Structured(summary)) => {
                self.finish(TerminalStatus::Summarized, render_summary(&summary))
            }
            Ok(SummaryOutcome::Unparsed { raw }) => {
                self.finish(TerminalStatus::SummarizedUnparsed, render_unparsed(&raw))
            }
            Err(ModelError::Unavailable(reason)) => self.finish(
                TerminalStatus::ModelUnavailable,
                render_model_failure(&reason),
            ),
            Err(error) => self.finish(
                TerminalStatus::InvocationFailed,
                render_model_failure(&error.to_string()),
            ),
        }
    }

    /// Availability check, session, prompt, validating parse.
    ///
    /// A parse failure is not an error here: the raw text is still a usable
    /// outcome.
    async fn invoke_model(&self, text: &str) -> Result<SummaryOutcome, ModelError> {
        if let Availability::Unavailable(reason) = self.model.availability().await {
            return Err(ModelError::Unavailable(reason));
        }

        let session = self
            .model
            .open_session(SessionConfig::new(self.language.clone()))
            .await?;

        let prompt = build_prompt(text, self.max_prompt_chars);
        let raw = session.prompt(&prompt, Some(summary_schema())).await?;

        match parse_summary(&raw) {
            Ok(summary) => Ok(SummaryOutcome::Structured(summary)),
            Err(failure) => {
                warn!(%failure, "model output failed the schema-checked parse");
                Ok(SummaryOutcome::Unparsed { raw })
            }
        }
    }

    fn finish(&self, status: TerminalStatus, transcript: String) -> SummaryReport {
        self.sink.publish(status.message());
        SummaryReport { transcript, status }
    }
}

/// Clears the in-flight flag when the request scope ends.
struct FlightGuard<'a> {
    flag: &'a AtomicBool,
}

impl<'a> FlightGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
            .then_some(Self { flag })
    }
}

impl Drop for FlightGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}

#[cfg(test)]
#[path = "orchestrator_tests.rs"]
mod tests;
