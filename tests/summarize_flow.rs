//! End-to-end pipeline tests over in-process fakes: relay and orchestrator
//! wired exactly as the binary wires them, with the two host capabilities
//! replaced by stubs.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{json, Value};

use tabbrief_extract::ExtractionRelay;
use tabbrief_protocols::{
    Availability, ExtractionRequest, HostError, InjectionResult, LanguageModel, ModelError,
    ModelSession, ScriptingHost, SessionConfig, StatusSink, TabInfo,
};
use tabbrief_summarize::{Orchestrator, TerminalStatus};

struct StubHost {
    url: &'static str,
    page_text: &'static str,
    selection: &'static str,
}

#[async_trait]
impl ScriptingHost for StubHost {
    async fn active_tab(&self) -> Result<Option<TabInfo>, HostError> {
        Ok(Some(TabInfo {
            target_id: "TAB1".to_string(),
            title: "Stub page".to_string(),
            url: self.url.to_string(),
        }))
    }

    async fn run_in_tab(
        &self,
        _target_id: &str,
        expression: &str,
    ) -> Result<Vec<InjectionResult>, HostError> {
        let text = match expression {
            "document.body.innerText" => self.page_text,
            "window.getSelection().toString()" => self.selection,
            other => panic!("unexpected expression injected: {other}"),
        };
        Ok(vec![InjectionResult::new(json!(text))])
    }
}

struct StubModel {
    response: &'static str,
}

#[async_trait]
impl LanguageModel for StubModel {
    fn id(&self) -> &str {
        "stub"
    }

    async fn availability(&self) -> Availability {
        Availability::Ready
    }

    async fn open_session(
        &self,
        _config: SessionConfig,
    ) -> Result<Box<dyn ModelSession>, ModelError> {
        Ok(Box::new(StubSession {
            response: self.response,
        }))
    }
}

struct StubSession {
    response: &'static str,
}

#[async_trait]
impl ModelSession for StubSession {
    async fn prompt(
        &self,
        input: &str,
        constraint: Option<&Value>,
    ) -> Result<String, ModelError> {
        // The pipeline interpolates the extracted text and always sends the
        // structural constraint.
        assert!(input.contains("Page content:"));
        let schema = constraint.expect("schema constraint missing");
        assert_eq!(schema["additionalProperties"], false);
        Ok(self.response.to_string())
    }
}

struct SilentSink;

impl StatusSink for SilentSink {
    fn publish(&self, _status: &str) {}
}

fn pipeline(host: StubHost, response: &'static str) -> Orchestrator {
    Orchestrator::new(
        ExtractionRelay::new(Arc::new(host)),
        Arc::new(StubModel { response }),
        Arc::new(SilentSink),
    )
}

#[tokio::test]
async fn full_page_summary_end_to_end() {
    let host = StubHost {
        url: "https://example.com/article",
        page_text: "A long article about crabs.",
        selection: "",
    };
    let response = r#"{"heading":"Crabs","sections":[{"subheading":"Overview","content":"They scuttle."}]}"#;

    let report = pipeline(host, response)
        .run(ExtractionRequest::AllContent)
        .await;

    assert_eq!(report.status, TerminalStatus::Summarized);
    assert_eq!(
        report.transcript,
        "CRABS\n========================================\n\n--- OVERVIEW ---\nThey scuttle."
    );
}

#[tokio::test]
async fn selection_summary_end_to_end() {
    let host = StubHost {
        url: "https://example.com/article",
        page_text: "ignored",
        selection: "Just this sentence.",
    };
    let response = r#"{"heading":"Selection","sections":[{"subheading":"Gist","content":"One sentence."}]}"#;

    let report = pipeline(host, response)
        .run(ExtractionRequest::SelectedContent)
        .await;

    assert_eq!(report.status, TerminalStatus::Summarized);
    assert!(report.transcript.starts_with("SELECTION\n"));
}

#[tokio::test]
async fn empty_selection_never_reaches_model() {
    let host = StubHost {
        url: "https://example.com/article",
        page_text: "ignored",
        selection: "",
    };
    // A model response that would fail the test's assertions if prompted.
    let report = pipeline(host, "unreachable")
        .run(ExtractionRequest::SelectedContent)
        .await;

    assert_eq!(report.status, TerminalStatus::NothingSelected);
}

#[tokio::test]
async fn restricted_page_reported_without_injection() {
    let host = StubHost {
        url: "chrome://settings/",
        page_text: "internal",
        selection: "",
    };

    let report = pipeline(host, "unreachable")
        .run(ExtractionRequest::AllContent)
        .await;

    assert_eq!(report.status, TerminalStatus::RestrictedPage);
    assert!(report.transcript.contains("chrome://settings/"));
}

#[tokio::test]
async fn malformed_model_output_surfaces_raw_text() {
    let host = StubHost {
        url: "https://example.com/",
        page_text: "Some text.",
        selection: "",
    };

    let report = pipeline(host, "Sure! Here's a summary: crabs are great.")
        .run(ExtractionRequest::AllContent)
        .await;

    assert_eq!(report.status, TerminalStatus::SummarizedUnparsed);
    assert!(report
        .transcript
        .contains("Sure! Here's a summary: crabs are great."));
}
