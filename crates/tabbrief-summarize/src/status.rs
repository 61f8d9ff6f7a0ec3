//! Terminal request statuses.

/// How a request ended. Every pipeline path terminates in exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminalStatus {
    /// A structured summary was rendered.
    Summarized,

    /// The model answered but its output did not parse; the raw text was
    /// rendered instead.
    SummarizedUnparsed,

    /// The page had no extractable text.
    NoText,

    /// Nothing was selected.
    NothingSelected,

    /// The page forbids script injection.
    RestrictedPage,

    /// Tab resolution or injection failed.
    ScriptingError,

    /// The model capability is absent or disabled.
    ModelUnavailable,

    /// The model call itself failed.
    InvocationFailed,

    /// A request was already in flight.
    Busy,
}

impl TerminalStatus {
    /// The status line published when the request ends.
    pub fn message(&self) -> &'static str {
        match self {
            TerminalStatus::Summarized => "Summary ready.",
            TerminalStatus::SummarizedUnparsed => {
                "Summary ready, but the model output could not be parsed."
            }
            TerminalStatus::NoText => "The page has no extractable text.",
            TerminalStatus::NothingSelected => "Nothing is selected on the page.",
            TerminalStatus::RestrictedPage => "Scripts cannot run on this page.",
            TerminalStatus::ScriptingError => "Could not read the page.",
            TerminalStatus::ModelUnavailable => "The language model is unavailable.",
            TerminalStatus::InvocationFailed => "The language model call failed.",
            TerminalStatus::Busy => "A summarization is already running.",
        }
    }
}
