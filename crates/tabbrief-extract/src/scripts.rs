//! Injected expressions and the restricted-scheme guard.

use tabbrief_protocols::ExtractionRequest;

/// Reads the page's rendered visible text.
pub const ALL_CONTENT_EXPRESSION: &str = "document.body.innerText";

/// Reads the user's current text selection; empty string if none.
pub const SELECTION_EXPRESSION: &str = "window.getSelection().toString()";

/// URL schemes the host forbids script injection into: browser-internal
/// settings pages, DevTools and extension-internal pages, and local files.
pub const RESTRICTED_SCHEMES: &[&str] =
    &["chrome", "edge", "about", "devtools", "chrome-extension", "file"];

/// The expression to inject for a given request.
pub fn expression_for(request: ExtractionRequest) -> &'static str {
    match request {
        ExtractionRequest::AllContent => ALL_CONTENT_EXPRESSION,
        ExtractionRequest::SelectedContent => SELECTION_EXPRESSION,
    }
}

/// Whether the tab URL's scheme forbids injection.
///
/// An unparseable URL is not treated as restricted; injection into such a
/// target fails on its own and reports the host's message.
pub fn is_restricted(tab_url: &str) -> bool {
    match url::Url::parse(tab_url) {
        Ok(parsed) => RESTRICTED_SCHEMES.contains(&parsed.scheme()),
        Err(_) => false,
    }
}

#[cfg(test)]
#[path = "scripts_tests.rs"]
mod tests;
