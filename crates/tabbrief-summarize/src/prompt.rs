//! Prompt construction.

use tracing::warn;

/// Default cap on extracted text interpolated into the prompt, in characters.
pub const DEFAULT_MAX_PROMPT_CHARS: usize = 60_000;

/// Build the single summarization prompt.
///
/// The prompt restates the task and demands a JSON-only response; the same
/// shape is also enforced as a structural constraint on the model call, so
/// the instruction here is the soft half of that contract.
pub fn build_prompt(text: &str, max_chars: usize) -> String {
    let text = truncate_chars(text, max_chars);
    format!(
        "Summarize the following page content into a heading and 2 to 4 sections. \
Give every section a subheading and detailed content.\n\
Respond with nothing but a single JSON object of the form \
{{\"heading\": string, \"sections\": [{{\"subheading\": string, \"content\": string}}]}}.\n\n\
Page content:\n{text}"
    )
}

/// Cap `text` at `max_chars` characters, cutting at a char boundary.
///
/// `0` disables the cap.
fn truncate_chars(text: &str, max_chars: usize) -> &str {
    if max_chars == 0 {
        return text;
    }
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => {
            warn!(
                kept = max_chars,
                dropped_bytes = text.len() - cut,
                "extracted text exceeds the prompt cap; truncating"
            );
            &text[..cut]
        }
        None => text,
    }
}

#[cfg(test)]
#[path = "prompt_tests.rs"]
mod tests;
