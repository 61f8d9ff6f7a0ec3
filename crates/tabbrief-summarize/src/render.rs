//! Transcript rendering.

use tabbrief_protocols::Summary;

const RULE_WIDTH: usize = 40;

/// Render a parsed summary as a plain-text transcript.
///
/// Heading upper-cased and underlined with a fixed-width rule; each section
/// as `--- SUBHEADING ---` followed by its content; sections separated by a
/// blank line; trailing whitespace trimmed.
pub fn render_summary(summary: &Summary) -> String {
    let mut out = String::new();
    out.push_str(&summary.heading.to_uppercase());
    out.push('\n');
    out.push_str(&"=".repeat(RULE_WIDTH));
    out.push_str("\n\n");

    let sections: Vec<String> = summary
        .sections
        .iter()
        .map(|section| {
            format!(
                "--- {} ---\n{}",
                section.subheading.to_uppercase(),
                section.content
            )
        })
        .collect();
    out.push_str(&sections.join("\n\n"));

    out.trim_end().to_string()
}

/// Fallback transcript for a response that did not parse.
///
/// The verbatim model output is appended unmodified so the user never loses
/// the underlying content.
pub fn render_unparsed(raw: &str) -> String {
    format!(
        "The model's response could not be parsed as a structured summary.\n\
Raw model output follows:\n\n{raw}"
    )
}

/// Transcript for a failed model invocation.
pub fn render_model_failure(reason: &str) -> String {
    format!(
        "Summarization failed: {reason}\n\
The generative model capability may be unsupported or disabled in this environment."
    )
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod tests;
