//! Summary data model and the constant structural output contract.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Structured summary returned by the model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    /// Top-level heading for the whole summary.
    pub heading: String,

    /// Body sections, in order.
    pub sections: Vec<SummarySection>,
}

/// One section of a summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummarySection {
    pub subheading: String,
    pub content: String,
}

/// Outcome of one summarization call.
///
/// A response that fails to parse still carries the raw model text: losing
/// the model's answer is worse than losing the formatting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SummaryOutcome {
    /// The response parsed and validated against the output schema.
    Structured(Summary),

    /// The response did not parse; the verbatim model output is kept.
    Unparsed { raw: String },
}

static SUMMARY_SCHEMA: Lazy<Value> = Lazy::new(|| {
    json!({
        "type": "object",
        "properties": {
            "heading": { "type": "string" },
            "sections": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "subheading": { "type": "string" },
                        "content": { "type": "string" }
                    },
                    "required": ["subheading", "content"]
                }
            }
        },
        "required": ["heading", "sections"],
        "additionalProperties": false
    })
});

/// The structural output constraint passed to every summarization call.
///
/// The shape is a fixed compatibility contract; changing it changes what
/// remote peers and tests accept.
pub fn summary_schema() -> &'static Value {
    &SUMMARY_SCHEMA
}

#[cfg(test)]
#[path = "summary_tests.rs"]
mod tests;
