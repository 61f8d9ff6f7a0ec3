//! Schema-validating parse of model output.

use once_cell::sync::Lazy;
use serde_json::Value;

use tabbrief_protocols::{summary_schema, ParseFailure, Summary};

static SUMMARY_VALIDATOR: Lazy<jsonschema::Validator> =
    Lazy::new(|| jsonschema::validator_for(summary_schema()).expect("summary schema compiles"));

/// Parse a model response into a [`Summary`].
///
/// Distinguishes "not JSON" from "valid JSON of the wrong shape"; callers
/// fold both into the same fallback rendering but log the variant.
pub fn parse_summary(raw: &str) -> Result<Summary, ParseFailure> {
    let value: Value =
        serde_json::from_str(raw).map_err(|e| ParseFailure::NotJson(e.to_string()))?;

    if let Err(error) = SUMMARY_VALIDATOR.validate(&value) {
        return Err(ParseFailure::WrongShape(error.to_string()));
    }

    serde_json::from_value(value).map_err(|e| ParseFailure::WrongShape(e.to_string()))
}

#[cfg(test)]
#[path = "parse_tests.rs"]
mod tests;
