//! JSON well-formedness checks.

use serde::de::IgnoredAny;

use crate::error::MalformedJson;

/// Parse `text` as JSON and discard the value.
pub fn validate_json(text: &str) -> Result<(), MalformedJson> {
    serde_json::from_str::<IgnoredAny>(text)
        .map(|_| ())
        .map_err(|e| MalformedJson {
            message: e.to_string(),
            line: e.line(),
            column: e.column(),
        })
}

/// True iff `text` is syntactically valid JSON.
pub fn check_json_well_formed(text: &str) -> bool {
    validate_json(text).is_ok()
}
