//! Result values handed back to callers of the harness.

use serde::Serialize;

use crate::report::Verdict;

/// The outcome of one request: status, raw body, and whether the body was
/// well-formed JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResponseOutcome {
    pub status: u16,
    pub body: String,
    pub well_formed_json: bool,
}

impl ResponseOutcome {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Parse the body, when it is JSON, into a `serde_json::Value`.
    pub fn json(&self) -> Option<serde_json::Value> {
        if !self.well_formed_json {
            return None;
        }
        serde_json::from_str(&self.body).ok()
    }

    pub fn verdict(&self) -> Verdict {
        Verdict::of(&self.body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(status: u16, body: &str, well_formed_json: bool) -> ResponseOutcome {
        ResponseOutcome {
            status,
            body: body.to_string(),
            well_formed_json,
        }
    }

    #[test]
    fn success_range_is_2xx() {
        assert!(outcome(200, "", false).is_success());
        assert!(outcome(204, "", false).is_success());
        assert!(!outcome(404, "", false).is_success());
        assert!(!outcome(500, "", false).is_success());
    }

    #[test]
    fn json_is_only_parsed_when_well_formed() {
        let ok = outcome(200, r#"{"ok":true}"#, true);
        assert_eq!(ok.json(), Some(serde_json::json!({"ok": true})));
        assert_eq!(outcome(200, "nope", false).json(), None);
    }

    #[test]
    fn serializes_for_machine_consumers() {
        let value = serde_json::to_value(outcome(201, "{}", true)).unwrap();
        assert_eq!(value["status"], 201);
        assert_eq!(value["well_formed_json"], true);
    }
}
