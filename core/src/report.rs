//! Human-readable verdicts on response bodies.
//!
//! `Verdict` is the value callers assert on; `report` additionally prints
//! the fixed two-line diagnostic for someone watching the console.

use std::fmt;
use std::io::{self, Write};

use crate::json::validate_json;

pub const SEPARATOR: &str =
    "======================================================================================";

const PASS: &str = "YES";
const FAIL: &str = "IT IS NOT CORRECT!!!";

/// Whether a body was well-formed JSON, with a message explaining why not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    pub well_formed: bool,
    pub message: String,
}

impl Verdict {
    pub fn of(text: &str) -> Self {
        match validate_json(text) {
            Ok(()) => Self {
                well_formed: true,
                message: "well-formed JSON".to_string(),
            },
            Err(e) => Self {
                well_formed: false,
                message: e.to_string(),
            },
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let answer = if self.well_formed { PASS } else { FAIL };
        write!(f, "Is json correct? {answer}")
    }
}

/// Check `text` and print the diagnostic to stdout.
pub fn report(text: &str) -> Verdict {
    let verdict = Verdict::of(text);
    let stdout = io::stdout();
    // Write errors are ignored; the verdict is the result.
    let _ = write_report(&mut stdout.lock(), &verdict);
    verdict
}

/// Write the separator line and the verdict line to `out`.
pub fn write_report<W: Write>(out: &mut W, verdict: &Verdict) -> io::Result<()> {
    writeln!(out, "{SEPARATOR}")?;
    writeln!(out, "{verdict}")
}
