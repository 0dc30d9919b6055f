//! Smoke-test harness for JSON REST services.
//!
//! # Overview
//! Sends one HTTP request to a base address plus path and reports whether
//! the response body is syntactically valid JSON. Status codes and bodies
//! are returned as data; only transport failures are errors.
//!
//! # Design
//! - `SmokeClient` is stateless apart from its `HarnessConfig`.
//! - Request building and response interpretation are pure; `transport`
//!   is the only module doing I/O (host-does-IO pattern).
//! - JSON problems become a `Verdict`, never an error. Transport problems
//!   become a `TransportError`, never a fabricated outcome.

pub mod client;
pub mod config;
pub mod endpoint;
pub mod error;
pub mod http;
pub mod json;
pub mod report;
pub mod transport;
pub mod types;

pub use client::{send_request, SmokeClient};
pub use config::HarnessConfig;
pub use endpoint::Endpoint;
pub use error::{ConfigError, HarnessError, InvalidMethod, MalformedJson, TransportError, TransportErrorKind};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use json::{check_json_well_formed, validate_json};
pub use report::{report, Verdict};
pub use types::ResponseOutcome;
