//! Error types for the smoke-test harness.
//!
//! # Design
//! Two failures matter to callers and they are kept apart: a body that is
//! not JSON (`MalformedJson`, absorbed into a verdict) and a request that
//! never produced a response (`TransportError`, always propagated).

use std::fmt;

use thiserror::Error;

/// The response body could not be parsed as JSON.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("malformed JSON at line {line}, column {column}: {message}")]
pub struct MalformedJson {
    pub message: String,
    pub line: usize,
    pub column: usize,
}

/// Broad category of a transport failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportErrorKind {
    /// Connection refused, reset, or otherwise not established.
    Connection,
    /// The host name did not resolve.
    Dns,
    Timeout,
    /// The peer answered with something that is not valid HTTP.
    Protocol,
    Other,
}

impl fmt::Display for TransportErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TransportErrorKind::Connection => "connection failed",
            TransportErrorKind::Dns => "host not found",
            TransportErrorKind::Timeout => "timed out",
            TransportErrorKind::Protocol => "protocol error",
            TransportErrorKind::Other => "transport error",
        };
        f.write_str(name)
    }
}

/// The request did not yield an HTTP response.
#[derive(Debug, Error)]
#[error("{kind} for {url}: {message}")]
pub struct TransportError {
    pub url: String,
    pub kind: TransportErrorKind,
    pub message: String,
}

/// Failure of a one-shot `send_request`: either the base address was
/// rejected before anything was sent, or the request itself failed.
#[derive(Debug, Error)]
pub enum HarnessError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Transport(#[from] TransportError),
}

/// The configured base address is unusable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("base URL is empty")]
    EmptyBaseUrl,

    #[error("invalid base URL {url:?}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("unsupported scheme {scheme:?} in base URL, expected http or https")]
    UnsupportedScheme { scheme: String },
}

/// A method name outside GET/POST/PUT/DELETE.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported HTTP method: {0}")]
pub struct InvalidMethod(pub String);
