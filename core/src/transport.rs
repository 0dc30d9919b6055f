//! Blocking HTTP execution of `HttpRequest` values over ureq.
//!
//! A fresh agent is built for every request, so nothing (connections,
//! cookies) carries over between calls. Status codes are returned as data;
//! only failures below the HTTP response level become `TransportError`.
//! Bodies are read in full, without a size limit.

use std::io;
use std::net::ToSocketAddrs;

use tracing::{debug, warn};
use url::{Host, Url};

use crate::error::{TransportError, TransportErrorKind};
use crate::http::{HttpMethod, HttpRequest, HttpResponse};

/// Execute `req` and wait for the full response body.
pub fn execute(req: HttpRequest) -> Result<HttpResponse, TransportError> {
    let agent = ureq::Agent::config_builder()
        .http_status_as_error(false)
        .build()
        .new_agent();

    debug!(method = %req.method, url = %req.url, "dispatching request");

    let content_type = req.header("content-type").map(str::to_string);
    let result = match (req.method, req.body.as_deref()) {
        (HttpMethod::Get, _) => agent.get(&req.url).call(),
        (HttpMethod::Delete, _) => agent.delete(&req.url).call(),
        (HttpMethod::Post, Some(body)) => with_content_type(agent.post(&req.url), content_type.as_deref())
            .send(body.as_bytes()),
        (HttpMethod::Post, None) => agent.post(&req.url).send_empty(),
        (HttpMethod::Put, Some(body)) => with_content_type(agent.put(&req.url), content_type.as_deref())
            .send(body.as_bytes()),
        (HttpMethod::Put, None) => agent.put(&req.url).send_empty(),
    };

    let mut response = result.map_err(|e| transport_error(&req.url, e))?;

    let status = response.status().as_u16();
    let headers = response
        .headers()
        .iter()
        .filter_map(|(name, value)| {
            value
                .to_str()
                .ok()
                .map(|v| (name.as_str().to_string(), v.to_string()))
        })
        .collect();
    let body = response
        .body_mut()
        .with_config()
        .limit(u64::MAX)
        .read_to_string()
        .map_err(|e| transport_error(&req.url, e))?;

    debug!(status, body_len = body.len(), "response received");

    Ok(HttpResponse {
        status,
        headers,
        body,
    })
}

fn with_content_type(
    builder: ureq::RequestBuilder<ureq::typestate::WithBody>,
    content_type: Option<&str>,
) -> ureq::RequestBuilder<ureq::typestate::WithBody> {
    match content_type {
        Some(ct) => builder.content_type(ct),
        None => builder,
    }
}

fn transport_error(url: &str, err: ureq::Error) -> TransportError {
    let kind = classify(&err, || host_resolves(url));
    warn!(url, %kind, error = %err, "transport failure");
    TransportError {
        url: url.to_string(),
        kind,
        message: err.to_string(),
    }
}

/// Map a ureq error to a kind. The resolver reports lookup failures as
/// plain I/O errors, so an uncategorized I/O error is checked against
/// `host_resolves` to tell DNS failures apart.
fn classify(err: &ureq::Error, host_resolves: impl FnOnce() -> bool) -> TransportErrorKind {
    match err {
        ureq::Error::HostNotFound => TransportErrorKind::Dns,
        ureq::Error::ConnectionFailed => TransportErrorKind::Connection,
        ureq::Error::Timeout(_) => TransportErrorKind::Timeout,
        ureq::Error::Protocol(_) => TransportErrorKind::Protocol,
        ureq::Error::Io(e) => match e.kind() {
            io::ErrorKind::ConnectionRefused
            | io::ErrorKind::ConnectionReset
            | io::ErrorKind::ConnectionAborted
            | io::ErrorKind::NotConnected => TransportErrorKind::Connection,
            io::ErrorKind::TimedOut => TransportErrorKind::Timeout,
            _ if !host_resolves() => TransportErrorKind::Dns,
            _ => TransportErrorKind::Other,
        },
        _ => TransportErrorKind::Other,
    }
}

/// Whether the host of `url` resolves to at least one address. IP literals
/// and unparseable URLs count as resolving.
fn host_resolves(url: &str) -> bool {
    let Ok(parsed) = Url::parse(url) else {
        return true;
    };
    let port = parsed.port_or_known_default().unwrap_or(80);
    match parsed.host() {
        Some(Host::Domain(domain)) => (domain, port)
            .to_socket_addrs()
            .map(|mut addrs| addrs.next().is_some())
            .unwrap_or(false),
        _ => true,
    }
}
