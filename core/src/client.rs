//! Stateless request builder and response interpreter for smoke tests.
//!
//! # Design
//! `SmokeClient` holds only its `HarnessConfig`. `build_request` turns an
//! `Endpoint` into an `HttpRequest` and `parse_response` turns an
//! `HttpResponse` into a `ResponseOutcome`; both are pure. `send` is the one
//! method that goes through `transport::execute`.

use tracing::warn;

use crate::config::HarnessConfig;
use crate::endpoint::Endpoint;
use crate::error::{HarnessError, TransportError};
use crate::http::{HttpMethod, HttpRequest, HttpResponse, FORM_CONTENT_TYPE};
use crate::json::check_json_well_formed;
use crate::transport;
use crate::types::ResponseOutcome;

#[derive(Debug, Clone, Default)]
pub struct SmokeClient {
    config: HarnessConfig,
}

impl SmokeClient {
    pub fn new(config: HarnessConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &HarnessConfig {
        &self.config
    }

    /// Start a descriptor for `path` against the configured base.
    pub fn endpoint(&self, method: HttpMethod, path: &str) -> Endpoint {
        Endpoint::new(self.config.base_url(), method, path)
    }

    pub fn build_request(&self, endpoint: &Endpoint) -> HttpRequest {
        let body = endpoint.form_body();
        let headers = match body {
            Some(_) => vec![("content-type".to_string(), FORM_CONTENT_TYPE.to_string())],
            None => Vec::new(),
        };
        HttpRequest {
            method: endpoint.method(),
            url: endpoint.url(),
            headers,
            body,
        }
    }

    pub fn parse_response(&self, response: HttpResponse) -> ResponseOutcome {
        let well_formed_json = check_json_well_formed(&response.body);
        if !well_formed_json {
            warn!(status = response.status, "response body is not well-formed JSON");
        }
        ResponseOutcome {
            status: response.status,
            body: response.body,
            well_formed_json,
        }
    }

    pub fn send(&self, endpoint: &Endpoint) -> Result<ResponseOutcome, TransportError> {
        let response = transport::execute(self.build_request(endpoint))?;
        Ok(self.parse_response(response))
    }
}

/// Send one request to `base` + `path` and report on its body.
///
/// `base` is validated with `HarnessConfig::new` first; an empty, relative
/// or non-http base is a `HarnessError::Config` and nothing is sent.
pub fn send_request(
    base: &str,
    path: &str,
    method: HttpMethod,
    params: Option<&[(String, String)]>,
) -> Result<ResponseOutcome, HarnessError> {
    let client = SmokeClient::new(HarnessConfig::new(base)?);
    let endpoint = client.endpoint(method, path).with_params(
        params
            .unwrap_or_default()
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str())),
    );
    Ok(client.send(&endpoint)?)
}
