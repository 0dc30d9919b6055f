//! Endpoint descriptors and URL construction.
//!
//! # Design
//! The base and path are joined with exactly one `/`: trailing slashes are
//! stripped from the base and leading slashes from the path, so
//! `"http://host/" + "/teams"` and `"http://host" + "teams"` dispatch to the
//! same URL. Parameters become a query string for GET and DELETE and a
//! form-urlencoded body for POST and PUT.

use url::form_urlencoded;

use crate::http::HttpMethod;

/// Everything needed to identify one HTTP call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    base: String,
    path: String,
    method: HttpMethod,
    params: Vec<(String, String)>,
}

impl Endpoint {
    pub fn new(base: &str, method: HttpMethod, path: &str) -> Self {
        Self {
            base: base.to_string(),
            path: path.to_string(),
            method,
            params: Vec::new(),
        }
    }

    /// Append one parameter. Order is preserved and keys may repeat.
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    pub fn with_params<I, K, V>(mut self, params: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.params
            .extend(params.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn method(&self) -> HttpMethod {
        self.method
    }

    pub fn params(&self) -> &[(String, String)] {
        &self.params
    }

    /// The URL the request is dispatched to, including the query string for
    /// methods that do not carry a body.
    pub fn url(&self) -> String {
        let mut url = join_url(&self.base, &self.path);
        if !self.method.carries_body() && !self.params.is_empty() {
            url.push(if url.contains('?') { '&' } else { '?' });
            url.push_str(&encode_params(&self.params));
        }
        url
    }

    /// The form-urlencoded body, present only for POST and PUT.
    pub fn form_body(&self) -> Option<String> {
        self.method
            .carries_body()
            .then(|| encode_params(&self.params))
    }
}

/// Join `base` and `path` with exactly one separating slash.
pub fn join_url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    format!("{base}/{path}")
}

fn encode_params(params: &[(String, String)]) -> String {
    form_urlencoded::Serializer::new(String::new())
        .extend_pairs(params.iter().map(|(k, v)| (k.as_str(), v.as_str())))
        .finish()
}
