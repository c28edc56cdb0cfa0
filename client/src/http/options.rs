//! Per-request options

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::Method;
use serde::Serialize;

use crate::error::ClientError;

/// Optional per-call overrides for [`crate::ApiClient`] requests
///
/// Headers set here are merged over the client's defaults (the override
/// wins). The method override is only consulted by `request_form`, which
/// defaults to POST; `request` always takes its method explicitly.
#[derive(Debug, Default, Clone)]
pub struct RequestOptions {
    /// Method override for form requests
    pub method: Option<Method>,

    /// Extra headers merged over the defaults
    pub headers: HeaderMap,

    /// JSON body to send with the request
    pub body: Option<serde_json::Value>,
}

impl RequestOptions {
    /// Create empty options
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the request method (form requests only)
    pub fn with_method(mut self, method: Method) -> Self {
        self.method = Some(method);
        self
    }

    /// Add a header, overriding any default of the same name
    pub fn with_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    /// Attach a raw JSON body
    pub fn with_body(mut self, body: serde_json::Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Attach a serializable value as the JSON body
    pub fn with_json<B: Serialize>(self, body: &B) -> Result<Self, ClientError> {
        let value = serde_json::to_value(body)?;
        Ok(self.with_body(value))
    }
}
