//! Authenticated API client
//!
//! Single choke point for every outbound call to the backend: URL
//! construction, bearer-token header injection, JSON/form execution,
//! response parsing, error normalization, and session-expiry handling.

use std::sync::{Arc, RwLock};
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, error, warn};

use jibu_core::{ApiError, CredentialStore, SessionListener};
use jibu_shared::errors::ErrorBody;
use jibu_shared::ApiConfig;

use crate::error::ClientError;
use crate::http::RequestOptions;

const JSON_CONTENT_TYPE: &str = "application/json";
const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// HTTP client for the Jibu chat backend
///
/// The credential store is injected so token lifecycle stays testable; on a
/// 401 response the client clears the store, notifies registered
/// [`SessionListener`]s exactly once, and fails with
/// [`ClientError::Unauthorized`]. All other failures are reported upward
/// without side effects, and nothing is retried at this layer.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    credentials: Arc<dyn CredentialStore>,
    listeners: RwLock<Vec<Arc<dyn SessionListener>>>,
}

impl ApiClient {
    /// Create a new API client
    ///
    /// Trailing slashes are trimmed from the configured base URL up front to
    /// prevent double-slash issues when joining endpoint paths.
    pub fn new(
        config: ApiConfig,
        credentials: Arc<dyn CredentialStore>,
    ) -> Result<Self, ClientError> {
        if !config.is_valid() {
            return Err(ClientError::Config(format!(
                "base URL must use http or https: {}",
                config.base_url
            )));
        }

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            credentials,
            listeners: RwLock::new(Vec::new()),
        })
    }

    /// Register an observer for session expiry
    ///
    /// Listeners are notified exactly once per unauthorized response, after
    /// the credential store has been cleared.
    pub fn add_session_listener(&self, listener: Arc<dyn SessionListener>) {
        self.listeners
            .write()
            .expect("session listener lock poisoned")
            .push(listener);
    }

    /// Build a full URL by joining the base URL with an endpoint path
    ///
    /// Exactly one leading slash is stripped from `path`, so
    /// `build_url("test")` and `build_url("/test")` are identical.
    pub fn build_url(&self, path: &str) -> String {
        let path = path.strip_prefix('/').unwrap_or(path);
        format!("{}/{}", self.base_url, path)
    }

    /// Build the default header set for a request
    ///
    /// Contains `Content-Type: application/json`, an
    /// `Authorization: Bearer <token>` entry iff a token is currently
    /// stored (no empty header otherwise), and `extra` merged on top with
    /// extra keys overriding defaults.
    pub fn auth_headers(&self, extra: Option<&HeaderMap>) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE));

        if let Some(token) = self.credentials.get() {
            match HeaderValue::from_str(&format!("Bearer {token}")) {
                Ok(value) => {
                    headers.insert(AUTHORIZATION, value);
                }
                Err(_) => {
                    // A token that cannot form a header is unusable anyway
                    warn!("stored token contains invalid header characters, skipping");
                }
            }
        }

        if let Some(extra) = extra {
            for (name, value) in extra {
                headers.insert(name.clone(), value.clone());
            }
        }

        headers
    }

    /// Perform a JSON request against the backend
    ///
    /// The response body is always parsed as JSON. Non-2xx statuses are
    /// normalized into [`ApiError`] with documented fallbacks; a 401 clears
    /// the credential store and notifies session listeners before any body
    /// handling. Transport and parse failures are logged and propagated
    /// as-is.
    pub async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        options: RequestOptions,
    ) -> Result<T, ClientError> {
        let url = self.build_url(path);
        let headers = self.auth_headers(Some(&options.headers));

        debug!(%method, url = %url, "sending API request");

        let mut builder = self.http.request(method, &url).headers(headers);
        if let Some(body) = &options.body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(|err| {
            error!(url = %url, error = %err, "API request failed");
            ClientError::Transport(err)
        })?;

        self.process_response(&url, response).await
    }

    /// Perform a URL-encoded form request against the backend
    ///
    /// Identical contract to [`ApiClient::request`], except the body is
    /// form-encoded from `fields` (order preserved) and the method defaults
    /// to POST when `options` does not override it.
    pub async fn request_form<T: DeserializeOwned>(
        &self,
        path: &str,
        fields: &[(&str, &str)],
        options: RequestOptions,
    ) -> Result<T, ClientError> {
        let url = self.build_url(path);
        let method = options.method.clone().unwrap_or(Method::POST);

        let mut headers = self.auth_headers(None);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(FORM_CONTENT_TYPE));
        for (name, value) in &options.headers {
            headers.insert(name.clone(), value.clone());
        }

        debug!(%method, url = %url, "sending form API request");

        let response = self
            .http
            .request(method, &url)
            .headers(headers)
            .form(fields)
            .send()
            .await
            .map_err(|err| {
                error!(url = %url, error = %err, "API request failed");
                ClientError::Transport(err)
            })?;

        self.process_response(&url, response).await
    }

    /// GET a JSON resource
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        self.request(Method::GET, path, RequestOptions::new()).await
    }

    /// POST a JSON payload
    pub async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ClientError> {
        self.request(Method::POST, path, RequestOptions::new().with_json(body)?)
            .await
    }

    /// PUT a JSON payload
    pub async fn put<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ClientError> {
        self.request(Method::PUT, path, RequestOptions::new().with_json(body)?)
            .await
    }

    /// POST a URL-encoded form
    pub async fn post_form<T: DeserializeOwned>(
        &self,
        path: &str,
        fields: &[(&str, &str)],
    ) -> Result<T, ClientError> {
        self.request_form(path, fields, RequestOptions::new()).await
    }

    async fn process_response<T: DeserializeOwned>(
        &self,
        url: &str,
        response: reqwest::Response,
    ) -> Result<T, ClientError> {
        let status = response.status();

        // Session expiry is handled before any body parsing, and regardless
        // of whether the body is parseable at all.
        if status == StatusCode::UNAUTHORIZED {
            warn!(url = %url, "unauthorized response, discarding session");
            self.credentials.clear();
            self.notify_session_expired();
            return Err(ClientError::Unauthorized);
        }

        let text = response.text().await.map_err(|err| {
            error!(url = %url, error = %err, "failed to read response body");
            ClientError::Transport(err)
        })?;

        let value: serde_json::Value = serde_json::from_str(&text).map_err(|err| {
            error!(url = %url, error = %err, "response body is not valid JSON");
            ClientError::Parse(err)
        })?;

        if !status.is_success() {
            let api_error = ApiError::from_body(status.as_u16(), ErrorBody::from_value(&value));
            debug!(url = %url, code = %api_error.code, status = api_error.status, "API error response");
            return Err(ClientError::Api(api_error));
        }

        serde_json::from_value(value).map_err(|err| {
            error!(url = %url, error = %err, "response body did not match expected shape");
            ClientError::Parse(err)
        })
    }

    fn notify_session_expired(&self) {
        let listeners = self
            .listeners
            .read()
            .expect("session listener lock poisoned");
        for listener in listeners.iter() {
            listener.on_session_expired();
        }
    }
}
