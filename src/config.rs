//! Provider configuration.
//!
//! Holds the settings snapshot captured at provider construction and the
//! lazy header builder derived from it. Header resolution is deliberately
//! deferred: a credential supplied only through the environment after
//! construction is still honored, and construction itself never fails.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue, USER_AGENT};
use secrecy::{ExposeSecret, SecretString};

use crate::error::OllmError;

/// Default OLLM proxy endpoint.
pub const DEFAULT_BASE_URL: &str = "http://localhost:4000/v1";

/// Environment variable supplying the API key when none is set explicitly.
pub const API_KEY_ENV_VAR: &str = "OLLM_API_KEY";

/// Client-identification suffix appended to the `User-Agent` header.
const USER_AGENT_SUFFIX: &str = concat!("ollm-provider/", env!("CARGO_PKG_VERSION"));

static EMPTY_KEY: Lazy<SecretString> = Lazy::new(|| SecretString::from(String::new()));

/// Resolved provider configuration shared by all model handles.
///
/// The base URL is normalized once; everything header-related stays
/// unresolved until [`OllmConfig::request_headers`] is invoked. That method
/// is side-effect-free and builds a fresh map on every call, so it is safe
/// to invoke concurrently from multiple in-flight requests and credential
/// rotation between calls is honored.
#[derive(Clone)]
pub struct OllmConfig {
    base_url: String,
    api_key: Option<SecretString>,
    headers: HashMap<String, String>,
    http_client: Option<reqwest::Client>,
}

impl std::fmt::Debug for OllmConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OllmConfig")
            .field("base_url", &self.base_url)
            .field("has_api_key", &self.api_key.is_some())
            .field("headers", &self.headers.keys().collect::<Vec<_>>())
            .field("has_http_client", &self.http_client.is_some())
            .finish()
    }
}

impl OllmConfig {
    pub(crate) fn new(
        api_key: Option<SecretString>,
        base_url: Option<String>,
        headers: HashMap<String, String>,
        http_client: Option<reqwest::Client>,
    ) -> Self {
        let base_url = base_url
            .map(|url| normalize_base_url(&url))
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        Self {
            base_url,
            api_key,
            headers,
            http_client,
        }
    }

    /// Base URL with no trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn http_client(&self) -> Option<&reqwest::Client> {
        self.http_client.as_ref()
    }

    /// Build the headers for one request.
    ///
    /// Resolution order:
    /// 1. API key: explicit setting, else [`API_KEY_ENV_VAR`]. Missing both
    ///    fails with [`OllmError::MissingApiKey`] here, at invocation time.
    /// 2. `Content-Type: application/json`.
    /// 3. Caller-supplied static headers.
    /// 4. `User-Agent` client-identification suffix, preserving any
    ///    caller-supplied value.
    /// 5. `Authorization: Bearer <key>` — always wins over a caller-supplied
    ///    `Authorization` header.
    pub fn request_headers(&self) -> Result<HeaderMap, OllmError> {
        let api_key = self.resolve_api_key()?;

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        for (k, v) in &self.headers {
            let name: HeaderName = k.parse().map_err(|e| {
                OllmError::InvalidParameter(format!("Invalid header name '{k}': {e}"))
            })?;
            let value: HeaderValue = v.parse().map_err(|e| {
                OllmError::InvalidParameter(format!("Invalid header value '{v}': {e}"))
            })?;
            headers.insert(name, value);
        }

        let user_agent = match headers.get(USER_AGENT).and_then(|v| v.to_str().ok()) {
            Some(existing) => format!("{existing} {USER_AGENT_SUFFIX}"),
            None => USER_AGENT_SUFFIX.to_string(),
        };
        headers.insert(
            USER_AGENT,
            user_agent.parse().map_err(|e| {
                OllmError::InvalidParameter(format!("Invalid User-Agent value: {e}"))
            })?,
        );

        headers.insert(
            AUTHORIZATION,
            format!("Bearer {}", api_key.expose_secret())
                .parse()
                .map_err(|e| OllmError::InvalidParameter(format!("Invalid API key: {e}")))?,
        );

        Ok(headers)
    }

    fn resolve_api_key(&self) -> Result<SecretString, OllmError> {
        if let Some(key) = &self.api_key {
            return Ok(key.clone());
        }
        std::env::var(API_KEY_ENV_VAR)
            .map(SecretString::from)
            .map_err(|_| {
                OllmError::MissingApiKey(format!(
                    "OLLM API key not provided; set it explicitly or export {API_KEY_ENV_VAR}"
                ))
            })
    }
}

/// Binding consumed by the delegated client: URL builder + per-request
/// header builder. `headers` re-runs [`OllmConfig::request_headers`] on
/// every call; the fallible path has already been exercised by the handle
/// before the request was issued, so a failure here is logged and yields an
/// unauthenticated request the proxy will reject.
impl async_openai::config::Config for OllmConfig {
    fn headers(&self) -> HeaderMap {
        self.request_headers().unwrap_or_else(|e| {
            tracing::warn!("header resolution failed after dispatch: {e}");
            let mut headers = HeaderMap::new();
            headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
            headers
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn query(&self) -> Vec<(&str, &str)> {
        vec![]
    }

    fn api_base(&self) -> &str {
        &self.base_url
    }

    fn api_key(&self) -> &SecretString {
        self.api_key.as_ref().unwrap_or(&EMPTY_KEY)
    }
}

/// Strip a single trailing slash; the stored base URL never carries one.
fn normalize_base_url(url: &str) -> String {
    url.strip_suffix('/').unwrap_or(url).to_string()
}
