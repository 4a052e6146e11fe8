//! OLLM Provider Factory.
//!
//! Translates configuration into bound model constructors. Construction is
//! pure and never fails: no I/O, no credential validation, just closure
//! state. Credential problems surface from the header builder on the first
//! request attempt; unsupported model types are rejected synchronously at
//! dispatch.
//!
//! # Example Usage
//! ```rust,no_run
//! use ollm_provider::{OllmProvider, models};
//!
//! let provider = OllmProvider::builder()
//!     .api_key("your-api-key")
//!     .base_url("https://proxy.example.com/v1")
//!     .build();
//!
//! let chat = provider.chat_model(models::phala::LLAMA_3_3_70B_INSTRUCT);
//! assert_eq!(chat.provider(), "ollm.chat");
//! ```

use std::collections::HashMap;

use once_cell::sync::Lazy;
use secrecy::SecretString;
use tracing::debug;

use crate::client::{OllmChatModel, OllmCompletionModel, OllmEmbeddingModel, OllmImageModel};
use crate::config::OllmConfig;
use crate::error::{ModelType, OllmError};

/// Builder for [`OllmProvider`].
///
/// Every field is optional; `build()` cannot fail. Settings are captured
/// once and become the provider's closure state.
#[derive(Clone, Default)]
pub struct OllmProviderBuilder {
    api_key: Option<SecretString>,
    base_url: Option<String>,
    headers: HashMap<String, String>,
    http_client: Option<reqwest::Client>,
}

impl OllmProviderBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the environment-derived credential.
    pub fn api_key<S: Into<String>>(mut self, api_key: S) -> Self {
        self.api_key = Some(SecretString::from(api_key.into()));
        self
    }

    /// Override the default endpoint. A single trailing slash is stripped;
    /// no further validation happens until a request is issued.
    pub fn base_url<S: Into<String>>(mut self, base_url: S) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Add a static header merged into every request.
    pub fn header<K: Into<String>, V: Into<String>>(mut self, key: K, value: V) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Merge a set of static headers.
    pub fn headers(mut self, headers: HashMap<String, String>) -> Self {
        self.headers.extend(headers);
        self
    }

    /// Replace the HTTP transport the delegated client executes through.
    pub fn with_http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Alias for `with_http_client(...)` (Vercel-aligned: `fetch`).
    pub fn fetch(self, client: reqwest::Client) -> Self {
        self.with_http_client(client)
    }

    pub fn build(self) -> OllmProvider {
        let config = OllmConfig::new(self.api_key, self.base_url, self.headers, self.http_client);
        debug!(base_url = %config.base_url(), "ollm provider configured");
        OllmProvider { config }
    }
}

/// OLLM provider: a configuration-to-handle translator.
///
/// Stateless across calls except for the captured settings; handles are
/// created fresh on every accessor call and exclusively owned by the
/// caller.
#[derive(Debug, Clone)]
pub struct OllmProvider {
    config: OllmConfig,
}

impl OllmProvider {
    /// Environment-configured provider (default endpoint, key from
    /// [`crate::config::API_KEY_ENV_VAR`] at request time).
    pub fn new() -> Self {
        OllmProviderBuilder::new().build()
    }

    pub fn builder() -> OllmProviderBuilder {
        OllmProviderBuilder::new()
    }

    /// Base URL shared by every handle this provider constructs.
    pub fn base_url(&self) -> &str {
        self.config.base_url()
    }

    /// Construct a chat model handle. Any identifier is accepted;
    /// validity is the remote proxy's concern.
    pub fn chat_model<S: Into<String>>(&self, model_id: S) -> OllmChatModel {
        OllmChatModel::new(self.config.clone(), model_id.into())
    }

    /// Alias for [`Self::chat_model`].
    pub fn language_model<S: Into<String>>(&self, model_id: S) -> OllmChatModel {
        self.chat_model(model_id)
    }

    /// Construct a legacy text-completion model handle.
    pub fn completion_model<S: Into<String>>(&self, model_id: S) -> OllmCompletionModel {
        OllmCompletionModel::new(self.config.clone(), model_id.into())
    }

    /// Embedding models are not routed by the proxy: rejects every
    /// identifier, unconditionally and synchronously.
    pub fn embedding_model<S: Into<String>>(
        &self,
        model_id: S,
    ) -> Result<OllmEmbeddingModel, OllmError> {
        Err(OllmError::ModelNotSupported {
            model_id: model_id.into(),
            model_type: ModelType::Embedding,
        })
    }

    /// Deprecated alias for [`Self::embedding_model`].
    #[deprecated(since = "0.1.0", note = "use `embedding_model` instead")]
    pub fn text_embedding_model<S: Into<String>>(
        &self,
        model_id: S,
    ) -> Result<OllmEmbeddingModel, OllmError> {
        self.embedding_model(model_id)
    }

    /// Image models are not routed by the proxy: rejects every identifier,
    /// unconditionally and synchronously.
    pub fn image_model<S: Into<String>>(&self, model_id: S) -> Result<OllmImageModel, OllmError> {
        Err(OllmError::ModelNotSupported {
            model_id: model_id.into(),
            model_type: ModelType::Image,
        })
    }
}

impl Default for OllmProvider {
    fn default() -> Self {
        Self::new()
    }
}

static DEFAULT_PROVIDER: Lazy<OllmProvider> = Lazy::new(OllmProvider::new);

/// Process-wide default provider built from environment configuration only.
pub fn default_provider() -> &'static OllmProvider {
    &DEFAULT_PROVIDER
}

/// Call-style shorthand for the default provider: `ollm("model-id")`
/// behaves exactly like `default_provider().chat_model("model-id")`.
pub fn ollm<S: Into<String>>(model_id: S) -> OllmChatModel {
    default_provider().chat_model(model_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_BASE_URL;

    #[test]
    fn construction_never_fails_for_any_settings_combination() {
        let _ = OllmProvider::new();
        let _ = OllmProvider::builder().api_key("sk-test").build();
        let _ = OllmProvider::builder().base_url("https://x/v1").build();
        let _ = OllmProvider::builder().base_url("https://x/v1/").build();
        let _ = OllmProvider::builder().header("X-Team", "infra").build();
        let _ = OllmProvider::builder()
            .with_http_client(reqwest::Client::new())
            .build();
    }

    #[test]
    fn default_endpoint_is_used_when_unset() {
        let provider = OllmProvider::new();
        assert_eq!(provider.base_url(), DEFAULT_BASE_URL);
    }

    #[test]
    fn handles_share_the_resolved_base_url() {
        let provider = OllmProvider::builder().base_url("https://x/v1/").build();
        assert_eq!(provider.chat_model("m").base_url(), "https://x/v1");
        assert_eq!(provider.completion_model("m").base_url(), "https://x/v1");
    }

    #[test]
    fn language_model_is_a_chat_model_alias() {
        let provider = OllmProvider::new();
        let chat = provider.chat_model("gpt-4o");
        let language = provider.language_model("gpt-4o");
        assert_eq!(chat.provider(), language.provider());
        assert_eq!(chat.model_id(), language.model_id());
    }

    #[test]
    fn call_style_shorthand_matches_chat_model() {
        let direct = default_provider().chat_model("gpt-4o");
        let shorthand = ollm("gpt-4o");
        assert_eq!(direct.provider(), shorthand.provider());
        assert_eq!(direct.model_id(), shorthand.model_id());
    }

    #[test]
    fn embedding_dispatch_always_rejects() {
        let provider = OllmProvider::new();
        let err = provider
            .embedding_model("text-embedding-3-small")
            .unwrap_err();
        match err {
            OllmError::ModelNotSupported {
                model_id,
                model_type,
            } => {
                assert_eq!(model_id, "text-embedding-3-small");
                assert_eq!(model_type, ModelType::Embedding);
            }
            other => panic!("expected ModelNotSupported, got {other:?}"),
        }
    }

    #[test]
    fn image_dispatch_always_rejects() {
        let provider = OllmProvider::new();
        let err = provider.image_model("dall-e-3").unwrap_err();
        match err {
            OllmError::ModelNotSupported {
                model_id,
                model_type,
            } => {
                assert_eq!(model_id, "dall-e-3");
                assert_eq!(model_type, ModelType::Image);
            }
            other => panic!("expected ModelNotSupported, got {other:?}"),
        }
    }
}
