//! Model handles.
//!
//! Handles are thin, caller-owned bindings over the delegated
//! OpenAI-compatible client: identifying metadata (`provider`, `model_id`)
//! plus the URL/header/transport configuration the client executes with.
//! Everything hard — HTTP streaming, SSE framing, tool-call assembly,
//! retry — lives in the delegated client, not here.

use async_openai::Client;
use async_openai::types::{
    ChatCompletionResponseStream, CompletionResponseStream, CreateChatCompletionRequest,
    CreateChatCompletionResponse, CreateCompletionRequest, CreateCompletionResponse,
};
use backoff::ExponentialBackoff;
use reqwest::header::HeaderMap;
use tracing::debug;

use crate::config::OllmConfig;
use crate::error::OllmError;

/// Chat-capable model handle bound to one model identifier.
///
/// Created fresh on every factory call; the provider keeps no reference to
/// it. Construction performs no I/O and no credential validation.
#[derive(Debug, Clone)]
pub struct OllmChatModel {
    config: OllmConfig,
    model_id: String,
}

impl OllmChatModel {
    pub(crate) fn new(config: OllmConfig, model_id: String) -> Self {
        debug!(model_id = %model_id, base_url = %config.base_url(), "creating ollm chat model");
        Self { config, model_id }
    }

    /// Provider tag identifying the handle to the request-execution path.
    pub fn provider(&self) -> &'static str {
        "ollm.chat"
    }

    pub fn model_id(&self) -> &str {
        &self.model_id
    }

    pub fn base_url(&self) -> &str {
        self.config.base_url()
    }

    /// Resolve the headers this handle would send right now.
    ///
    /// Re-invoked per request and never cached; fails with
    /// [`OllmError::MissingApiKey`] when no credential is resolvable.
    pub fn request_headers(&self) -> Result<HeaderMap, OllmError> {
        self.config.request_headers()
    }

    /// The delegated client this handle executes through.
    pub fn client(&self) -> Client<OllmConfig> {
        build_client(&self.config)
    }

    /// Execute a chat completion. The handle's model identifier replaces
    /// whatever the request carries.
    pub async fn create(
        &self,
        mut request: CreateChatCompletionRequest,
    ) -> Result<CreateChatCompletionResponse, OllmError> {
        self.request_headers()?;
        request.model = self.model_id.clone();
        self.client()
            .chat()
            .create(request)
            .await
            .map_err(OllmError::from)
    }

    /// Execute a streaming chat completion.
    pub async fn create_stream(
        &self,
        mut request: CreateChatCompletionRequest,
    ) -> Result<ChatCompletionResponseStream, OllmError> {
        self.request_headers()?;
        request.model = self.model_id.clone();
        self.client()
            .chat()
            .create_stream(request)
            .await
            .map_err(OllmError::from)
    }
}

/// Completion-capable (legacy text completion) model handle.
#[derive(Debug, Clone)]
pub struct OllmCompletionModel {
    config: OllmConfig,
    model_id: String,
}

impl OllmCompletionModel {
    pub(crate) fn new(config: OllmConfig, model_id: String) -> Self {
        debug!(model_id = %model_id, base_url = %config.base_url(), "creating ollm completion model");
        Self { config, model_id }
    }

    pub fn provider(&self) -> &'static str {
        "ollm.completion"
    }

    pub fn model_id(&self) -> &str {
        &self.model_id
    }

    pub fn base_url(&self) -> &str {
        self.config.base_url()
    }

    /// See [`OllmChatModel::request_headers`].
    pub fn request_headers(&self) -> Result<HeaderMap, OllmError> {
        self.config.request_headers()
    }

    pub fn client(&self) -> Client<OllmConfig> {
        build_client(&self.config)
    }

    pub async fn create(
        &self,
        mut request: CreateCompletionRequest,
    ) -> Result<CreateCompletionResponse, OllmError> {
        self.request_headers()?;
        request.model = self.model_id.clone();
        self.client()
            .completions()
            .create(request)
            .await
            .map_err(OllmError::from)
    }

    pub async fn create_stream(
        &self,
        mut request: CreateCompletionRequest,
    ) -> Result<CompletionResponseStream, OllmError> {
        self.request_headers()?;
        request.model = self.model_id.clone();
        self.client()
            .completions()
            .create_stream(request)
            .await
            .map_err(OllmError::from)
    }
}

/// Embedding model handle.
///
/// Uninhabited: the OLLM proxy does not route embedding requests, so
/// [`crate::OllmProvider::embedding_model`] rejects every identifier and no
/// value of this type is ever produced. The identifier catalog in
/// [`crate::models::embeddings`] and [`crate::provider_options::OllmEmbeddingOptions`]
/// remain as the declared type surface.
#[derive(Debug, Clone, Copy)]
pub enum OllmEmbeddingModel {}

/// Image model handle. Uninhabited; see [`OllmEmbeddingModel`].
#[derive(Debug, Clone, Copy)]
pub enum OllmImageModel {}

fn build_client(config: &OllmConfig) -> Client<OllmConfig> {
    match config.http_client() {
        // Custom transport override (Vercel-aligned: `fetch`): the delegated
        // client executes through the caller's reqwest::Client, with the
        // collaborator's own default backoff policy left untouched.
        Some(http_client) => Client::build(
            http_client.clone(),
            config.clone(),
            ExponentialBackoff::default(),
        ),
        None => Client::with_config(config.clone()),
    }
}
