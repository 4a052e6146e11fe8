//! Error Handling Module
//!
//! Provides the adapter's error taxonomy (`OllmError`) and the JSON error
//! envelope contract of the OLLM proxy. Upstream failures reported by the
//! delegated client are classified here; no retry or recovery policy is
//! applied at this layer.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Model type requested from the provider factory.
///
/// Rendered with the model-SDK tag vocabulary (`embeddingModel`,
/// `imageModel`, ...) so that dispatch errors line up with what callers of
/// OpenAI-compatible SDKs expect to see.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModelType {
    Chat,
    Completion,
    Embedding,
    Image,
}

impl ModelType {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Chat => "chatModel",
            Self::Completion => "completionModel",
            Self::Embedding => "embeddingModel",
            Self::Image => "imageModel",
        }
    }
}

impl std::fmt::Display for ModelType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors surfaced by the OLLM provider adapter.
#[derive(Debug, Error)]
pub enum OllmError {
    /// No API key resolvable at header-build time.
    ///
    /// Raised lazily by the header builder, never at provider or model
    /// construction.
    #[error("Missing API key: {0}")]
    MissingApiKey(String),

    /// The requested model type is not routed by the proxy endpoint.
    ///
    /// Raised synchronously and unconditionally for embedding and image
    /// dispatch.
    #[error("Model '{model_id}' is not supported as {model_type}")]
    ModelNotSupported {
        model_id: String,
        model_type: ModelType,
    },

    /// A configured value could not be turned into a request component
    /// (e.g. an invalid header name). Surfaces at header-resolution time.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Error returned by the proxy in its JSON error envelope.
    #[error("API error: {message}")]
    ApiError {
        message: String,
        error_type: Option<String>,
        param: Option<String>,
        code: Option<serde_json::Value>,
    },

    /// Transport-level failure (connect, TLS, timeout).
    #[error("HTTP error: {0}")]
    HttpError(String),

    /// Response body did not match the expected shape.
    #[error("Parse error: {0}")]
    ParseError(String),

    /// SSE stream failure reported by the delegated client.
    #[error("Stream error: {0}")]
    StreamError(String),

    /// Request rejected client-side before it was issued.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Any other failure reported by the delegated client.
    #[error("Provider error: {0}")]
    ProviderError(String),
}

/// JSON error envelope returned by the OLLM proxy.
///
/// ```json
/// { "error": { "message": "...", "type": "...", "param": null, "code": null } }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OllmErrorEnvelope {
    pub error: OllmErrorData,
}

/// Payload of the proxy's error envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OllmErrorData {
    pub message: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub error_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub param: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<serde_json::Value>,
}

impl OllmErrorEnvelope {
    /// Canonical failure string surfaced to callers.
    pub fn message(&self) -> &str {
        &self.error.message
    }
}

impl From<OllmErrorData> for OllmError {
    fn from(data: OllmErrorData) -> Self {
        Self::ApiError {
            message: data.message,
            error_type: data.error_type,
            param: data.param,
            code: data.code,
        }
    }
}

impl From<async_openai::error::OpenAIError> for OllmError {
    fn from(err: async_openai::error::OpenAIError) -> Self {
        use async_openai::error::OpenAIError;
        match err {
            OpenAIError::ApiError(api) => Self::ApiError {
                message: api.message,
                error_type: api.r#type,
                param: api.param,
                code: api.code.map(serde_json::Value::String),
            },
            OpenAIError::Reqwest(e) => Self::HttpError(e.to_string()),
            OpenAIError::JSONDeserialize(e) => Self::ParseError(e.to_string()),
            OpenAIError::StreamError(e) => Self::StreamError(e.to_string()),
            OpenAIError::InvalidArgument(e) => Self::InvalidInput(e),
            other => Self::ProviderError(other.to_string()),
        }
    }
}
