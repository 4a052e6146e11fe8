//! OLLM Provider Options
//!
//! Provider-specific option schemas attached to model handles by callers.
//! The proxy forwards unrecognized parameters to its backends, so chat and
//! completion options are open passthrough maps.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// OLLM chat options
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OllmChatOptions {
    /// Additional parameters forwarded verbatim by the proxy
    pub extra_params: HashMap<String, serde_json::Value>,
}

impl OllmChatOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a custom parameter
    pub fn with_param(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.extra_params.insert(key.into(), value);
        self
    }
}

/// OLLM completion options
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OllmCompletionOptions {
    /// Additional parameters forwarded verbatim by the proxy
    pub extra_params: HashMap<String, serde_json::Value>,
}

impl OllmCompletionOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a custom parameter
    pub fn with_param(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.extra_params.insert(key.into(), value);
        self
    }
}

/// OLLM embedding options.
///
/// Deliberately empty: the schema is declared although embedding models are
/// rejected by the provider.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OllmEmbeddingOptions {}
