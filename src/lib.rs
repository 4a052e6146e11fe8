//! ollm-provider
//!
//! OLLM (OpenAI-compatible proxy) provider adapter: accepts configuration
//! (API key, base URL, headers, HTTP-client override) and constructs model
//! handles bound to the configured endpoint. Request execution — HTTP
//! streaming, SSE framing, tool-call assembly — is delegated wholesale to
//! the `async-openai` client; this crate only binds configuration into it.
//!
//! # Architecture
//! - `provider.rs` - Provider factory, builder, default instance
//! - `config.rs`   - Resolved configuration and the lazy header builder
//! - `client.rs`   - Chat/completion model handles
//! - `error.rs`    - Error taxonomy and the proxy's JSON error envelope
//! - `models.rs`   - Model identifier catalogs
//!
//! # Example Usage
//! ```rust,no_run
//! use async_openai::types::{
//!     ChatCompletionRequestUserMessageArgs, CreateChatCompletionRequestArgs,
//! };
//! use ollm_provider::{models, ollm};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let model = ollm(models::phala::LLAMA_3_3_70B_INSTRUCT);
//!
//!     let request = CreateChatCompletionRequestArgs::default()
//!         .messages([ChatCompletionRequestUserMessageArgs::default()
//!             .content("Hello, OLLM!")
//!             .build()?
//!             .into()])
//!         .build()?;
//!
//!     let response = model.create(request).await?;
//!     println!(
//!         "{}",
//!         response.choices[0].message.content.as_deref().unwrap_or_default()
//!     );
//!     Ok(())
//! }
//! ```
#![deny(unsafe_code)]

mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod provider;
pub mod provider_options;

pub use client::{OllmChatModel, OllmCompletionModel, OllmEmbeddingModel, OllmImageModel};
pub use config::{API_KEY_ENV_VAR, DEFAULT_BASE_URL, OllmConfig};
pub use error::{ModelType, OllmError, OllmErrorData, OllmErrorEnvelope};
pub use provider::{OllmProvider, OllmProviderBuilder, default_provider, ollm};
