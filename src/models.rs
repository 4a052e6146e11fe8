//! OLLM Model Catalogs
//!
//! Identifier constants for the models the proxy commonly fronts. The
//! provider accepts any identifier string; these constants exist for
//! convenience and discoverability only — validity is always decided by
//! the remote proxy.

/// Models served from Phala TEE backends.
pub mod phala {
    pub const LLAMA_3_3_70B_INSTRUCT: &str = "phala/llama-3.3-70b-instruct";
    pub const QWEN_2_5_7B_INSTRUCT: &str = "phala/qwen-2.5-7b-instruct";
    pub const QWEN_3_32B: &str = "phala/qwen3-32b";
    pub const DEEPSEEK_R1_70B: &str = "phala/deepseek-r1-70b";
    pub const GEMMA_3_27B_IT: &str = "phala/gemma-3-27b-it";

    /// All Phala-hosted models
    pub const ALL: &[&str] = &[
        LLAMA_3_3_70B_INSTRUCT,
        QWEN_2_5_7B_INSTRUCT,
        QWEN_3_32B,
        DEEPSEEK_R1_70B,
        GEMMA_3_27B_IT,
    ];

    /// Get all Phala-hosted models
    pub fn all_models() -> Vec<String> {
        ALL.iter().map(|&s| s.to_string()).collect()
    }
}

/// Models served from NEAR TEE backends.
pub mod near {
    pub const LLAMA_3_3_70B_INSTRUCT: &str = "near/llama-3.3-70b-instruct";
    pub const DEEPSEEK_V3: &str = "near/deepseek-v3";
    pub const QWEN_2_5_72B_INSTRUCT: &str = "near/qwen-2.5-72b-instruct";

    /// All NEAR-hosted models
    pub const ALL: &[&str] = &[LLAMA_3_3_70B_INSTRUCT, DEEPSEEK_V3, QWEN_2_5_72B_INSTRUCT];

    /// Get all NEAR-hosted models
    pub fn all_models() -> Vec<String> {
        ALL.iter().map(|&s| s.to_string()).collect()
    }
}

/// Embedding model identifiers.
///
/// The catalog is declared although `embedding_model` rejects every
/// identifier: the proxy does not route embedding requests.
pub mod embeddings {
    pub const TEXT_EMBEDDING_3_SMALL: &str = "text-embedding-3-small";
    pub const TEXT_EMBEDDING_3_LARGE: &str = "text-embedding-3-large";

    pub const ALL: &[&str] = &[TEXT_EMBEDDING_3_SMALL, TEXT_EMBEDDING_3_LARGE];
}
