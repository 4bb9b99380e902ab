use serde::{Deserialize, Serialize};

use super::defaults;

/// Embedding subsystem configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EmbeddingConfig {
    /// Embedding provider: "onnx" or "tfidf".
    pub provider: String,
    /// Path to the ONNX model file.
    pub model_path: Option<String>,
    /// Path to the model's `tokenizer.json`. Defaults to `tokenizer.json`
    /// next to the model file.
    pub tokenizer_path: Option<String>,
    /// Feed a `token_type_ids` input to the ONNX model. BERT-family exports
    /// take it; some distilled exports do not.
    pub token_type_ids: bool,
    /// Embedding dimensions.
    pub dimensions: usize,
    /// L1 in-memory cache max entries. Zero disables the cache.
    pub l1_cache_size: u64,
    /// Use the TF-IDF provider when the ONNX model cannot be loaded.
    pub fallback_to_tfidf: bool,
    /// ONNX Runtime intra-op threads.
    pub intra_threads: usize,
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            provider: defaults::DEFAULT_EMBEDDING_PROVIDER.to_string(),
            model_path: None,
            tokenizer_path: None,
            token_type_ids: defaults::DEFAULT_TOKEN_TYPE_IDS,
            dimensions: defaults::DEFAULT_EMBEDDING_DIMENSIONS,
            l1_cache_size: defaults::DEFAULT_L1_CACHE_SIZE,
            fallback_to_tfidf: defaults::DEFAULT_FALLBACK_TO_TFIDF,
            intra_threads: defaults::DEFAULT_INTRA_THREADS,
        }
    }
}
