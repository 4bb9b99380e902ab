//! EmbeddingEngine: the main entry point for recall-embeddings.
//!
//! Wraps the configured provider with dimension validation and an optional
//! L1 cache. Implements `IEmbeddingProvider`.

use recall_core::config::EmbeddingConfig;
use recall_core::errors::{EmbeddingError, RecallResult};
use recall_core::traits::IEmbeddingProvider;
use tracing::{debug, info};

use crate::cache::L1MemoryCache;
use crate::providers;

/// The main embedding engine.
///
/// Safe to share across threads: the provider is `Sync` and the cache is
/// internally synchronized.
pub struct EmbeddingEngine {
    provider: Box<dyn IEmbeddingProvider>,
    cache: Option<L1MemoryCache>,
    dimensions: usize,
}

impl EmbeddingEngine {
    /// Create a new engine from configuration.
    pub fn new(config: &EmbeddingConfig) -> RecallResult<Self> {
        let provider = providers::create_provider(config)?;
        let engine = Self::with_provider(provider, config.l1_cache_size);

        info!(
            provider = engine.provider.name(),
            dims = engine.dimensions,
            cache = engine.cache.is_some(),
            "EmbeddingEngine initialized"
        );

        Ok(engine)
    }

    /// Wrap an already-constructed provider. A cache size of zero disables
    /// caching.
    pub fn with_provider(provider: Box<dyn IEmbeddingProvider>, l1_cache_size: u64) -> Self {
        let dimensions = provider.dimensions();
        let cache = (l1_cache_size > 0).then(|| L1MemoryCache::new(l1_cache_size));
        Self {
            provider,
            cache,
            dimensions,
        }
    }

    /// Name of the wrapped provider.
    pub fn active_provider(&self) -> &str {
        self.provider.name()
    }

    fn embed_uncached(&self, text: &str) -> RecallResult<Vec<f32>> {
        let embedding = self.provider.embed(text)?;
        if embedding.len() != self.dimensions {
            return Err(EmbeddingError::DimensionMismatch {
                expected: self.dimensions,
                actual: embedding.len(),
            }
            .into());
        }
        Ok(embedding)
    }
}

impl IEmbeddingProvider for EmbeddingEngine {
    fn embed(&self, text: &str) -> RecallResult<Vec<f32>> {
        let Some(cache) = &self.cache else {
            return self.embed_uncached(text);
        };

        if let Some(vec) = cache.lookup(text) {
            debug!(text, "embedding cache hit");
            return Ok(vec);
        }

        let embedding = self.embed_uncached(text)?;
        cache.store(text, embedding.clone());
        Ok(embedding)
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn name(&self) -> &str {
        "recall-embedding-engine"
    }

    fn is_available(&self) -> bool {
        self.provider.is_available()
    }
}
