//! Process-local embedding cache backed by moka.

use std::time::Duration;

use moka::sync::Cache;

use super::text_key;

/// Entries unused for this long are evicted.
const IDLE_EVICTION: Duration = Duration::from_secs(3600);

/// Embeddings keyed by the blake3 digest of the embedded text.
///
/// Alias questions are re-embedded on every query, so after the first
/// query the whole knowledge base is served from here.
pub struct L1MemoryCache {
    entries: Cache<String, Vec<f32>>,
}

impl L1MemoryCache {
    /// A cache holding at most `capacity` embeddings.
    pub fn new(capacity: u64) -> Self {
        Self {
            entries: Cache::builder()
                .max_capacity(capacity)
                .time_to_idle(IDLE_EVICTION)
                .build(),
        }
    }

    pub fn lookup(&self, text: &str) -> Option<Vec<f32>> {
        self.entries.get(&text_key(text))
    }

    pub fn store(&self, text: &str, embedding: Vec<f32>) {
        self.entries.insert(text_key(text), embedding);
    }
}
