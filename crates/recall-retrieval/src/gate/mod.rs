//! Keyword topic gate, applied before any embedding work.
//!
//! Matching is case-insensitive substring containment, so "war" also
//! matches "software". The blocklist is checked first and always wins.

use recall_core::config::GateConfig;
use recall_core::GateDecision;
use tracing::{debug, warn};

pub struct TopicGate {
    blocklist: Vec<String>,
    allowlist: Vec<String>,
    short_query_max_tokens: usize,
}

impl TopicGate {
    pub fn new(config: &GateConfig) -> Self {
        Self {
            blocklist: normalize_terms(&config.blocklist, "blocklist"),
            allowlist: normalize_terms(&config.allowlist, "allowlist"),
            short_query_max_tokens: config.short_query_max_tokens,
        }
    }

    /// Classify a query. Total over all strings.
    pub fn classify(&self, query: &str) -> GateDecision {
        let lower = query.to_lowercase();

        if let Some(term) = self.blocklist.iter().find(|t| lower.contains(t.as_str())) {
            debug!(term = %term, "query contains off-topic term");
            return GateDecision::Blocked;
        }

        // Short queries are assumed in-domain.
        if query.split_whitespace().count() <= self.short_query_max_tokens {
            return GateDecision::Proceed;
        }

        if self.allowlist.iter().any(|t| lower.contains(t.as_str())) {
            GateDecision::Proceed
        } else {
            debug!("query contains no domain term");
            GateDecision::OutOfDomain
        }
    }
}

impl Default for TopicGate {
    fn default() -> Self {
        Self::new(&GateConfig::default())
    }
}

/// Lowercase once up front. Blank terms would match every query, so they
/// are dropped.
fn normalize_terms(terms: &[String], list: &str) -> Vec<String> {
    terms
        .iter()
        .filter_map(|t| {
            if t.trim().is_empty() {
                warn!(list, "ignoring blank gate term");
                None
            } else {
                Some(t.to_lowercase())
            }
        })
        .collect()
}
