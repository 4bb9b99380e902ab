use serde::{Deserialize, Serialize};

use super::defaults;

/// Topic gate configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GateConfig {
    /// Off-topic terms. A query containing any of them is always rejected.
    pub blocklist: Vec<String>,
    /// Domain terms. Longer queries must contain at least one.
    pub allowlist: Vec<String>,
    /// Queries with at most this many whitespace tokens skip the allowlist.
    pub short_query_max_tokens: usize,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            blocklist: to_owned(defaults::DEFAULT_BLOCKLIST),
            allowlist: to_owned(defaults::DEFAULT_ALLOWLIST),
            short_query_max_tokens: defaults::DEFAULT_SHORT_QUERY_MAX_TOKENS,
        }
    }
}

fn to_owned(terms: &[&str]) -> Vec<String> {
    terms.iter().map(|t| t.to_string()).collect()
}
