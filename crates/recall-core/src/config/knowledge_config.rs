use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::defaults;

/// Knowledge source configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct KnowledgeConfig {
    /// Path to the JSON knowledge document.
    pub path: PathBuf,
}

impl Default for KnowledgeConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(defaults::DEFAULT_KNOWLEDGE_PATH),
        }
    }
}
