pub mod defaults;
mod embedding_config;
mod gate_config;
mod knowledge_config;
mod observability_config;
mod response_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

pub use embedding_config::EmbeddingConfig;
pub use gate_config::GateConfig;
pub use knowledge_config::KnowledgeConfig;
pub use observability_config::ObservabilityConfig;
pub use response_config::ResponseConfig;

use crate::errors::{ConfigError, RecallResult};

/// Top-level configuration. Every section is optional in TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RecallConfig {
    pub gate: GateConfig,
    pub response: ResponseConfig,
    pub embedding: EmbeddingConfig,
    pub knowledge: KnowledgeConfig,
    pub observability: ObservabilityConfig,
}

impl RecallConfig {
    /// Parse a TOML string. Missing sections and fields take their defaults.
    pub fn from_toml(source: &str) -> RecallResult<Self> {
        let config: Self = toml::from_str(source).map_err(|e| ConfigError::Parse {
            reason: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> RecallResult<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|e| ConfigError::Unreadable {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::from_toml(&source)
    }

    /// Check cross-field constraints that serde cannot express.
    pub fn validate(&self) -> RecallResult<()> {
        let response = &self.response;
        for (field, value) in [
            ("response.hedge_threshold", response.hedge_threshold),
            ("response.confident_threshold", response.confident_threshold),
        ] {
            if !(-1.0..=1.0).contains(&value) {
                return Err(ConfigError::Invalid {
                    field: field.to_string(),
                    reason: format!("{value} is outside [-1, 1]"),
                }
                .into());
            }
        }
        if response.hedge_threshold > response.confident_threshold {
            return Err(ConfigError::Invalid {
                field: "response.hedge_threshold".to_string(),
                reason: format!(
                    "{} exceeds confident_threshold {}",
                    response.hedge_threshold, response.confident_threshold
                ),
            }
            .into());
        }
        if self.embedding.dimensions == 0 {
            return Err(ConfigError::Invalid {
                field: "embedding.dimensions".to_string(),
                reason: "must be greater than zero".to_string(),
            }
            .into());
        }
        Ok(())
    }
}
