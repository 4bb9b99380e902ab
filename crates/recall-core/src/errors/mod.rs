mod config_error;
mod embedding_error;
mod knowledge_error;

pub use config_error::ConfigError;
pub use embedding_error::EmbeddingError;
pub use knowledge_error::KnowledgeError;

/// Top-level error for the Recall engine.
#[derive(Debug, thiserror::Error)]
pub enum RecallError {
    #[error("embedding error: {0}")]
    EmbeddingError(#[from] EmbeddingError),

    #[error("knowledge error: {0}")]
    KnowledgeError(#[from] KnowledgeError),

    #[error("config error: {0}")]
    ConfigError(#[from] ConfigError),

    #[error("unknown embedding provider: {name}")]
    UnknownProvider { name: String },
}

/// Result alias used throughout the workspace.
pub type RecallResult<T> = Result<T, RecallError>;
