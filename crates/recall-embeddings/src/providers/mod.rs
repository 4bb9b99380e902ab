mod onnx_provider;
mod tfidf;

pub use onnx_provider::OnnxProvider;
pub use tfidf::TfIdfProvider;

use recall_core::config::EmbeddingConfig;
use recall_core::errors::{RecallError, RecallResult};
use recall_core::traits::IEmbeddingProvider;
use tracing::{info, warn};

/// Build the provider named by `config.provider`.
///
/// An ONNX model that cannot be loaded falls back to TF-IDF when
/// `fallback_to_tfidf` is set, and is a startup error otherwise.
pub fn create_provider(config: &EmbeddingConfig) -> RecallResult<Box<dyn IEmbeddingProvider>> {
    match config.provider.as_str() {
        "tfidf" => Ok(Box::new(TfIdfProvider::new(config.dimensions))),
        "onnx" => match OnnxProvider::load(config) {
            Ok(provider) => {
                info!(model = provider.name(), "using ONNX embedding provider");
                Ok(Box::new(provider))
            }
            Err(e) if config.fallback_to_tfidf => {
                warn!(error = %e, "ONNX provider unavailable, falling back to TF-IDF");
                Ok(Box::new(TfIdfProvider::new(config.dimensions)))
            }
            Err(e) => Err(e),
        },
        other => Err(RecallError::UnknownProvider {
            name: other.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use recall_core::errors::EmbeddingError;

    use super::*;

    fn config(provider: &str, fallback: bool) -> EmbeddingConfig {
        EmbeddingConfig {
            provider: provider.to_string(),
            dimensions: 64,
            fallback_to_tfidf: fallback,
            ..Default::default()
        }
    }

    #[test]
    fn tfidf_by_name() {
        let provider = create_provider(&config("tfidf", false)).unwrap();
        assert_eq!(provider.name(), "tfidf");
        assert_eq!(provider.dimensions(), 64);
    }

    #[test]
    fn onnx_without_model_falls_back() {
        let provider = create_provider(&config("onnx", true)).unwrap();
        assert_eq!(provider.name(), "tfidf");
    }

    #[test]
    fn onnx_without_model_and_no_fallback_fails() {
        let err = create_provider(&config("onnx", false)).err().unwrap();
        assert!(matches!(err, RecallError::EmbeddingError(EmbeddingError::ModelLoadFailed { .. })));
    }

    #[test]
    fn unknown_provider_is_rejected() {
        let err = create_provider(&config("word2vec", true)).err().unwrap();
        assert!(matches!(err, RecallError::UnknownProvider { .. }));
    }
}
