//! # recall-embeddings
//!
//! Text → fixed-dimension vector providers for the ranker.
//!
//! - [`providers::TfIdfProvider`]: hashed TF-IDF, no model files, always available.
//! - [`providers::OnnxProvider`]: transformer encoder via ONNX Runtime, tokenized
//!   with the model's `tokenizer.json`, `[CLS]` pooling.
//! - [`EmbeddingEngine`]: wraps the configured provider with dimension
//!   validation and an L1 cache, and is itself an `IEmbeddingProvider`.

pub mod cache;
pub mod engine;
pub mod providers;

pub use engine::EmbeddingEngine;
