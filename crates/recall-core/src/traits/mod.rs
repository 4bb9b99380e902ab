mod embedding;
mod evaluator;

pub use embedding::IEmbeddingProvider;
pub use evaluator::IEvaluator;
