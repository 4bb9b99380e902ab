//! Span definitions per operation: evaluation, embedding.

/// Create a span around one query evaluation.
#[macro_export]
macro_rules! evaluation_span {
    ($query:expr) => {
        tracing::info_span!("recall.evaluation", query = %$query)
    };
}

/// Create a span around embedder construction or use.
#[macro_export]
macro_rules! embedding_span {
    ($provider:expr, $dimension:expr) => {
        tracing::info_span!("recall.embedding", provider = %$provider, dimension = $dimension)
    };
}
