use crate::models::QueryResult;

/// Answers a free-text query.
///
/// Never fails: every failure mode is folded into a well-formed result.
pub trait IEvaluator: Send + Sync {
    fn evaluate(&self, query: &str) -> QueryResult;
}
