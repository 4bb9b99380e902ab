use serde::{Deserialize, Serialize};

use crate::constants::GATED_SCORE;

/// The externally visible outcome of evaluating one query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryResult {
    pub answer: String,
    /// Cosine similarity of the best match, or 0.0 for gated results.
    /// Negative values are valid.
    pub score: f64,
}

impl QueryResult {
    pub fn new(answer: impl Into<String>, score: f64) -> Self {
        Self {
            answer: answer.into(),
            score,
        }
    }

    /// A terminal result that never reached scoring.
    pub fn gated(answer: impl Into<String>) -> Self {
        Self::new(answer, GATED_SCORE)
    }
}
