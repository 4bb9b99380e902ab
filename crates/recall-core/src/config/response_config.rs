use serde::{Deserialize, Serialize};

use super::defaults;

/// Response composer configuration: tier thresholds and fixed texts.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ResponseConfig {
    /// Scores below this are rejected.
    pub hedge_threshold: f64,
    /// Scores at or above this are answered without a hedge.
    pub confident_threshold: f64,
    /// Appended to hedge-tier answers before formatting.
    pub hedge_clause: String,
    /// Closing sentence appended to every non-rejected answer.
    pub signature: String,
    /// Inserted between the answer and the signature.
    pub signature_separator: String,
    /// Best answer reported when nothing was scored.
    pub no_match_answer: String,
    pub rejection_message: String,
    pub off_topic_message: String,
    pub empty_knowledge_message: String,
    pub processing_error_message: String,
}

impl Default for ResponseConfig {
    fn default() -> Self {
        Self {
            hedge_threshold: defaults::DEFAULT_HEDGE_THRESHOLD,
            confident_threshold: defaults::DEFAULT_CONFIDENT_THRESHOLD,
            hedge_clause: defaults::DEFAULT_HEDGE_CLAUSE.to_string(),
            signature: defaults::DEFAULT_SIGNATURE.to_string(),
            signature_separator: defaults::DEFAULT_SIGNATURE_SEPARATOR.to_string(),
            no_match_answer: defaults::DEFAULT_NO_MATCH_ANSWER.to_string(),
            rejection_message: defaults::DEFAULT_REJECTION_MESSAGE.to_string(),
            off_topic_message: defaults::DEFAULT_OFF_TOPIC_MESSAGE.to_string(),
            empty_knowledge_message: defaults::DEFAULT_EMPTY_KNOWLEDGE_MESSAGE.to_string(),
            processing_error_message: defaults::DEFAULT_PROCESSING_ERROR_MESSAGE.to_string(),
        }
    }
}
