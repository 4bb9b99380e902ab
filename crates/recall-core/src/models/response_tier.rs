use serde::{Deserialize, Serialize};

/// Confidence band for a best-match score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseTier {
    Reject,
    Hedge,
    Confident,
}

impl ResponseTier {
    /// Classify a score. Lower bounds are inclusive; NaN is rejected.
    pub fn classify(score: f64, hedge_threshold: f64, confident_threshold: f64) -> Self {
        if score >= confident_threshold {
            Self::Confident
        } else if score >= hedge_threshold {
            Self::Hedge
        } else {
            Self::Reject
        }
    }
}
