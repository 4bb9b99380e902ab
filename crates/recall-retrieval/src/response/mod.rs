//! Maps a best match to a tiered, formatted `QueryResult`.

pub mod formatting;

use recall_core::config::ResponseConfig;
use recall_core::{QueryResult, ResponseTier};

pub use formatting::format_answer;

/// Builds every result the pipeline can return.
pub struct ResponseComposer {
    config: ResponseConfig,
}

impl ResponseComposer {
    pub fn new(config: ResponseConfig) -> Self {
        Self { config }
    }

    pub fn tier(&self, score: f64) -> ResponseTier {
        ResponseTier::classify(
            score,
            self.config.hedge_threshold,
            self.config.confident_threshold,
        )
    }

    /// Compose the result for a ranked query. The score is reported as-is
    /// in every tier, including negative scores and the -1.0 sentinel.
    pub fn compose(&self, best_answer: &str, best_score: f64) -> QueryResult {
        let answer = match self.tier(best_score) {
            ResponseTier::Reject => self.config.rejection_message.clone(),
            ResponseTier::Hedge => {
                let hedged = format!("{best_answer}{}", self.config.hedge_clause);
                self.format(&hedged)
            }
            ResponseTier::Confident => self.format(best_answer),
        };
        QueryResult::new(answer, best_score)
    }

    /// Apply the signature formatting.
    pub fn format(&self, text: &str) -> String {
        format_answer(text, &self.config.signature_separator, &self.config.signature)
    }

    /// Answer carried by a scan that matched nothing.
    pub fn no_match_answer(&self) -> &str {
        &self.config.no_match_answer
    }

    /// Blocked or out-of-domain query.
    pub fn off_topic(&self) -> QueryResult {
        QueryResult::gated(self.config.off_topic_message.as_str())
    }

    pub fn empty_knowledge(&self) -> QueryResult {
        QueryResult::gated(self.config.empty_knowledge_message.as_str())
    }

    /// The query itself could not be embedded.
    pub fn processing_error(&self) -> QueryResult {
        QueryResult::gated(self.config.processing_error_message.as_str())
    }
}

impl Default for ResponseComposer {
    fn default() -> Self {
        Self::new(ResponseConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SIG: &str = "Feel free to ask me about VRK's skills, projects, and experience!";

    fn composer() -> ResponseComposer {
        ResponseComposer::default()
    }

    #[test]
    fn exactly_confident_threshold_is_not_hedged() {
        let r = composer().compose("Docker.", 0.75);
        assert_eq!(r.answer, format!("Docker.. {SIG}"));
        assert_eq!(r.score, 0.75);
    }

    #[test]
    fn just_below_confident_threshold_is_hedged() {
        let r = composer().compose("Docker.", 0.7499);
        assert!(r.answer.contains("(I'm not very confident about this answer.)"));
        assert!(r.answer.starts_with("Docker.\n\n("));
        assert!(r.answer.ends_with(SIG));
    }

    #[test]
    fn exactly_hedge_threshold_is_hedged() {
        let r = composer().compose("Docker.", 0.65);
        assert!(r.answer.contains("not very confident"));
        assert_eq!(r.score, 0.65);
    }

    #[test]
    fn just_below_hedge_threshold_is_rejected_with_real_score() {
        let r = composer().compose("Docker.", 0.6499);
        assert!(r.answer.starts_with("I don't have specific information"));
        assert_eq!(r.score, 0.6499);
    }

    #[test]
    fn sentinel_score_is_rejected_and_reported() {
        let c = composer();
        let r = c.compose(c.no_match_answer(), -1.0);
        assert!(r.answer.starts_with("I don't have specific information"));
        assert_eq!(r.score, -1.0);
    }

    #[test]
    fn hedged_answer_layout() {
        let r = composer().compose("Mostly AWS", 0.7);
        assert_eq!(
            r.answer,
            format!("Mostly AWS\n\n(I'm not very confident about this answer.).. {SIG}")
        );
    }

    #[test]
    fn terminal_results_have_zero_score_and_distinct_messages() {
        let c = composer();
        let off = c.off_topic();
        let empty = c.empty_knowledge();
        let error = c.processing_error();
        for r in [&off, &empty, &error] {
            assert_eq!(r.score, 0.0);
        }
        assert_ne!(off.answer, empty.answer);
        assert_ne!(empty.answer, error.answer);
        assert_ne!(empty.answer, c.compose("x", 0.1).answer);
    }

    #[test]
    fn custom_thresholds_are_respected() {
        let c = ResponseComposer::new(ResponseConfig {
            hedge_threshold: 0.2,
            confident_threshold: 0.3,
            ..Default::default()
        });
        assert_eq!(c.tier(0.25), ResponseTier::Hedge);
        assert_eq!(c.tier(0.3), ResponseTier::Confident);
        assert_eq!(c.tier(0.1), ResponseTier::Reject);
    }
}
