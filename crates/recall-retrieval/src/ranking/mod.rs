//! Best-match scan over every alias question of every record.

pub mod similarity;

use recall_core::constants::SCORE_SENTINEL;
use recall_core::errors::{EmbeddingError, RecallResult};
use recall_core::traits::IEmbeddingProvider;
use recall_knowledge::KnowledgeBase;
use tracing::{debug, warn};

pub use similarity::cosine_similarity;

/// One scored alias.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredCandidate<'a> {
    pub record_index: usize,
    pub alias: &'a str,
    pub answer: &'a str,
    pub score: f64,
}

/// Outcome of a scan.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ranking<'a> {
    /// Highest-scoring alias, `None` if nothing beat the sentinel.
    pub best: Option<ScoredCandidate<'a>>,
    /// Aliases embedded and scored.
    pub scored: usize,
    /// Aliases skipped because their embedding failed.
    pub skipped: usize,
}

impl<'a> Ranking<'a> {
    /// Best score, or the sentinel -1.0 when nothing was matched.
    pub fn best_score(&self) -> f64 {
        self.best.map_or(SCORE_SENTINEL, |c| c.score)
    }

    /// Best answer, or `default` when nothing was matched.
    pub fn best_answer<'d>(&self, default: &'d str) -> &'d str
    where
        'a: 'd,
    {
        self.best.map_or(default, |c| c.answer)
    }

    /// Fold one alias outcome in. Only a strictly greater score replaces
    /// the current best, so earlier aliases win ties and NaN never wins.
    fn observe(mut self, outcome: RecallResult<ScoredCandidate<'a>>) -> Self {
        match outcome {
            Ok(candidate) => {
                self.scored += 1;
                if candidate.score > self.best_score() {
                    self.best = Some(candidate);
                }
            }
            Err(_) => self.skipped += 1,
        }
        self
    }
}

/// Scores a query against a knowledge base by cosine similarity.
pub struct SimilarityRanker<'e> {
    embedder: &'e dyn IEmbeddingProvider,
}

impl<'e> SimilarityRanker<'e> {
    pub fn new(embedder: &'e dyn IEmbeddingProvider) -> Self {
        Self { embedder }
    }

    /// Embed the query once, then every alias in record order.
    ///
    /// # Errors
    /// Fails only if the query itself cannot be embedded. Alias failures
    /// are counted in [`Ranking::skipped`].
    pub fn rank<'k>(&self, query: &str, kb: &'k KnowledgeBase) -> RecallResult<Ranking<'k>> {
        let query_vec = self.embedder.embed(query)?;

        let ranking = kb
            .aliases()
            .map(|(record_index, record, alias)| {
                self.score_alias(&query_vec, alias).map(|score| ScoredCandidate {
                    record_index,
                    alias,
                    answer: record.answer(),
                    score,
                })
            })
            .fold(Ranking::default(), Ranking::observe);

        debug!(
            scored = ranking.scored,
            skipped = ranking.skipped,
            best_score = ranking.best_score(),
            best_record = ?ranking.best.map(|c| c.record_index),
            "ranking complete"
        );
        Ok(ranking)
    }

    fn score_alias(&self, query_vec: &[f32], alias: &str) -> RecallResult<f64> {
        let alias_vec = self.embedder.embed(alias).inspect_err(|e| {
            warn!(alias, error = %e, "alias embedding failed, skipping");
        })?;
        if alias_vec.len() != query_vec.len() {
            warn!(
                alias,
                expected = query_vec.len(),
                actual = alias_vec.len(),
                "alias embedding has wrong dimension, skipping"
            );
            return Err(EmbeddingError::DimensionMismatch {
                expected: query_vec.len(),
                actual: alias_vec.len(),
            }
            .into());
        }
        Ok(cosine_similarity(query_vec, &alias_vec))
    }
}
