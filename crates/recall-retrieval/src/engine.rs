//! RecallEngine: implements IEvaluator, orchestrates the full pipeline.
//!
//! gate → empty-knowledge check → rank → compose. Every outcome, including
//! a failed query embedding, is a well-formed `QueryResult`.

use recall_core::config::RecallConfig;
use recall_core::traits::{IEmbeddingProvider, IEvaluator};
use recall_core::QueryResult;
use recall_knowledge::KnowledgeBase;
use recall_observability::evaluation_span;
use tracing::{debug, info, warn};

use crate::gate::TopicGate;
use crate::ranking::SimilarityRanker;
use crate::response::ResponseComposer;

/// The question-answering engine.
///
/// Borrows the knowledge base and embedder, which outlive it and are never
/// mutated. Per-query state lives on the stack of [`evaluate`], so one
/// engine can serve concurrent callers.
///
/// [`evaluate`]: IEvaluator::evaluate
pub struct RecallEngine<'a> {
    knowledge: &'a KnowledgeBase,
    ranker: SimilarityRanker<'a>,
    gate: TopicGate,
    composer: ResponseComposer,
}

impl<'a> RecallEngine<'a> {
    pub fn new(
        knowledge: &'a KnowledgeBase,
        embedder: &'a dyn IEmbeddingProvider,
        config: &RecallConfig,
    ) -> Self {
        Self {
            knowledge,
            ranker: SimilarityRanker::new(embedder),
            gate: TopicGate::new(&config.gate),
            composer: ResponseComposer::new(config.response.clone()),
        }
    }
}

impl IEvaluator for RecallEngine<'_> {
    fn evaluate(&self, query: &str) -> QueryResult {
        let span = evaluation_span!(query);
        let _guard = span.enter();

        let decision = self.gate.classify(query);
        if !decision.is_proceed() {
            info!(?decision, "query gated");
            return self.composer.off_topic();
        }

        if self.knowledge.is_empty() {
            info!("knowledge base is empty");
            return self.composer.empty_knowledge();
        }

        let ranking = match self.ranker.rank(query, self.knowledge) {
            Ok(ranking) => ranking,
            Err(e) => {
                warn!(error = %e, "query embedding failed");
                return self.composer.processing_error();
            }
        };

        let best_score = ranking.best_score();
        let best_answer = ranking.best_answer(self.composer.no_match_answer());
        let tier = self.composer.tier(best_score);
        debug!(
            alias = ranking.best.map(|c| c.alias).unwrap_or_default(),
            "best alias"
        );
        info!(
            score = best_score,
            ?tier,
            scored = ranking.scored,
            skipped = ranking.skipped,
            "query evaluated"
        );

        self.composer.compose(best_answer, best_score)
    }
}
