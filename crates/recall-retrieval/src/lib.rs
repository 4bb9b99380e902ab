//! # recall-retrieval
//!
//! The query pipeline:
//!
//! ```text
//! query ─▶ TopicGate ──blocked/out-of-domain──▶ off-topic message, 0.0
//!              │
//!              ▼
//!      knowledge empty? ──yes──▶ empty-knowledge message, 0.0
//!              │
//!              ▼
//!      SimilarityRanker ──query embed failed──▶ processing-error message, 0.0
//!              │ best (answer, cosine)
//!              ▼
//!      ResponseComposer ─▶ reject / hedge / confident ─▶ QueryResult
//! ```

pub mod engine;
pub mod gate;
pub mod ranking;
pub mod response;

pub use engine::RecallEngine;
pub use gate::TopicGate;
pub use ranking::{Ranking, ScoredCandidate, SimilarityRanker};
pub use response::ResponseComposer;
