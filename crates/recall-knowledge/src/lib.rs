//! # recall-knowledge
//!
//! Builds the immutable [`KnowledgeBase`] the ranker scans.
//!
//! Accepted source shapes, all collapsed into [`recall_core::Record`]:
//!
//! ```text
//! [ {"questions": ["q1", "q2"], "answer": "a"}, ["q3", "a3"], ... ]
//! {"questions": [...], "qa_dict": {"q": "a", ...}}
//! {"q": "a", ...}
//! ```
//!
//! Malformed entries are skipped one by one. An absent or unparsable
//! document yields an empty knowledge base.

mod knowledge_base;
mod loader;
mod normalize;

pub use knowledge_base::KnowledgeBase;
