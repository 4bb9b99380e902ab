//! Property tests for the gate, the formatter and cosine similarity.

use proptest::prelude::*;
use recall_core::config::defaults::{DEFAULT_BLOCKLIST, DEFAULT_SIGNATURE, DEFAULT_SIGNATURE_SEPARATOR};
use recall_core::GateDecision;
use recall_retrieval::ranking::cosine_similarity;
use recall_retrieval::response::formatting::format_answer;
use recall_retrieval::TopicGate;

proptest! {
    #[test]
    fn gate_is_total(query in ".{0,200}") {
        let decision = TopicGate::default().classify(&query);
        prop_assert!(matches!(
            decision,
            GateDecision::Blocked | GateDecision::OutOfDomain | GateDecision::Proceed
        ));
    }

    #[test]
    fn blocklist_term_always_blocks(
        prefix in "[a-zA-Z ]{0,40}",
        suffix in "[a-zA-Z ]{0,40}",
        idx in 0..DEFAULT_BLOCKLIST.len(),
        upper in any::<bool>(),
    ) {
        let term = if upper {
            DEFAULT_BLOCKLIST[idx].to_uppercase()
        } else {
            DEFAULT_BLOCKLIST[idx].to_string()
        };
        let query = format!("{prefix} {term} {suffix}");
        prop_assert_eq!(TopicGate::default().classify(&query), GateDecision::Blocked);
    }

    #[test]
    fn formatting_is_idempotent(text in ".{0,120}") {
        let once = format_answer(&text, DEFAULT_SIGNATURE_SEPARATOR, DEFAULT_SIGNATURE);
        let twice = format_answer(&once, DEFAULT_SIGNATURE_SEPARATOR, DEFAULT_SIGNATURE);
        prop_assert_eq!(&once, &twice);
        prop_assert!(once.ends_with(DEFAULT_SIGNATURE));
    }

    #[test]
    fn cosine_is_bounded(
        pair in (1usize..32).prop_flat_map(|n| (
            prop::collection::vec(-100.0f32..100.0, n),
            prop::collection::vec(-100.0f32..100.0, n),
        ))
    ) {
        let (a, b) = pair;
        let s = cosine_similarity(&a, &b);
        prop_assert!((-1.0..=1.0).contains(&s), "cosine {s} out of range");
    }

    #[test]
    fn cosine_is_symmetric(
        pair in (1usize..32).prop_flat_map(|n| (
            prop::collection::vec(-10.0f32..10.0, n),
            prop::collection::vec(-10.0f32..10.0, n),
        ))
    ) {
        let (a, b) = pair;
        prop_assert_eq!(cosine_similarity(&a, &b), cosine_similarity(&b, &a));
    }
}
