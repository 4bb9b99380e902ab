use proptest::prelude::*;
use recall_core::models::*;

#[test]
fn record_drops_empty_aliases() {
    let record = Record::new(["What is your name?", ""], "VRK").unwrap();
    assert_eq!(record.aliases(), ["What is your name?".to_string()]);
    assert_eq!(record.answer(), "VRK");
}

#[test]
fn record_keeps_whitespace_only_aliases() {
    let record = Record::new(["What is your name?", "   "], "VRK").unwrap();
    assert_eq!(record.aliases().len(), 2);
    assert_eq!(record.aliases()[1], "   ");
    assert!(Record::new(["\t"], "tab").is_some());
}

#[test]
fn record_without_aliases_is_rejected() {
    assert!(Record::new(Vec::<String>::new(), "orphan").is_none());
    assert!(Record::new([""], "orphan").is_none());
}

#[test]
fn record_allows_empty_answer() {
    let record = Record::new(["hello"], "").unwrap();
    assert!(record.answer().is_empty());
}

#[test]
fn query_result_serializes_as_two_fields() {
    let result = QueryResult::new("My name is VRK.", 0.91);
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["answer"], "My name is VRK.");
    assert_eq!(json["score"], 0.91);
    assert_eq!(json.as_object().unwrap().len(), 2);
}

#[test]
fn gated_result_has_zero_score() {
    assert_eq!(QueryResult::gated("no").score, 0.0);
}

#[test]
fn tier_lower_bounds_are_inclusive() {
    assert_eq!(ResponseTier::classify(0.75, 0.65, 0.75), ResponseTier::Confident);
    assert_eq!(ResponseTier::classify(0.7499, 0.65, 0.75), ResponseTier::Hedge);
    assert_eq!(ResponseTier::classify(0.65, 0.65, 0.75), ResponseTier::Hedge);
    assert_eq!(ResponseTier::classify(0.6499, 0.65, 0.75), ResponseTier::Reject);
    assert_eq!(ResponseTier::classify(-1.0, 0.65, 0.75), ResponseTier::Reject);
    assert_eq!(ResponseTier::classify(f64::NAN, 0.65, 0.75), ResponseTier::Reject);
}

#[test]
fn gate_decision_serializes_snake_case() {
    let json = serde_json::to_string(&GateDecision::OutOfDomain).unwrap();
    assert_eq!(json, "\"out_of_domain\"");
    assert!(GateDecision::Proceed.is_proceed());
    assert!(!GateDecision::Blocked.is_proceed());
}

proptest! {
    #[test]
    fn tier_is_monotone_in_score(a in -1.0f64..=1.0, b in -1.0f64..=1.0) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let rank = |t: ResponseTier| match t {
            ResponseTier::Reject => 0,
            ResponseTier::Hedge => 1,
            ResponseTier::Confident => 2,
        };
        prop_assert!(
            rank(ResponseTier::classify(lo, 0.65, 0.75))
                <= rank(ResponseTier::classify(hi, 0.65, 0.75))
        );
    }
}
