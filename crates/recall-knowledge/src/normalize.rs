//! Entry-level normalization of raw JSON into records.

use recall_core::Record;
use serde_json::{Map, Value};

/// Object keys that may carry the alias questions, in lookup order.
const ALIAS_KEYS: &[&str] = &["questions", "aliases", "question"];

/// Key of the question→answer mapping inside a wrapper document.
const MAPPING_KEY: &str = "qa_dict";

/// Outcome of normalizing a whole document.
#[derive(Debug, Default)]
pub(crate) struct Normalized {
    pub records: Vec<Record>,
    pub skipped: usize,
}

impl Normalized {
    fn push(&mut self, record: Option<Record>) {
        match record {
            Some(r) => self.records.push(r),
            None => self.skipped += 1,
        }
    }
}

/// Normalize a whole source document.
pub(crate) fn normalize(raw: &Value) -> Normalized {
    let mut out = Normalized::default();
    match raw {
        Value::Array(entries) => {
            for entry in entries {
                out.push(entry_record(entry));
            }
        }
        Value::Object(map) => match map.get(MAPPING_KEY) {
            Some(Value::Object(mapping)) => mapping_records(mapping, &mut out),
            // A wrapper whose mapping is the wrong shape has nothing usable.
            Some(_) => out.skipped += 1,
            None => mapping_records(map, &mut out),
        },
        _ => {}
    }
    out
}

fn mapping_records(mapping: &Map<String, Value>, out: &mut Normalized) {
    for (question, answer) in mapping {
        out.push(answer.as_str().and_then(|a| Record::new([question.as_str()], a)));
    }
}

/// One list entry: an object with aliases and an answer, or a legacy
/// `[question, answer]` pair.
fn entry_record(entry: &Value) -> Option<Record> {
    match entry {
        Value::Object(obj) => {
            let aliases = ALIAS_KEYS.iter().find_map(|k| obj.get(*k)).map(aliases_of)?;
            let answer = match obj.get("answer") {
                None | Some(Value::Null) => "",
                Some(Value::String(s)) => s.as_str(),
                Some(_) => return None,
            };
            Record::new(aliases, answer)
        }
        Value::Array(pair) => match pair.as_slice() {
            [Value::String(q), Value::String(a), ..] => Record::new([q.as_str()], a.as_str()),
            _ => None,
        },
        _ => None,
    }
}

/// A single string or a list of strings. Non-string list items are dropped.
fn aliases_of(value: &Value) -> Vec<&str> {
    match value {
        Value::String(s) => vec![s.as_str()],
        Value::Array(items) => items.iter().filter_map(Value::as_str).collect(),
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn object_entry_with_alias_list() {
        let r = entry_record(&json!({"questions": ["a?", "b?"], "answer": "x"})).unwrap();
        assert_eq!(r.aliases(), ["a?".to_string(), "b?".to_string()]);
        assert_eq!(r.answer(), "x");
    }

    #[test]
    fn object_entry_with_single_string_alias() {
        let r = entry_record(&json!({"question": "a?", "answer": "x"})).unwrap();
        assert_eq!(r.aliases().len(), 1);
    }

    #[test]
    fn missing_answer_becomes_empty() {
        let r = entry_record(&json!({"aliases": ["a?"]})).unwrap();
        assert_eq!(r.answer(), "");
    }

    #[test]
    fn non_string_answer_is_dropped() {
        assert!(entry_record(&json!({"questions": ["a?"], "answer": 42})).is_none());
    }

    #[test]
    fn entry_without_aliases_is_dropped() {
        assert!(entry_record(&json!({"answer": "x"})).is_none());
        assert!(entry_record(&json!({"questions": [], "answer": "x"})).is_none());
        assert!(entry_record(&json!({"questions": [1, 2], "answer": "x"})).is_none());
        assert!(entry_record(&json!({"questions": 7, "answer": "x"})).is_none());
    }

    #[test]
    fn legacy_pair() {
        let r = entry_record(&json!(["q?", "a"])).unwrap();
        assert_eq!(r.aliases(), ["q?".to_string()]);
        assert_eq!(r.answer(), "a");
    }

    #[test]
    fn malformed_pairs_are_dropped() {
        assert!(entry_record(&json!(["lonely"])).is_none());
        assert!(entry_record(&json!([1, "a"])).is_none());
        assert!(entry_record(&json!("bare string")).is_none());
        assert!(entry_record(&json!(null)).is_none());
    }

    #[test]
    fn wrapper_with_bad_mapping_counts_as_skipped() {
        let n = normalize(&json!({"qa_dict": ["not", "a", "map"]}));
        assert!(n.records.is_empty());
        assert_eq!(n.skipped, 1);
    }

    #[test]
    fn scalars_normalize_to_nothing() {
        for raw in [json!(null), json!(3), json!("text"), json!(true)] {
            let n = normalize(&raw);
            assert!(n.records.is_empty());
            assert_eq!(n.skipped, 0);
        }
    }
}
