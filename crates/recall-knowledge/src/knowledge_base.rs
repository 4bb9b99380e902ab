use std::path::Path;

use recall_core::Record;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::loader;
use crate::normalize;

/// Ordered, immutable collection of records.
///
/// Record order is construction order and decides ties during ranking.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KnowledgeBase {
    records: Vec<Record>,
}

impl KnowledgeBase {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_records(records: Vec<Record>) -> Self {
        Self { records }
    }

    /// Build from a raw source document of any accepted shape.
    pub fn build(raw: &Value) -> Self {
        let normalized = normalize::normalize(raw);
        if normalized.skipped > 0 {
            debug!(skipped = normalized.skipped, "skipped malformed knowledge entries");
        }
        Self::from_records(normalized.records)
    }

    /// Load a JSON document from disk.
    ///
    /// A missing or unparsable file yields an empty knowledge base.
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match loader::read_source(path) {
            Ok(raw) => {
                let kb = Self::build(&raw);
                info!(
                    path = %path.display(),
                    records = kb.len(),
                    aliases = kb.alias_count(),
                    "knowledge base loaded"
                );
                kb
            }
            Err(e) => {
                warn!(error = %e, "knowledge source unavailable, using empty knowledge base");
                Self::empty()
            }
        }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Total alias questions across all records.
    pub fn alias_count(&self) -> usize {
        self.records.iter().map(|r| r.aliases().len()).sum()
    }

    /// Every `(record index, record, alias)` in scan order: records in
    /// construction order, each record's aliases in their own order.
    pub fn aliases(&self) -> impl Iterator<Item = (usize, &Record, &str)> + '_ {
        self.records.iter().enumerate().flat_map(|(index, record)| {
            record
                .aliases()
                .iter()
                .map(move |alias| (index, record, alias.as_str()))
        })
    }
}

impl FromIterator<Record> for KnowledgeBase {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        Self::from_records(iter.into_iter().collect())
    }
}
