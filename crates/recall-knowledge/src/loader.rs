//! Reading a knowledge document from disk.

use std::path::Path;

use recall_core::errors::{KnowledgeError, RecallResult};
use serde_json::Value;

pub(crate) fn read_source(path: &Path) -> RecallResult<Value> {
    let text = std::fs::read_to_string(path).map_err(|e| KnowledgeError::SourceUnreadable {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;
    let raw = serde_json::from_str(&text).map_err(|e| KnowledgeError::SourceUnparsable {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;
    Ok(raw)
}
