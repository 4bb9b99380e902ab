/// Knowledge source errors. Raised while reading a source document and
/// recovered by the loader into an empty knowledge base.
#[derive(Debug, thiserror::Error)]
pub enum KnowledgeError {
    #[error("knowledge source unreadable: {path}: {reason}")]
    SourceUnreadable { path: String, reason: String },

    #[error("knowledge source unparsable: {path}: {reason}")]
    SourceUnparsable { path: String, reason: String },
}
