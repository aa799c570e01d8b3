//! Errors raised by the category indexer.
//!
//! Every failure rejects the whole call: no partial map is ever merged into
//! a caller's accumulator.

use thiserror::Error;

use crate::document::DocId;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IndexError {
    /// Empty mode string, unknown category name or a category listed twice.
    #[error("invalid mode: {0}")]
    InvalidMode(String),

    /// A document lacks a field the requested operation reads.
    #[error("document {doc_id} has no `{field}` field")]
    MissingField { doc_id: DocId, field: String },

    #[error("document {doc_id} has no topic tags")]
    NoTopics { doc_id: DocId },

    /// Adding to the count of `word` would exceed `u64::MAX`.
    #[error("count for `{word}` overflows")]
    CountOverflow { word: String },
}

impl IndexError {
    pub fn invalid_mode<S: Into<String>>(msg: S) -> Self {
        IndexError::InvalidMode(msg.into())
    }

    pub fn missing_field<S: Into<String>>(doc_id: DocId, field: S) -> Self {
        IndexError::MissingField { doc_id, field: field.into() }
    }

    pub fn count_overflow<S: Into<String>>(word: S) -> Self {
        IndexError::CountOverflow { word: word.into() }
    }
}

pub type Result<T> = std::result::Result<T, IndexError>;
