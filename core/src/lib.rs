pub mod document;
pub mod error;
pub mod indexer;
pub mod mode;
pub mod tokenizer;

pub use document::{DocId, Document, Record};
pub use error::{IndexError, Result};
pub use indexer::{
    filter_by_topic, to_inverted_index_string, to_inverted_pairs, CategoryIndexer, WordCategoryMap,
    WordCountMap,
};
pub use mode::{Category, Mode};
