//! Category-scoped word aggregation.
//!
//! Documents are visited in slice order and, within a document, categories
//! in mode order. When a word is seen under more than one category the last
//! assignment in that traversal wins.

use rayon::prelude::*;
use std::collections::BTreeMap;

use crate::document::Record;
use crate::error::{IndexError, Result};
use crate::mode::{Category, Mode};
use crate::tokenizer::{is_stop_word, tokenize};

/// word -> category it was last assigned under
pub type WordCategoryMap = BTreeMap<String, Category>;
/// word -> occurrences in content
pub type WordCountMap = BTreeMap<String, u64>;

#[derive(Debug, Clone)]
pub struct CategoryIndexer {
    mode: Mode,
    skip_stop_words: bool,
}

impl CategoryIndexer {
    /// Stop words are skipped when counting unless turned off with
    /// [`CategoryIndexer::with_skip_stop_words`].
    pub fn new(mode: Mode) -> Self {
        Self { mode, skip_stop_words: true }
    }

    pub fn with_skip_stop_words(mut self, skip: bool) -> Self {
        self.skip_stop_words = skip;
        self
    }

    pub fn mode(&self) -> &Mode { &self.mode }

    pub fn skips_stop_words(&self) -> bool { self.skip_stop_words }

    pub fn build_category_map<R: Record>(&self, documents: &[R]) -> Result<WordCategoryMap> {
        let mut map = WordCategoryMap::new();
        self.extend_category_map(documents, &mut map)?;
        Ok(map)
    }

    /// Adds the words of every mode category of `documents` to `existing`.
    ///
    /// On error `existing` is left untouched.
    pub fn extend_category_map<R: Record>(&self, documents: &[R], existing: &mut WordCategoryMap) -> Result<()> {
        let mut pass = WordCategoryMap::new();
        for doc in documents {
            self.categorize_into(doc, &mut pass)?;
        }
        let pass_words = pass.len();
        existing.extend(pass);
        tracing::info!(docs = documents.len(), pass_words, total_words = existing.len(), mode = %self.mode, "category map extended");
        Ok(())
    }

    /// Same result as [`CategoryIndexer::build_category_map`], with one
    /// partial map per document computed on the rayon pool. Partials are
    /// merged in slice order.
    ///
    /// When several documents fail, the error reported is the one of the
    /// earliest failing document in the slice, as in the sequential build.
    pub fn build_category_map_par<R: Record + Sync>(&self, documents: &[R]) -> Result<WordCategoryMap> {
        let partials: Vec<Result<WordCategoryMap>> = documents
            .par_iter()
            .map(|doc| -> Result<WordCategoryMap> {
                let mut partial = WordCategoryMap::new();
                self.categorize_into(doc, &mut partial)?;
                Ok(partial)
            })
            .collect();
        let mut map = WordCategoryMap::new();
        for partial in partials {
            map.extend(partial?);
        }
        tracing::info!(docs = documents.len(), total_words = map.len(), mode = %self.mode, "parallel category map built");
        Ok(map)
    }

    pub fn build_word_count_map<R: Record>(&self, documents: &[R]) -> Result<WordCountMap> {
        let mut map = WordCountMap::new();
        self.extend_word_count_map(documents, &mut map)?;
        Ok(map)
    }

    /// Adds the content word counts of `documents` to `existing`. Only the
    /// `content` field is read, whatever the mode.
    ///
    /// On error, including a count that would overflow `u64`, `existing` is
    /// left untouched.
    pub fn extend_word_count_map<R: Record>(&self, documents: &[R], existing: &mut WordCountMap) -> Result<()> {
        let mut pass = WordCountMap::new();
        for doc in documents {
            self.count_into(doc, &mut pass)?;
        }
        let pass_words = pass.len();
        merge_counts(existing, pass)?;
        tracing::info!(docs = documents.len(), pass_words, total_words = existing.len(), skip_stop_words = self.skip_stop_words, "word count map extended");
        Ok(())
    }

    /// Parallel [`CategoryIndexer::build_word_count_map`]. As with
    /// [`CategoryIndexer::build_category_map_par`], the reported error is the
    /// one of the earliest failing document in the slice.
    pub fn build_word_count_map_par<R: Record + Sync>(&self, documents: &[R]) -> Result<WordCountMap> {
        let partials: Vec<Result<WordCountMap>> = documents
            .par_iter()
            .map(|doc| -> Result<WordCountMap> {
                let mut partial = WordCountMap::new();
                self.count_into(doc, &mut partial)?;
                Ok(partial)
            })
            .collect();
        let mut map = WordCountMap::new();
        for partial in partials {
            merge_counts(&mut map, partial?)?;
        }
        tracing::info!(docs = documents.len(), total_words = map.len(), skip_stop_words = self.skip_stop_words, "parallel word count map built");
        Ok(map)
    }

    fn categorize_into<R: Record>(&self, doc: &R, out: &mut WordCategoryMap) -> Result<()> {
        for &category in self.mode.categories() {
            let tokens = tokenize(required_field(doc, category)?);
            tracing::debug!(doc_id = doc.id(), %category, tokens = tokens.len(), "tokenized field");
            for token in tokens {
                out.insert(token, category);
            }
        }
        Ok(())
    }

    fn count_into<R: Record>(&self, doc: &R, out: &mut WordCountMap) -> Result<()> {
        let tokens = tokenize(required_field(doc, Category::Content)?);
        tracing::debug!(doc_id = doc.id(), tokens = tokens.len(), "counting content");
        for token in tokens {
            if self.skip_stop_words && is_stop_word(&token) {
                continue;
            }
            let current = out.get(&token).copied().unwrap_or(0);
            let total = current.checked_add(1).ok_or_else(|| IndexError::count_overflow(token.as_str()))?;
            out.insert(token, total);
        }
        Ok(())
    }
}

fn required_field<R: Record + ?Sized>(doc: &R, category: Category) -> Result<&str> {
    doc.field(category.as_str())
        .ok_or_else(|| IndexError::missing_field(doc.id(), category.as_str()))
}

/// Adds `from` into `into`. Every sum is checked before `into` changes, so an
/// overflow leaves `into` as it was.
fn merge_counts(into: &mut WordCountMap, from: WordCountMap) -> Result<()> {
    let mut merged = Vec::with_capacity(from.len());
    for (word, count) in from {
        let current = into.get(&word).copied().unwrap_or(0);
        match current.checked_add(count) {
            Some(total) => merged.push((word, total)),
            None => return Err(IndexError::count_overflow(word)),
        }
    }
    into.extend(merged);
    Ok(())
}

/// Documents tagged with `topic`, in their original order.
pub fn filter_by_topic<'a, R: Record>(documents: &'a [R], topic: &str) -> Vec<&'a R> {
    documents.iter().filter(|d| d.has_topic(topic)).collect()
}

/// One `(category, word)` pair per map entry.
pub fn to_inverted_pairs(map: &WordCategoryMap) -> Vec<(Category, &str)> {
    map.iter().map(|(word, &category)| (category, word.as_str())).collect()
}

/// Renders `category:word` entries joined by commas, in ascending word order.
///
/// Nothing is escaped: a word containing `:` or `,` makes the output
/// ambiguous. Tokens never contain whitespace and categories come from a
/// closed set, so only punctuation inside words can trigger this.
pub fn to_inverted_index_string(map: &WordCategoryMap) -> String {
    map.iter()
        .map(|(word, category)| format!("{category}:{word}"))
        .collect::<Vec<_>>()
        .join(",")
}
