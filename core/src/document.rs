use std::collections::HashMap;

use crate::error::{IndexError, Result};

pub type DocId = u32;

/// What the indexer needs from a document, regardless of where its fields
/// were loaded from.
pub trait Record {
    fn id(&self) -> DocId;
    fn tags(&self) -> &[String];
    /// Raw text of the named category, if the document has it.
    fn field(&self, name: &str) -> Option<&str>;

    fn has_topic(&self, topic: &str) -> bool {
        let topic = topic.to_lowercase();
        self.tags().iter().any(|t| *t == topic)
    }
}

impl<R: Record + ?Sized> Record for &R {
    fn id(&self) -> DocId { (**self).id() }
    fn tags(&self) -> &[String] { (**self).tags() }
    fn field(&self, name: &str) -> Option<&str> { (**self).field(name) }
    fn has_topic(&self, topic: &str) -> bool { (**self).has_topic(topic) }
}

/// An in-memory document. Fields are fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    id: DocId,
    tags: Vec<String>,
    fields: HashMap<String, String>,
}

impl Document {
    /// Tags are lower-cased; at least one is required.
    pub fn new<T, F, K, V>(id: DocId, tags: T, fields: F) -> Result<Self>
    where
        T: IntoIterator,
        T::Item: AsRef<str>,
        F: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let tags: Vec<String> = tags.into_iter().map(|t| t.as_ref().to_lowercase()).collect();
        if tags.is_empty() {
            return Err(IndexError::NoTopics { doc_id: id });
        }
        let fields = fields.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        Ok(Self { id, tags, fields })
    }

    pub fn fields(&self) -> &HashMap<String, String> { &self.fields }
}

impl Record for Document {
    fn id(&self) -> DocId { self.id }
    fn tags(&self) -> &[String] { &self.tags }
    fn field(&self, name: &str) -> Option<&str> { self.fields.get(name).map(String::as_str) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn topics_are_case_insensitive() {
        let doc = Document::new(1, ["Literature", "thriller"], [("title", "A Study in Scarlet")]).unwrap();
        assert_eq!(doc.tags(), &["literature".to_string(), "thriller".to_string()]);
        assert!(doc.has_topic("LITERATURE"));
        assert!(doc.has_topic("thriller"));
        assert!(!doc.has_topic("detective"));
    }

    #[test]
    fn requires_a_topic() {
        let err = Document::new(7, Vec::<String>::new(), [("title", "x")]).unwrap_err();
        assert_eq!(err, IndexError::NoTopics { doc_id: 7 });
    }

    #[test]
    fn field_lookup() {
        let doc = Document::new(2, ["misc"], [("author", "Arthur Conan Doyle")]).unwrap();
        assert_eq!(doc.field("author"), Some("Arthur Conan Doyle"));
        assert_eq!(doc.field("content"), None);
        assert_eq!((&doc).field("author"), Some("Arthur Conan Doyle"));
    }
}
