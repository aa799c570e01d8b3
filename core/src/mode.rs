use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{IndexError, Result};

/// A named text field of a document that can be indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Title,
    Author,
    Content,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Title, Category::Author, Category::Content];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Title => "title",
            Category::Author => "author",
            Category::Content => "content",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = IndexError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "title" => Ok(Category::Title),
            "author" => Ok(Category::Author),
            "content" => Ok(Category::Content),
            other => Err(IndexError::invalid_mode(format!("unknown category `{other}`"))),
        }
    }
}

/// Ordered, duplicate-free, non-empty set of categories to index.
///
/// The order is the order in which a document's fields are visited, so when
/// the same word occurs under two categories of one document the category
/// listed later wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mode {
    categories: Vec<Category>,
}

impl Mode {
    pub const TITLE_ONLY: &'static str = "title";
    pub const AUTHOR_ONLY: &'static str = "author";
    pub const CONTENT_ONLY: &'static str = "content";
    pub const ALL: &'static str = "title,author,content";

    /// Shorthand accepted in mode strings for every category.
    pub const ALL_ALIAS: &'static str = "all";

    pub fn new<I: IntoIterator<Item = Category>>(categories: I) -> Result<Self> {
        let mut out: Vec<Category> = Vec::new();
        for category in categories {
            if out.contains(&category) {
                return Err(IndexError::invalid_mode(format!("category `{category}` listed twice")));
            }
            out.push(category);
        }
        if out.is_empty() {
            return Err(IndexError::invalid_mode("mode must name at least one category"));
        }
        Ok(Self { categories: out })
    }

    pub fn all() -> Self {
        Self { categories: Category::ALL.to_vec() }
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn contains(&self, category: Category) -> bool {
        self.categories.contains(&category)
    }

    pub fn is_subset_of(&self, other: &Mode) -> bool {
        self.categories.iter().all(|c| other.contains(*c))
    }
}

impl FromStr for Mode {
    type Err = IndexError;

    /// Parses a comma-delimited list such as `"title,author"`. Segments are
    /// trimmed and `all` expands in place to `title,author,content`.
    fn from_str(s: &str) -> Result<Self> {
        if s.trim().is_empty() {
            return Err(IndexError::invalid_mode("empty mode string"));
        }
        let mut categories = Vec::new();
        for segment in s.split(',') {
            let segment = segment.trim();
            if segment.is_empty() {
                return Err(IndexError::invalid_mode(format!("empty category in `{s}`")));
            }
            if segment == Self::ALL_ALIAS {
                categories.extend(Category::ALL);
            } else {
                categories.push(segment.parse()?);
            }
        }
        Self::new(categories)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.categories.iter().map(|c| c.as_str()).collect();
        f.write_str(&names.join(","))
    }
}
