//! Article module - blocks, parsed articles and persisted records

use std::fmt;
use std::path::PathBuf;

/// A raw article span cut out of a model response.
///
/// `ordinal` is the number written in the delimiter (1-based); for
/// paragraph-fallback articles it is the synthetic position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleBlock {
    /// Article number carried by the delimiter
    pub ordinal: u32,

    /// Text between the start and end delimiters
    pub text: String,
}

impl ArticleBlock {
    /// Create a new block
    pub fn new(ordinal: u32, text: impl Into<String>) -> Self {
        Self {
            ordinal,
            text: text.into(),
        }
    }
}

/// A field value that is either real content or a recovery placeholder.
///
/// Missing labels are not failures; the extractor substitutes a default and
/// tags it so callers can tell the two apart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// Content found in the model output
    Extracted(String),

    /// Placeholder substituted because the content was missing
    Defaulted(String),
}

impl FieldValue {
    /// Borrow the underlying text
    pub fn as_str(&self) -> &str {
        match self {
            FieldValue::Extracted(s) | FieldValue::Defaulted(s) => s,
        }
    }

    /// Whether the value is a placeholder
    pub fn is_defaulted(&self) -> bool {
        matches!(self, FieldValue::Defaulted(_))
    }

    /// Take the underlying text
    pub fn into_string(self) -> String {
        match self {
            FieldValue::Extracted(s) | FieldValue::Defaulted(s) => s,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Title, abstract and body of one generated article
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedArticle {
    /// Article title
    pub title: FieldValue,

    /// One-paragraph summary
    pub abstract_text: FieldValue,

    /// Markdown body with target words in bold
    pub body: String,
}

impl ParsedArticle {
    /// Whether either labeled field fell back to a placeholder
    pub fn has_defaults(&self) -> bool {
        self.title.is_defaulted() || self.abstract_text.is_defaulted()
    }
}

/// A persisted article
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleRecord {
    /// Article title
    pub title: String,

    /// Article abstract
    pub abstract_text: String,

    /// File name inside the articles directory
    pub filename: String,

    /// Full path of the written file
    pub path: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_value_accessors() {
        let extracted = FieldValue::Extracted("Foo".to_string());
        let defaulted = FieldValue::Defaulted("Article 1".to_string());

        assert!(!extracted.is_defaulted());
        assert!(defaulted.is_defaulted());
        assert_eq!(extracted.as_str(), "Foo");
        assert_eq!(defaulted.to_string(), "Article 1");
        assert_eq!(defaulted.into_string(), "Article 1");
    }

    #[test]
    fn test_has_defaults() {
        let article = ParsedArticle {
            title: FieldValue::Extracted("T".to_string()),
            abstract_text: FieldValue::Defaulted("placeholder".to_string()),
            body: "body".to_string(),
        };
        assert!(article.has_defaults());
    }
}
