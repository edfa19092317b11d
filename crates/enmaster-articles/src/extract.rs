//! Pull title, abstract and body out of a single article block

use enmaster_domain::{ArticleBlock, FieldValue, ParsedArticle};
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

/// Abstract used when a block carries no `Abstract:` label
pub const DEFAULT_ABSTRACT: &str = "AI generated article";

static TITLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)Title:\s*(.*?)(?:\n|Abstract:)").expect("title pattern is valid")
});

static ABSTRACT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)Abstract:\s*(.*?)(?:\n|---)").expect("abstract pattern is valid")
});

static BODY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)---\s*(.*)").expect("body pattern is valid"));

static TITLE_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)Title:.*?\n").expect("title line pattern is valid"));

static ABSTRACT_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)Abstract:.*?\n").expect("abstract line pattern is valid"));

static RULE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"---+").expect("rule pattern is valid"));

/// Best-effort label extractor for one article block.
///
/// Missing or empty labels never fail; they produce
/// [`FieldValue::Defaulted`] values instead.
#[derive(Debug, Default, Clone, Copy)]
pub struct TextExtractor;

impl TextExtractor {
    /// Create a new extractor
    pub fn new() -> Self {
        Self
    }

    /// Extract the fields of `block`
    pub fn extract(&self, block: &ArticleBlock) -> ParsedArticle {
        let text = block.text.as_str();

        let title = match capture(&TITLE, text) {
            Some(title) => FieldValue::Extracted(title),
            None => {
                debug!("Article {}: no title label, using default", block.ordinal);
                FieldValue::Defaulted(default_title(block.ordinal))
            }
        };

        let abstract_text = match capture(&ABSTRACT, text) {
            Some(summary) => FieldValue::Extracted(summary),
            None => {
                debug!("Article {}: no abstract label, using default", block.ordinal);
                FieldValue::Defaulted(DEFAULT_ABSTRACT.to_string())
            }
        };

        ParsedArticle {
            title,
            abstract_text,
            body: clean_body(text),
        }
    }
}

/// Placeholder title for article `ordinal`
pub fn default_title(ordinal: u32) -> String {
    format!("Article {}", ordinal)
}

/// First capture group, trimmed; `None` when absent or blank
fn capture(re: &Regex, text: &str) -> Option<String> {
    re.captures(text)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Body is everything after the first rule, minus leftover labels and rules
fn clean_body(text: &str) -> String {
    let body = match BODY.captures(text).and_then(|c| c.get(1)) {
        Some(m) => m.as_str().trim(),
        None => text.trim(),
    };

    let body = TITLE_LINE.replace_all(body, "");
    let body = ABSTRACT_LINE.replace_all(&body, "");
    let body = RULE.replace_all(&body, "");
    body.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(ordinal: u32, text: &str) -> ParsedArticle {
        TextExtractor::new().extract(&ArticleBlock::new(ordinal, text))
    }

    #[test]
    fn test_extract_all_fields() {
        let article = extract(1, "Title: Foo\nAbstract: Bar\n---\nBody text");
        assert_eq!(article.title, FieldValue::Extracted("Foo".to_string()));
        assert_eq!(article.abstract_text, FieldValue::Extracted("Bar".to_string()));
        assert_eq!(article.body, "Body text");
    }

    #[test]
    fn test_missing_title_defaults_to_ordinal() {
        let article = extract(3, "Abstract: Short\n---\nBody");
        assert_eq!(article.title, FieldValue::Defaulted("Article 3".to_string()));
        assert!(article.title.is_defaulted());
        assert_eq!(article.abstract_text.as_str(), "Short");
    }

    #[test]
    fn test_missing_abstract_defaults() {
        let article = extract(1, "Title: Only a title\n---\nBody");
        assert_eq!(
            article.abstract_text,
            FieldValue::Defaulted(DEFAULT_ABSTRACT.to_string())
        );
    }

    #[test]
    fn test_labels_are_case_insensitive() {
        let article = extract(1, "TITLE:  Loud  \nabstract: quiet\n---\nText");
        assert_eq!(article.title.as_str(), "Loud");
        assert_eq!(article.abstract_text.as_str(), "quiet");
    }

    #[test]
    fn test_title_and_abstract_on_one_line() {
        let article = extract(1, "Title: Inline Abstract: Summary here\n---\nBody");
        assert_eq!(article.title.as_str(), "Inline");
        assert_eq!(article.abstract_text.as_str(), "Summary here");
    }

    #[test]
    fn test_abstract_stops_at_rule() {
        let article = extract(1, "Title: T\nAbstract: Ends early---\nBody");
        assert_eq!(article.abstract_text.as_str(), "Ends early");
    }

    #[test]
    fn test_blank_title_is_defaulted() {
        let article = extract(2, "Title:   \nAbstract: A\n---\nBody");
        assert!(article.title.is_defaulted());
        assert_eq!(article.title.as_str(), "Article 2");
    }

    #[test]
    fn test_no_rule_uses_whole_block_as_body() {
        let article = extract(1, "Title: T\nAbstract: A\nThe **apple** fell.\n");
        assert_eq!(article.body, "The **apple** fell.");
    }

    #[test]
    fn test_body_strips_residual_labels_and_rules() {
        let text = "Title: T\nAbstract: A\n---\nTitle: again\nFirst line.\n-----\nAbstract: dup\nLast line.";
        let article = extract(1, text);
        assert_eq!(article.body, "First line.\n\nLast line.");
    }

    #[test]
    fn test_bold_markers_preserved() {
        let article = extract(1, "Title: T\nAbstract: A\n---\nAn **apple** a day.");
        assert_eq!(article.body, "An **apple** a day.");
    }
}
