//! Split a raw model response into articles
//!
//! The response is expected to wrap each article in a pair of delimiters:
//!
//! ```text
//! === ARTICLE 1 ===
//! Title: ...
//! Abstract: ...
//! ---
//! body
//! === END ARTICLE 1 ===
//! ```
//!
//! Delimiters are matched by a two-state scanner. A start marker opens an
//! article with ordinal `n`; the article closes at the first end marker that
//! carries the same `n`. Anything in between, including markers with other
//! ordinals, belongs to the article. A start marker with no matching end is
//! skipped and scanning resumes right after it.
//!
//! When no delimited article is found the response is split on blank lines
//! and the paragraphs are bisected into two synthetic articles.

use crate::extract::{default_title, TextExtractor, DEFAULT_ABSTRACT};
use enmaster_domain::{ArticleBlock, FieldValue, ParsedArticle};
use regex::Regex;
use std::sync::LazyLock;
use tracing::{info, warn};

static START_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)===[ \t]*ARTICLE[ \t]+(\d+)[ \t]*===").expect("start marker pattern is valid")
});

static END_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)===[ \t]*END[ \t]+ARTICLE[ \t]+(\d+)[ \t]*===")
        .expect("end marker pattern is valid")
});

static BLANK_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\r?\n[ \t]*\r?\n").expect("blank line pattern is valid"));

/// Result of parsing a response
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseOutcome {
    /// Articles found through the delimiter grammar
    Delimited(Vec<ParsedArticle>),

    /// Delimiters missing; articles synthesized by paragraph bisection
    Fallback(Vec<ParsedArticle>),
}

impl ParseOutcome {
    /// Whether the fallback path produced these articles
    pub fn is_degraded(&self) -> bool {
        matches!(self, ParseOutcome::Fallback(_))
    }

    /// Borrow the articles
    pub fn articles(&self) -> &[ParsedArticle] {
        match self {
            ParseOutcome::Delimited(a) | ParseOutcome::Fallback(a) => a,
        }
    }

    /// Take the articles
    pub fn into_articles(self) -> Vec<ParsedArticle> {
        match self {
            ParseOutcome::Delimited(a) | ParseOutcome::Fallback(a) => a,
        }
    }
}

enum ScanState {
    Seeking { from: usize },
    InArticle { ordinal: u32, content_start: usize },
}

/// Parses model output into [`ParsedArticle`]s
#[derive(Debug, Default, Clone, Copy)]
pub struct ArticleParser {
    extractor: TextExtractor,
}

impl ArticleParser {
    /// Create a new parser
    pub fn new() -> Self {
        Self {
            extractor: TextExtractor::new(),
        }
    }

    /// Parse `raw`, returning the articles in order
    pub fn parse(&self, raw: &str) -> Vec<ParsedArticle> {
        self.parse_outcome(raw).into_articles()
    }

    /// Parse `raw`, reporting whether the fallback engaged
    pub fn parse_outcome(&self, raw: &str) -> ParseOutcome {
        let blocks = scan_blocks(raw);

        if !blocks.is_empty() {
            info!("Parsed {} delimited article(s)", blocks.len());
            return ParseOutcome::Delimited(
                blocks.iter().map(|b| self.extractor.extract(b)).collect(),
            );
        }

        let articles = bisect_paragraphs(raw);
        warn!(
            "No delimited articles found, paragraph fallback produced {} article(s)",
            articles.len()
        );
        ParseOutcome::Fallback(articles)
    }
}

/// Cut every well-formed delimited block out of `raw`
pub fn scan_blocks(raw: &str) -> Vec<ArticleBlock> {
    let mut blocks = Vec::new();
    let mut state = ScanState::Seeking { from: 0 };

    loop {
        state = match state {
            ScanState::Seeking { from } => match next_start(raw, from) {
                Some((ordinal, content_start)) => ScanState::InArticle {
                    ordinal,
                    content_start,
                },
                None => break,
            },
            ScanState::InArticle {
                ordinal,
                content_start,
            } => match matching_end(raw, content_start, ordinal) {
                Some((content_end, resume)) => {
                    blocks.push(ArticleBlock::new(ordinal, &raw[content_start..content_end]));
                    ScanState::Seeking { from: resume }
                }
                None => {
                    warn!("Article {} has no matching end marker, skipping it", ordinal);
                    ScanState::Seeking {
                        from: content_start,
                    }
                }
            },
        };
    }

    blocks
}

/// Next start marker at or after `from`: its ordinal and the offset just past it
fn next_start(raw: &str, from: usize) -> Option<(u32, usize)> {
    let mut offset = from;
    while let Some(caps) = START_MARKER.captures(&raw[offset..]) {
        let whole = caps.get(0)?;
        let end = offset + whole.end();
        // Ordinals too large for u32 are not markers
        if let Some(ordinal) = caps.get(1).and_then(|m| m.as_str().parse().ok()) {
            return Some((ordinal, end));
        }
        offset = end;
    }
    None
}

/// First end marker for `ordinal` after `from`: (content end, offset past marker)
fn matching_end(raw: &str, from: usize, ordinal: u32) -> Option<(usize, usize)> {
    END_MARKER.captures_iter(&raw[from..]).find_map(|caps| {
        let whole = caps.get(0)?;
        let n: u32 = caps.get(1)?.as_str().parse().ok()?;
        (n == ordinal).then(|| (from + whole.start(), from + whole.end()))
    })
}

/// Split on blank lines and bisect into at most two articles
fn bisect_paragraphs(raw: &str) -> Vec<ParsedArticle> {
    let paragraphs: Vec<&str> = BLANK_LINE
        .split(raw)
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect();

    let groups: Vec<&[&str]> = match paragraphs.len() {
        0 => Vec::new(),
        1 => vec![&paragraphs[..]],
        n => {
            let (first, second) = paragraphs.split_at(n / 2);
            vec![first, second]
        }
    };

    groups
        .into_iter()
        .zip(1u32..)
        .map(|(group, ordinal)| ParsedArticle {
            title: FieldValue::Defaulted(default_title(ordinal)),
            abstract_text: FieldValue::Defaulted(DEFAULT_ABSTRACT.to_string()),
            body: group.join("\n\n"),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article(n: u32, title: &str, body: &str) -> String {
        format!(
            "=== ARTICLE {n} ===\nTitle: {title}\nAbstract: About {title}\n---\n{body}\n=== END ARTICLE {n} ===\n"
        )
    }

    #[test]
    fn test_parse_delimited_articles_in_order() {
        let raw = format!(
            "Here you go:\n\n{}\n{}\n{}",
            article(1, "One", "First body."),
            article(2, "Two", "Second body."),
            article(3, "Three", "Third body.")
        );

        let outcome = ArticleParser::new().parse_outcome(&raw);
        assert!(!outcome.is_degraded());

        let articles = outcome.articles();
        assert_eq!(articles.len(), 3);
        assert_eq!(articles[0].title.as_str(), "One");
        assert_eq!(articles[1].title.as_str(), "Two");
        assert_eq!(articles[2].title.as_str(), "Three");
        assert_eq!(articles[2].body, "Third body.");
    }

    #[test]
    fn test_markers_are_case_insensitive() {
        let raw = "=== article 1 ===\nTitle: Lower\n---\nBody\n=== End Article 1 ===";
        let articles = ArticleParser::new().parse(raw);
        assert_eq!(articles.len(), 1);
        assert_eq!(articles[0].title.as_str(), "Lower");
    }

    #[test]
    fn test_end_marker_must_carry_same_ordinal() {
        // END ARTICLE 2 does not close article 1
        let raw = "=== ARTICLE 1 ===\nTitle: A\n---\nalpha\n=== END ARTICLE 2 ===\nmore\n=== END ARTICLE 1 ===";
        let blocks = scan_blocks(raw);
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].ordinal, 1);
        assert!(blocks[0].text.contains("more"));
    }

    #[test]
    fn test_orphan_start_marker_is_skipped() {
        let raw = format!(
            "=== ARTICLE 7 ===\nno end here\n{}",
            article(2, "Kept", "Body.")
        );
        let blocks = scan_blocks(&raw);
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].ordinal, 2);
    }

    #[test]
    fn test_out_of_order_ordinals_pair_correctly() {
        let raw = format!("{}{}", article(2, "Second", "b"), article(1, "First", "a"));
        let blocks = scan_blocks(&raw);
        let ordinals: Vec<u32> = blocks.iter().map(|b| b.ordinal).collect();
        assert_eq!(ordinals, vec![2, 1]);
    }

    #[test]
    fn test_minimal_span_per_article() {
        // Two articles both numbered 1 must not merge into one span
        let raw = format!("{}{}", article(1, "A", "a"), article(1, "B", "b"));
        let articles = ArticleParser::new().parse(&raw);
        assert_eq!(articles.len(), 2);
        assert_eq!(articles[0].body, "a");
        assert_eq!(articles[1].body, "b");
    }

    #[test]
    fn test_fallback_bisects_paragraphs() {
        let raw = "P1 text.\n\nP2 text.\n\nP3 text.\n\n\nP4 text.\n\nP5 text.";
        let outcome = ArticleParser::new().parse_outcome(raw);
        assert!(outcome.is_degraded());

        let articles = outcome.articles();
        assert_eq!(articles.len(), 2);
        assert_eq!(articles[0].body, "P1 text.\n\nP2 text.");
        assert_eq!(articles[1].body, "P3 text.\n\nP4 text.\n\nP5 text.");
        assert_eq!(articles[0].title, FieldValue::Defaulted("Article 1".to_string()));
        assert_eq!(articles[1].title, FieldValue::Defaulted("Article 2".to_string()));
        assert!(articles[1].abstract_text.is_defaulted());
    }

    #[test]
    fn test_fallback_on_mismatched_delimiters() {
        let raw = "=== ARTICLE 1 ===\nTitle: Broken\n\nBody paragraph.\n=== END ARTICLE 9 ===";
        let outcome = ArticleParser::new().parse_outcome(raw);
        assert!(outcome.is_degraded());
        assert_eq!(outcome.articles().len(), 2);
    }

    #[test]
    fn test_fallback_single_paragraph() {
        let articles = ArticleParser::new().parse("Just one paragraph.");
        assert_eq!(articles.len(), 1);
        assert_eq!(articles[0].body, "Just one paragraph.");
    }

    #[test]
    fn test_empty_input_yields_nothing() {
        let outcome = ArticleParser::new().parse_outcome("  \n\n ");
        assert!(outcome.is_degraded());
        assert!(outcome.articles().is_empty());
    }
}
