//! Persisted article markdown format
//!
//! ```text
//! # <title>
//!
//! ## Abstract
//! <abstract>
//!
//! ## Body
//! <body>
//!
//! ---
//! *Generated from word list "<group>"*
//! ```
//!
//! Bodies may contain `---` lines of their own (paragraph fallback keeps raw
//! text), so only a rule directly followed by the footer closes the body.

use crate::error::{ArticleError, Result};
use std::fs;
use std::path::Path;

const ABSTRACT_HEADING: &str = "## Abstract";
const BODY_HEADING: &str = "## Body";
const FOOTER_PREFIX: &str = "*Generated from word list \"";
const FOOTER_SUFFIX: &str = "\"*";

/// An article as stored on disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleDocument {
    /// Heading text
    pub title: String,

    /// Abstract section
    pub abstract_text: String,

    /// Body section
    pub body: String,

    /// Word list group named in the footer
    pub group: Option<String>,
}

impl ArticleDocument {
    /// Render to markdown
    pub fn render(&self) -> String {
        let mut out = format!(
            "# {}\n\n{}\n{}\n\n{}\n{}\n",
            self.title, ABSTRACT_HEADING, self.abstract_text, BODY_HEADING, self.body
        );
        if let Some(group) = &self.group {
            out.push_str(&format!("\n---\n{}{}{}\n", FOOTER_PREFIX, group, FOOTER_SUFFIX));
        }
        out
    }

    /// Parse rendered markdown.
    ///
    /// Lenient: returns `None` only when there is no `## Body` section.
    pub fn parse(content: &str) -> Option<Self> {
        let lines: Vec<&str> = content.lines().collect();

        let title = extract_title(content).unwrap_or_default();
        let body_at = lines.iter().position(|l| l.trim() == BODY_HEADING)?;

        let abstract_text = lines
            .iter()
            .position(|l| l.trim() == ABSTRACT_HEADING)
            .filter(|&i| i < body_at)
            .map(|i| lines[i + 1..body_at].join("\n").trim().to_string())
            .unwrap_or_default();

        let rest = &lines[body_at + 1..];
        let (body_len, group) = split_footer(rest);
        let body = rest[..body_len].join("\n").trim().to_string();

        Some(Self {
            title,
            abstract_text,
            body,
            group,
        })
    }

    /// Read and parse an article file
    pub fn read(path: &Path) -> Result<Self> {
        let content = read_existing(path)?;
        Self::parse(&content).ok_or_else(|| ArticleError::MalformedArticle(path.to_path_buf()))
    }
}

/// Length of the body within `lines` and the footer group, if any.
///
/// The footer is the last non-blank line; a `---` rule just above it belongs
/// to the footer. Without a footer every line is body.
fn split_footer(lines: &[&str]) -> (usize, Option<String>) {
    let Some(footer_at) = lines.iter().rposition(|l| !l.trim().is_empty()) else {
        return (lines.len(), None);
    };
    let Some(group) = lines[footer_at]
        .trim()
        .strip_prefix(FOOTER_PREFIX)
        .and_then(|s| s.strip_suffix(FOOTER_SUFFIX))
    else {
        return (lines.len(), None);
    };

    let body_len = lines[..footer_at]
        .iter()
        .rposition(|l| !l.trim().is_empty())
        .filter(|&i| lines[i].trim().starts_with("---"))
        .unwrap_or(footer_at);
    (body_len, Some(group.to_string()))
}

/// Text of the first markdown heading line, without the `#` marks
pub fn extract_title(content: &str) -> Option<String> {
    content
        .lines()
        .map(str::trim)
        .find(|l| l.starts_with('#'))
        .map(|l| l.trim_start_matches('#').trim().to_string())
        .filter(|t| !t.is_empty())
}

/// Title of an article file, falling back to the file stem
pub fn title_of(path: &Path) -> String {
    fs::read_to_string(path)
        .ok()
        .and_then(|c| extract_title(&c))
        .unwrap_or_else(|| {
            path.file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_default()
        })
}

pub(crate) fn read_existing(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => ArticleError::MissingFile(path.to_path_buf()),
        _ => ArticleError::Io(e),
    })
}
