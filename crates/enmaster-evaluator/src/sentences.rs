//! Sentence splitting and translation line reading

use crate::error::{EvaluatorError, Result};
use crate::types::SentencePair;
use enmaster_articles::ArticleDocument;
use regex::Regex;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;
use tracing::{debug, warn};

/// Fragments this short (in characters) are not sentences
pub const MIN_SENTENCE_CHARS: usize = 5;

static TERMINATORS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]+").expect("terminator pattern is valid"));

/// Split text on runs of `.`, `!` and `?`, dropping short fragments
pub fn split_sentences(text: &str) -> Vec<String> {
    TERMINATORS
        .split(text)
        .map(str::trim)
        .filter(|s| s.chars().count() > MIN_SENTENCE_CHARS)
        .map(str::to_string)
        .collect()
}

/// Title and body sentences of an article file
pub fn article_sentences(path: &Path) -> Result<(String, Vec<String>)> {
    let doc = ArticleDocument::read(path).map_err(EvaluatorError::from_article)?;
    let sentences = split_sentences(&doc.body);
    debug!("{}: {} sentence(s)", path.display(), sentences.len());
    Ok((doc.title, sentences))
}

/// Non-empty, trimmed lines of a translation file
pub fn read_translations(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => EvaluatorError::MissingFile(path.to_path_buf()),
        _ => EvaluatorError::Io(e),
    })?;

    Ok(content
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect())
}

/// Pair sentences with translations line by line, truncating to the shorter
pub fn pair_sentences(sentences: &[String], translations: &[String]) -> Vec<SentencePair> {
    if sentences.len() != translations.len() {
        warn!(
            "Article has {} sentence(s) but translation has {} line(s); evaluating {}",
            sentences.len(),
            translations.len(),
            sentences.len().min(translations.len())
        );
    }

    sentences
        .iter()
        .zip(translations)
        .enumerate()
        .map(|(i, (original, translation))| SentencePair {
            index: i + 1,
            original: original.clone(),
            translation: translation.clone(),
        })
        .collect()
}
