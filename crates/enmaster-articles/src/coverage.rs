//! Word coverage verification across persisted articles

use crate::document::{read_existing, ArticleDocument};
use enmaster_domain::{ArticleRecord, CoverageResult, WordCount};
use std::collections::HashSet;
use tracing::{debug, info, warn};

/// Checks that each target word appears often enough across a batch.
///
/// Matching is case-insensitive substring counting, not whole-word
/// matching: "cat" is counted inside "category".
#[derive(Debug, Clone, Copy)]
pub struct CoverageChecker {
    min_occurrences: usize,
}

impl CoverageChecker {
    /// Create a checker with the given threshold
    pub fn new(min_occurrences: usize) -> Self {
        Self { min_occurrences }
    }

    /// Count target words in the bodies of `records`.
    ///
    /// Records that cannot be read are skipped and listed in
    /// [`CoverageResult::unreadable`].
    pub fn check<S: AsRef<str>>(&self, records: &[ArticleRecord], target_words: &[S]) -> CoverageResult {
        let mut seen = HashSet::new();
        let mut counts: Vec<WordCount> = target_words
            .iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty() && seen.insert(w.clone()))
            .map(|word| WordCount { word, count: 0 })
            .collect();

        let mut unreadable = Vec::new();

        for record in records {
            let content = match read_existing(&record.path) {
                Ok(content) => content,
                Err(e) => {
                    warn!("Skipping {} in coverage check: {}", record.filename, e);
                    unreadable.push(record.path.clone());
                    continue;
                }
            };

            let body = match ArticleDocument::parse(&content) {
                Some(doc) => doc.body,
                None => {
                    debug!("{} has no body section, counting whole file", record.filename);
                    content
                }
            };
            let body = body.to_lowercase();

            for entry in counts.iter_mut() {
                entry.count += count_occurrences(&body, &entry.word);
            }
        }

        let result = CoverageResult {
            min_occurrences: self.min_occurrences,
            counts,
            unreadable,
        };

        if result.is_satisfied() {
            info!("All words reach {} occurrence(s)", self.min_occurrences);
        } else {
            info!(
                "{} word(s) below {} occurrence(s): {:?}",
                result.under_threshold().len(),
                self.min_occurrences,
                result.under_threshold()
            );
        }

        result
    }
}

/// Non-overlapping occurrences of `word` in `text` (both already lowercased)
pub fn count_occurrences(text: &str, word: &str) -> usize {
    if word.is_empty() {
        return 0;
    }
    text.matches(word).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_occurrences_non_overlapping() {
        assert_eq!(count_occurrences("aaaa", "aa"), 2);
        assert_eq!(count_occurrences("category cat", "cat"), 2);
        assert_eq!(count_occurrences("anything", ""), 0);
    }

    #[test]
    fn test_duplicate_words_collapse() {
        let result = CoverageChecker::new(1).check(&[], &["Apple", "apple", " APPLE "]);
        assert_eq!(result.counts.len(), 1);
        assert_eq!(result.counts[0].word, "apple");
        assert_eq!(result.counts[0].count, 0);
    }
}
