//! Coverage module - aggregate word occurrence counts

use std::path::PathBuf;

/// Occurrence count of one target word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordCount {
    /// Lowercase target word
    pub word: String,

    /// Total occurrences across the checked articles
    pub count: usize,
}

/// Result of checking a batch of articles against the target words.
///
/// Counts are kept in the order the words were first given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverageResult {
    /// Minimum occurrences required per word
    pub min_occurrences: usize,

    /// Per-word totals
    pub counts: Vec<WordCount>,

    /// Articles that could not be read and were skipped
    pub unreadable: Vec<PathBuf>,
}

impl CoverageResult {
    /// True iff every word reaches the threshold
    pub fn is_satisfied(&self) -> bool {
        self.counts.iter().all(|c| c.count >= self.min_occurrences)
    }

    /// Words below the threshold, in input order
    pub fn under_threshold(&self) -> Vec<&str> {
        self.counts
            .iter()
            .filter(|c| c.count < self.min_occurrences)
            .map(|c| c.word.as_str())
            .collect()
    }

    /// Count for a word (case-insensitive lookup)
    pub fn count_for(&self, word: &str) -> Option<usize> {
        let word = word.to_lowercase();
        self.counts.iter().find(|c| c.word == word).map(|c| c.count)
    }
}
