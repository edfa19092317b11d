//! Types for translation evaluation

use std::path::PathBuf;

/// One original sentence with the user's translation of it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentencePair {
    /// 1-based position in the article
    pub index: usize,

    /// Sentence from the article body
    pub original: String,

    /// User translation line
    pub translation: String,
}

/// A written evaluation report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvaluationReport {
    /// Location of the report file
    pub path: PathBuf,

    /// Full markdown content as written
    pub content: String,
}

/// Result of evaluating one translation
#[derive(Debug, Clone)]
pub struct EvaluationOutcome {
    /// The persisted report
    pub report: EvaluationReport,

    /// Sentences found in the article
    pub sentence_count: usize,

    /// Non-empty lines in the translation
    pub translation_count: usize,

    /// Pairs sent to the model (the shorter of the two counts)
    pub evaluated_pairs: usize,
}

impl EvaluationOutcome {
    /// Sentence and translation counts differ
    pub fn is_misaligned(&self) -> bool {
        self.sentence_count != self.translation_count
    }
}
