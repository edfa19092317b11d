//! Error types for translation evaluation

use enmaster_articles::ArticleError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while evaluating a translation
#[derive(Error, Debug)]
pub enum EvaluatorError {
    /// A required file does not exist or no file matched a query
    #[error("File not found: {}", .0.display())]
    MissingFile(PathBuf),

    /// LLM provider error
    #[error("LLM error: {0}")]
    Llm(String),

    /// Evaluation call exceeded the configured timeout
    #[error("Evaluation timeout after {0}s")]
    Timeout(u64),

    /// Writing the report failed
    #[error("Failed to write {}: {source}", path.display())]
    Write {
        /// Target path
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Reading or parsing the article failed
    #[error(transparent)]
    Article(#[from] ArticleError),

    /// Other I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Nothing to evaluate (no sentences, no translations or no model output)
    #[error("Nothing to evaluate: {0}")]
    EmptyInput(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result alias for this crate
pub type Result<T> = std::result::Result<T, EvaluatorError>;

impl EvaluatorError {
    /// Flatten article-layer write failures and missing files into this layer
    pub(crate) fn from_article(err: ArticleError) -> Self {
        match err {
            ArticleError::MissingFile(path) => EvaluatorError::MissingFile(path),
            ArticleError::Write { path, source } => EvaluatorError::Write { path, source },
            other => EvaluatorError::Article(other),
        }
    }
}
