//! Error types for article generation

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while generating, persisting or checking articles
#[derive(Error, Debug)]
pub enum ArticleError {
    /// LLM provider error
    #[error("LLM error: {0}")]
    Llm(String),

    /// Generation call exceeded the configured timeout
    #[error("Generation timeout after {0}s")]
    Timeout(u64),

    /// A required file does not exist
    #[error("File not found: {}", .0.display())]
    MissingFile(PathBuf),

    /// Writing an article or backup failed
    #[error("Failed to write {}: {source}", path.display())]
    Write {
        /// Target path
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// An article file lacks the expected sections
    #[error("Malformed article {}: no body section", .0.display())]
    MalformedArticle(PathBuf),

    /// Other I/O error (reading files, listing directories)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The word list has no words
    #[error("Word list '{0}' is empty")]
    EmptyWordList(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result alias for this crate
pub type Result<T> = std::result::Result<T, ArticleError>;
