//! Error types for the CLI application.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Required file does not exist
    #[error("File not found: {}", .0.display())]
    MissingFile(PathBuf),

    /// Config file exists but cannot be parsed
    #[error("Malformed config {}: {message}", path.display())]
    MalformedConfig {
        /// Config file path
        path: PathBuf,
        /// Parser message
        message: String,
    },

    /// Article generation error
    #[error(transparent)]
    Article(#[from] enmaster_articles::ArticleError),

    /// Translation evaluation error
    #[error(transparent)]
    Evaluator(#[from] enmaster_evaluator::EvaluatorError),

    /// LLM provider setup error
    #[error("LLM error: {0}")]
    Llm(#[from] enmaster_llm::LlmError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
