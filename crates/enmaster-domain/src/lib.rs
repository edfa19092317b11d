//! enmaster Domain Layer
//!
//! Core value types and trait interfaces shared by every other enmaster crate.
//! It has no third-party dependencies; filesystem and network concerns live in
//! the infrastructure crates.
//!
//! ## Key Concepts
//!
//! - **WordList**: The vocabulary a batch of articles must practice
//! - **ParsedArticle**: Title, abstract and body pulled out of a model response
//! - **FieldValue**: Tells genuine extracted content apart from placeholders
//! - **ArticleRecord**: A persisted article on disk
//! - **CoverageResult**: Per-word occurrence counts against a threshold
//!
//! ## Architecture
//!
//! - No external crate dependencies
//! - Trait definitions for all external interactions (see [`traits`])

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod article;
pub mod coverage;
pub mod traits;
pub mod word_list;

// Re-exports for convenience
pub use article::{ArticleBlock, ArticleRecord, FieldValue, ParsedArticle};
pub use coverage::{CoverageResult, WordCount};
pub use traits::{CompletionRequest, LlmProvider};
pub use word_list::WordList;
