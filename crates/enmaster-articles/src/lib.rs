//! enmaster Articles
//!
//! Generates vocabulary practice articles with an LLM, persists them as
//! markdown and verifies that every target word appears often enough.
//!
//! # Architecture
//!
//! ```text
//! WordList → prompt → LLM → ArticleParser → ArticleWriter → CoverageChecker
//!                            (TextExtractor)   (articles/*.md)
//! ```
//!
//! Parsing never fails: a response without delimiters degrades to
//! paragraph bisection and missing labels degrade to placeholders. Both are
//! reported through [`GenerationOutcome`] rather than as errors.
//!
//! # Example Usage
//!
//! ```no_run
//! use enmaster_articles::{ArticleGenerator, GenerationConfig, Workspace};
//! use enmaster_articles::workspace::read_word_list;
//! use enmaster_llm::MockProvider;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let workspace = Workspace::new(".");
//! workspace.ensure()?;
//!
//! let list = read_word_list(&workspace.find_word_list("1")?)?;
//! let generator = ArticleGenerator::new(
//!     MockProvider::default(),
//!     GenerationConfig::default(),
//!     &workspace.articles,
//! );
//!
//! let outcome = generator.generate(&list).await?;
//! println!("Saved {} article(s)", outcome.articles.len());
//! println!("Words below threshold: {:?}", outcome.coverage.under_threshold());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod config;
mod coverage;
mod error;
mod extract;
mod generator;
mod parser;
mod prompt;
mod types;

pub mod document;
pub mod workspace;
pub mod writer;


pub use config::GenerationConfig;
pub use coverage::{count_occurrences, CoverageChecker};
pub use document::ArticleDocument;
pub use error::{ArticleError, Result};
pub use extract::{default_title, TextExtractor, DEFAULT_ABSTRACT};
pub use generator::{preview, ArticleGenerator, PREVIEW_CHARS};
pub use parser::{scan_blocks, ArticleParser, ParseOutcome};
pub use prompt::{GenerationPromptBuilder, GENERATION_SYSTEM_PROMPT};
pub use types::{GenerationOutcome, GenerationRequest};
pub use workspace::{ProjectStatus, Workspace};
pub use writer::{create_unique_file, slugify, ArticleWriter};
