//! enmaster Evaluator
//!
//! Assesses a user's line-by-line translation of a generated article with an
//! LLM and saves the feedback as a markdown report.
//!
//! # Architecture
//!
//! ```text
//! article body → sentences ┐
//!                          ├→ pairs → prompt → LLM → report (translation_results/*.md)
//! translation lines ───────┘
//! ```
//!
//! Sentences are split on runs of `.`, `!` and `?`; fragments of five
//! characters or fewer are dropped. Pairing is positional and stops at the
//! shorter side.

#![warn(missing_docs)]

mod config;
mod error;
mod evaluator;
mod matching;
mod prompt;
mod report;
mod sentences;
mod types;

pub use config::EvaluationConfig;
pub use error::{EvaluatorError, Result};
pub use evaluator::TranslationEvaluator;
pub use matching::{find_matching_files, fuzzy_match};
pub use prompt::EvaluationPromptBuilder;
pub use report::{render_report, ReportMeta, ReportWriter, REPORT_PREFIX};
pub use sentences::{article_sentences, pair_sentences, read_translations, split_sentences};
pub use types::{EvaluationOutcome, EvaluationReport, SentencePair};
