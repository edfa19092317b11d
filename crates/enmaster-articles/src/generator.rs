//! Article generation pipeline: prompt, LLM call, parse, persist, verify

use crate::config::GenerationConfig;
use crate::coverage::CoverageChecker;
use crate::error::{ArticleError, Result};
use crate::parser::ArticleParser;
use crate::prompt::GenerationPromptBuilder;
use crate::types::{GenerationOutcome, GenerationRequest};
use crate::writer::ArticleWriter;
use enmaster_domain::traits::{CompletionRequest, LlmProvider};
use enmaster_domain::WordList;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::time::timeout;
use tracing::{debug, info, warn};

/// Characters of model output shown before parsing
pub const PREVIEW_CHARS: usize = 500;

/// Generates, saves and checks a batch of articles for a word list
pub struct ArticleGenerator<L>
where
    L: LlmProvider,
{
    llm_provider: Arc<L>,
    config: GenerationConfig,
    parser: ArticleParser,
    writer: ArticleWriter,
}

impl<L> ArticleGenerator<L>
where
    L: LlmProvider + Send + Sync + 'static,
    L::Error: std::fmt::Display,
{
    /// Create a generator writing into `output_dir`
    pub fn new(llm_provider: L, config: GenerationConfig, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            llm_provider: Arc::new(llm_provider),
            config,
            parser: ArticleParser::new(),
            writer: ArticleWriter::new(output_dir),
        }
    }

    /// Configuration in use
    pub fn config(&self) -> &GenerationConfig {
        &self.config
    }

    /// Name of the underlying model
    pub fn model_name(&self) -> &str {
        self.llm_provider.model_name()
    }

    /// Generate articles for `list` with the configured batch settings
    pub async fn generate(&self, list: &WordList) -> Result<GenerationOutcome> {
        self.generate_request(GenerationRequest::from_word_list(list, &self.config))
            .await
    }

    /// Generate articles for an explicit request
    pub async fn generate_request(&self, request: GenerationRequest) -> Result<GenerationOutcome> {
        self.config.validate().map_err(ArticleError::Config)?;
        if request.count == 0 {
            return Err(ArticleError::Config(
                "article count must be greater than 0".to_string(),
            ));
        }
        if request.words.is_empty() {
            return Err(ArticleError::EmptyWordList(request.group));
        }

        info!(
            "Generating {} article(s) for '{}' with {} word(s)",
            request.count,
            request.group,
            request.words.len()
        );

        let completion = GenerationPromptBuilder::new(&request).completion(&self.config);
        debug!("Prompt length: {} chars", completion.prompt.len());

        let raw = timeout(self.config.timeout(), self.call_llm(completion))
            .await
            .map_err(|_| ArticleError::Timeout(self.config.timeout_secs))??;

        debug!("LLM response length: {} chars", raw.len());
        info!("Model output preview:\n{}", preview(&raw, PREVIEW_CHARS));

        self.parse_and_save(raw, &request)
    }

    /// Parse `raw`, write each article and check coverage.
    ///
    /// Fails on the first write error; articles written before it stay on
    /// disk.
    pub fn parse_and_save(&self, raw: String, request: &GenerationRequest) -> Result<GenerationOutcome> {
        let outcome = self.parser.parse_outcome(&raw);
        let degraded = outcome.is_degraded();
        let parsed = outcome.into_articles();

        if parsed.len() < request.count {
            warn!(
                "Requested {} article(s) but parsed {}",
                request.count,
                parsed.len()
            );
        }

        let defaulted_fields = parsed.iter().filter(|a| a.has_defaults()).count();
        if defaulted_fields > 0 {
            warn!("{} article(s) use placeholder title or abstract", defaulted_fields);
        }

        let mut articles = Vec::with_capacity(parsed.len());
        for article in &parsed {
            articles.push(self.writer.write(article, &request.group)?);
        }

        let coverage = CoverageChecker::new(request.min_occurrences).check(&articles, &request.words);

        Ok(GenerationOutcome {
            raw_output: raw,
            articles,
            degraded,
            defaulted_fields,
            coverage,
        })
    }

    /// Call the LLM provider
    async fn call_llm(&self, request: CompletionRequest) -> Result<String> {
        let llm = Arc::clone(&self.llm_provider);

        // LlmProvider is blocking
        tokio::task::spawn_blocking(move || {
            llm.generate(&request)
                .map_err(|e| ArticleError::Llm(e.to_string()))
        })
        .await
        .map_err(|e| ArticleError::Llm(format!("Task join error: {}", e)))?
    }
}

/// First `max_chars` characters of `text`, with an ellipsis when cut
pub fn preview(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((end, _)) => format!("{}...", &text[..end]),
        None => text.to_string(),
    }
}
