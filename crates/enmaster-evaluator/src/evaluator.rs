//! Core TranslationEvaluator implementation

use crate::config::EvaluationConfig;
use crate::error::{EvaluatorError, Result};
use crate::prompt::EvaluationPromptBuilder;
use crate::report::{ReportMeta, ReportWriter};
use crate::sentences::{article_sentences, pair_sentences, read_translations};
use crate::types::EvaluationOutcome;
use enmaster_domain::traits::{CompletionRequest, LlmProvider};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::time::timeout;
use tracing::{debug, info};

/// Evaluates a user translation of an article and writes a report
pub struct TranslationEvaluator<L>
where
    L: LlmProvider,
{
    llm_provider: Arc<L>,
    config: EvaluationConfig,
    reports: ReportWriter,
}

impl<L> TranslationEvaluator<L>
where
    L: LlmProvider + Send + Sync + 'static,
    L::Error: std::fmt::Display,
{
    /// Create an evaluator writing reports into `results_dir`
    pub fn new(llm_provider: L, config: EvaluationConfig, results_dir: impl Into<PathBuf>) -> Self {
        Self {
            llm_provider: Arc::new(llm_provider),
            config,
            reports: ReportWriter::new(results_dir),
        }
    }

    /// Configuration in use
    pub fn config(&self) -> &EvaluationConfig {
        &self.config
    }

    /// Evaluate `translation` against the body of `article`
    pub async fn evaluate(&self, article: &Path, translation: &Path) -> Result<EvaluationOutcome> {
        self.config.validate().map_err(EvaluatorError::Config)?;

        let (title, sentences) = article_sentences(article)?;
        let translations = read_translations(translation)?;

        info!(
            "Evaluating '{}': {} sentence(s), {} translation line(s)",
            title,
            sentences.len(),
            translations.len()
        );

        let pairs = pair_sentences(&sentences, &translations);
        if pairs.is_empty() {
            return Err(EvaluatorError::EmptyInput(format!(
                "{} sentence(s) and {} translation line(s)",
                sentences.len(),
                translations.len()
            )));
        }

        let completion =
            EvaluationPromptBuilder::new(&pairs, &self.config.target_language).completion(&self.config);
        debug!("Prompt length: {} chars", completion.prompt.len());

        let evaluation = timeout(self.config.timeout(), self.call_llm(completion))
            .await
            .map_err(|_| EvaluatorError::Timeout(self.config.timeout_secs))??;

        debug!("LLM response length: {} chars", evaluation.len());

        let translation_filename = translation
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let meta = ReportMeta {
            article_title: &title,
            translation_filename: &translation_filename,
            model: self.llm_provider.model_name(),
        };
        let report = self.reports.write(&evaluation, &meta)?;

        Ok(EvaluationOutcome {
            report,
            sentence_count: sentences.len(),
            translation_count: translations.len(),
            evaluated_pairs: pairs.len(),
        })
    }

    /// Call the LLM provider
    async fn call_llm(&self, request: CompletionRequest) -> Result<String> {
        let llm = Arc::clone(&self.llm_provider);

        // LlmProvider is blocking
        tokio::task::spawn_blocking(move || {
            llm.generate(&request)
                .map_err(|e| EvaluatorError::Llm(e.to_string()))
        })
        .await
        .map_err(|e| EvaluatorError::Llm(format!("Task join error: {}", e)))?
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use enmaster_articles::ArticleDocument;
    use enmaster_llm::MockProvider;
    use std::fs;
    use tempfile::TempDir;

    const EVALUATION: &str = "## **SENTENCE 1**\n**Score**: 8\n\n## **OVERALL ASSESSMENT**\n**Overall score**: 8";

    fn write_inputs(dir: &Path, translation: &str) -> (PathBuf, PathBuf) {
        let article = dir.join("night-market.md");
        let doc = ArticleDocument {
            title: "Night Market".to_string(),
            abstract_text: "Evening food stalls.".to_string(),
            body: "Lanterns lit the street. Vendors shouted prices!".to_string(),
            group: Some("travel".to_string()),
        };
        fs::write(&article, doc.render()).unwrap();

        let translation_path = dir.join("night-market.txt");
        fs::write(&translation_path, translation).unwrap();
        (article, translation_path)
    }

    #[tokio::test]
    async fn test_evaluate_writes_report() {
        let tmp = TempDir::new().unwrap();
        let (article, translation) = write_inputs(tmp.path(), "灯笼照亮了街道\n小贩们喊着价格\n");
        let llm = MockProvider::new(EVALUATION).with_model("gpt-test");
        let probe = llm.clone();
        let evaluator =
            TranslationEvaluator::new(llm, EvaluationConfig::default(), tmp.path().join("results"));

        let outcome = evaluator.evaluate(&article, &translation).await.unwrap();

        assert_eq!(outcome.sentence_count, 2);
        assert_eq!(outcome.evaluated_pairs, 2);
        assert!(!outcome.is_misaligned());
        assert!(outcome.report.path.exists());
        assert!(outcome.report.content.contains("**Article title**: Night Market"));
        assert!(outcome.report.content.contains("**Translation file**: night-market.txt"));
        assert!(outcome.report.content.contains("**Model**: gpt-test"));
        assert!(outcome.report.content.contains(EVALUATION));

        let prompt = &probe.requests()[0].prompt;
        assert!(prompt.contains("Original: Lanterns lit the street\nUser translation: 灯笼照亮了街道"));
    }

    #[tokio::test]
    async fn test_mismatched_counts_use_shorter() {
        let tmp = TempDir::new().unwrap();
        let (article, translation) = write_inputs(tmp.path(), "灯笼照亮了街道\n");
        let evaluator = TranslationEvaluator::new(
            MockProvider::new(EVALUATION),
            EvaluationConfig::default(),
            tmp.path(),
        );

        let outcome = evaluator.evaluate(&article, &translation).await.unwrap();
        assert!(outcome.is_misaligned());
        assert_eq!(outcome.evaluated_pairs, 1);
    }

    #[tokio::test]
    async fn test_empty_translation_rejected() {
        let tmp = TempDir::new().unwrap();
        let (article, translation) = write_inputs(tmp.path(), "\n\n");
        let llm = MockProvider::new(EVALUATION);
        let probe = llm.clone();
        let evaluator = TranslationEvaluator::new(llm, EvaluationConfig::default(), tmp.path());

        let result = evaluator.evaluate(&article, &translation).await;
        assert!(matches!(result, Err(EvaluatorError::EmptyInput(_))));
        assert_eq!(probe.call_count(), 0);
    }

    #[tokio::test]
    async fn test_missing_article() {
        let tmp = TempDir::new().unwrap();
        let evaluator = TranslationEvaluator::new(
            MockProvider::default(),
            EvaluationConfig::default(),
            tmp.path(),
        );

        let result = evaluator
            .evaluate(&tmp.path().join("none.md"), &tmp.path().join("none.txt"))
            .await;
        assert!(matches!(result, Err(EvaluatorError::MissingFile(_))));
    }

    #[tokio::test]
    async fn test_empty_model_output_rejected() {
        let tmp = TempDir::new().unwrap();
        let (article, translation) = write_inputs(tmp.path(), "一\n二\n");
        let evaluator = TranslationEvaluator::new(
            MockProvider::new("   "),
            EvaluationConfig::default(),
            tmp.path().join("results"),
        );

        let result = evaluator.evaluate(&article, &translation).await;
        assert!(matches!(result, Err(EvaluatorError::EmptyInput(_))));
        assert!(!tmp.path().join("results").exists());
    }
}
