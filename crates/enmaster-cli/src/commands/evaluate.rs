//! Evaluate command implementation.

use crate::cli::EvaluateArgs;
use crate::config::{Config, OutputFormat};
use crate::error::Result;
use crate::output::Formatter;
use enmaster_articles::{preview, Workspace, PREVIEW_CHARS};
use enmaster_domain::LlmProvider;
use enmaster_evaluator::{find_matching_files, EvaluationOutcome, TranslationEvaluator};

/// Execute the evaluate command.
pub async fn execute_evaluate(
    args: EvaluateArgs,
    config: &Config,
    api_key: Option<&str>,
    workspace: &Workspace,
    formatter: &Formatter,
) -> Result<()> {
    let llm = super::openai_provider(config, api_key)?;
    run_evaluation(llm, args, config, workspace, formatter).await?;
    Ok(())
}

/// Evaluate with any provider and print the results.
pub async fn run_evaluation<L>(
    llm: L,
    args: EvaluateArgs,
    config: &Config,
    workspace: &Workspace,
    formatter: &Formatter,
) -> Result<EvaluationOutcome>
where
    L: LlmProvider + Send + Sync + 'static,
    L::Error: std::fmt::Display,
{
    let (article, translation) = find_matching_files(workspace, &args.article, args.translation.as_deref())?;

    let mut evaluation = config.evaluation.clone();
    if let Some(language) = args.language {
        evaluation.target_language = language;
    }

    let verbose = formatter.format() == OutputFormat::Table;
    if verbose {
        println!("{}", formatter.info(&format!("Article: {}", article.display())));
        println!("{}", formatter.info(&format!("Translation: {}", translation.display())));
        println!("{}", formatter.info(&format!("Evaluating with {} ...", llm.model_name())));
    }

    let evaluator = TranslationEvaluator::new(llm, evaluation, &workspace.results);
    let outcome = evaluator.evaluate(&article, &translation).await?;

    if outcome.is_misaligned() {
        eprintln!(
            "{}",
            formatter.warning(&format!(
                "Article has {} sentence(s) but the translation has {} line(s); evaluated {}",
                outcome.sentence_count, outcome.translation_count, outcome.evaluated_pairs
            ))
        );
    }

    match formatter.format() {
        OutputFormat::Quiet => println!("{}", outcome.report.path.display()),
        OutputFormat::Json => println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({
                "report": outcome.report.path.display().to_string(),
                "sentences": outcome.sentence_count,
                "translations": outcome.translation_count,
                "evaluated": outcome.evaluated_pairs,
            }))?
        ),
        OutputFormat::Table => {
            println!(
                "{}",
                formatter.success(&format!("Report saved: {}", outcome.report.path.display()))
            );
            println!(
                "{}",
                formatter.preview("Report preview", &preview(&outcome.report.content, PREVIEW_CHARS))
            );
        }
    }

    Ok(outcome)
}
