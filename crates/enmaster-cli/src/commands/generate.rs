//! Generate command implementation.

use crate::cli::GenerateArgs;
use crate::config::{Config, OutputFormat};
use crate::error::{CliError, Result};
use crate::output::Formatter;
use enmaster_articles::workspace::read_word_list;
use enmaster_articles::{preview, ArticleGenerator, GenerationConfig, GenerationOutcome, Workspace, PREVIEW_CHARS};
use enmaster_domain::LlmProvider;

/// Execute the generate command.
pub async fn execute_generate(
    args: GenerateArgs,
    config: &Config,
    api_key: Option<&str>,
    workspace: &Workspace,
    formatter: &Formatter,
) -> Result<()> {
    let llm = super::openai_provider(config, api_key)?;
    run_generation(llm, args, config, workspace, formatter).await?;
    Ok(())
}

/// Generate with any provider and print the results.
pub async fn run_generation<L>(
    llm: L,
    args: GenerateArgs,
    config: &Config,
    workspace: &Workspace,
    formatter: &Formatter,
) -> Result<GenerationOutcome>
where
    L: LlmProvider + Send + Sync + 'static,
    L::Error: std::fmt::Display,
{
    let path = workspace.find_word_list(&args.list)?;
    let list = read_word_list(&path)?;
    if list.is_empty() {
        return Err(CliError::InvalidInput(format!(
            "Word list {} has no words",
            path.display()
        )));
    }

    let generation = apply_overrides(&args, &config.generation);
    generation.validate().map_err(CliError::InvalidInput)?;

    let verbose = formatter.format() == OutputFormat::Table;
    if verbose {
        println!("{}", formatter.format_word_list(&list)?);
        println!(
            "{}",
            formatter.info(&format!(
                "Requesting {} article(s) from {} ...",
                generation.article_count,
                llm.model_name()
            ))
        );
    }

    workspace.ensure()?;
    let generator = ArticleGenerator::new(llm, generation.clone(), &workspace.articles);
    let outcome = generator.generate(&list).await?;

    if verbose {
        println!("{}", formatter.preview("Output preview", &preview(&outcome.raw_output, PREVIEW_CHARS)));
    }

    if outcome.degraded {
        eprintln!(
            "{}",
            formatter.warning("Response had no article markers; split it by paragraphs instead")
        );
    }
    if outcome.defaulted_fields > 0 {
        eprintln!(
            "{}",
            formatter.warning(&format!(
                "{} article(s) are missing a title or abstract and use placeholders",
                outcome.defaulted_fields
            ))
        );
    }
    if outcome.is_short(generation.article_count) {
        eprintln!(
            "{}",
            formatter.warning(&format!(
                "Requested {} article(s) but got {}",
                generation.article_count,
                outcome.articles.len()
            ))
        );
    }
    for path in &outcome.coverage.unreadable {
        eprintln!(
            "{}",
            formatter.warning(&format!("Could not re-read {} for the coverage check", path.display()))
        );
    }

    match formatter.format() {
        OutputFormat::Quiet => {
            for record in &outcome.articles {
                println!("{}", record.path.display());
            }
        }
        _ => {
            for record in &outcome.articles {
                println!("{}", formatter.success(&format!("{} → {}", record.title, record.filename)));
            }
            println!("{}", formatter.format_coverage(&outcome.coverage)?);
        }
    }

    Ok(outcome)
}

/// Command line values take precedence over the config file.
pub fn apply_overrides(args: &GenerateArgs, base: &GenerationConfig) -> GenerationConfig {
    let mut config = base.clone();
    if let Some(count) = args.count {
        config.article_count = count;
    }
    if let Some(topic) = &args.topic {
        config.topic = topic.clone();
    }
    if let Some(genre) = &args.genre {
        config.genre = genre.clone();
    }
    if let Some(difficulty) = &args.difficulty {
        config.difficulty = difficulty.clone();
    }
    if let Some(min) = args.min_occurrences {
        config.min_occurrences = min;
    }
    config
}

#[cfg(test)]
mod tests {
    use super::*;
    use enmaster_llm::MockProvider;
    use std::fs;
    use tempfile::TempDir;

    fn args(list: &str) -> GenerateArgs {
        GenerateArgs {
            list: list.to_string(),
            count: None,
            topic: None,
            genre: None,
            difficulty: None,
            min_occurrences: None,
        }
    }

    #[test]
    fn test_overrides() {
        let mut a = args("1");
        a.count = Some(4);
        a.topic = Some("Oceans".to_string());

        let config = apply_overrides(&a, &GenerationConfig::default());
        assert_eq!(config.article_count, 4);
        assert_eq!(config.topic, "Oceans");
        assert_eq!(config.genre, GenerationConfig::default().genre);
    }

    #[tokio::test]
    async fn test_run_generation_with_mock() {
        let tmp = TempDir::new().unwrap();
        let workspace = Workspace::new(tmp.path());
        workspace.ensure().unwrap();
        fs::write(workspace.word_lists.join("fruits.txt"), "apple\n").unwrap();

        let llm = MockProvider::new(
            "=== ARTICLE 1 ===\nTitle: Apples\nAbstract: Red.\n---\nAn apple, an apple.\n=== END ARTICLE 1 ===",
        );
        let mut a = args("fruits");
        a.count = Some(1);
        let formatter = Formatter::new(OutputFormat::Quiet, false);

        let outcome = run_generation(llm, a, &Config::default(), &workspace, &formatter)
            .await
            .unwrap();
        assert_eq!(outcome.articles.len(), 1);
        assert!(outcome.coverage.is_satisfied());
    }

    #[tokio::test]
    async fn test_unknown_list() {
        let tmp = TempDir::new().unwrap();
        let workspace = Workspace::new(tmp.path());
        let formatter = Formatter::new(OutputFormat::Quiet, false);

        let result = run_generation(
            MockProvider::default(),
            args("nope"),
            &Config::default(),
            &workspace,
            &formatter,
        )
        .await;
        assert!(matches!(
            result,
            Err(CliError::Article(enmaster_articles::ArticleError::MissingFile(_)))
        ));
    }

    #[tokio::test]
    async fn test_invalid_override_rejected() {
        let tmp = TempDir::new().unwrap();
        let workspace = Workspace::new(tmp.path());
        workspace.ensure().unwrap();
        fs::write(workspace.word_lists.join("fruits.txt"), "apple\n").unwrap();
        let mut a = args("fruits");
        a.count = Some(0);
        let formatter = Formatter::new(OutputFormat::Quiet, false);

        let result = run_generation(MockProvider::default(), a, &Config::default(), &workspace, &formatter).await;
        assert!(matches!(result, Err(CliError::InvalidInput(_))));
    }
}
