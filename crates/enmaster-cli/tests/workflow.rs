//! Integration tests for the CLI library
//!
//! Commands are driven through the library with the mock provider, so no
//! network access or API key is needed.

use enmaster_cli::cli::{EvaluateArgs, GenerateArgs};
use enmaster_cli::commands::evaluate::run_evaluation;
use enmaster_cli::commands::generate::run_generation;
use enmaster_cli::commands::execute_init;
use enmaster_cli::config::OutputFormat;
use enmaster_cli::{Config, Formatter};
use enmaster_llm::MockProvider;
use std::fs;
use tempfile::TempDir;

const ARTICLES: &str = "=== ARTICLE 1 ===
Title: Train Journey
Abstract: A long ride north.
---
The **ticket** was crumpled. I showed my ticket twice before the **platform** emptied.
=== END ARTICLE 1 ===
=== ARTICLE 2 ===
Title: Lost Luggage
Abstract: A bag goes missing.
---
At the platform a porter found my bag.
=== END ARTICLE 2 ===";

#[tokio::test]
async fn test_init_generate_evaluate_status() {
    let tmp = TempDir::new().unwrap();
    let config_path = tmp.path().join("enmaster.toml");

    let mut config = Config::default();
    config.workspace.root = tmp.path().to_path_buf();
    let workspace = config.workspace();
    let formatter = Formatter::new(OutputFormat::Quiet, false);

    execute_init(&workspace, &config_path, &formatter).unwrap();
    fs::write(workspace.word_lists.join("travel.txt"), "ticket\nplatform\n").unwrap();

    let generated = run_generation(
        MockProvider::new(ARTICLES),
        GenerateArgs {
            list: "1".to_string(),
            count: None,
            topic: Some("Travel".to_string()),
            genre: None,
            difficulty: None,
            min_occurrences: None,
        },
        &config,
        &workspace,
        &formatter,
    )
    .await
    .unwrap();

    assert_eq!(generated.articles.len(), 2);
    assert_eq!(generated.coverage.count_for("ticket"), Some(2));
    assert_eq!(generated.coverage.count_for("platform"), Some(2));
    assert!(generated.coverage.is_satisfied());

    let stem = generated.articles[0]
        .path
        .file_stem()
        .unwrap()
        .to_string_lossy()
        .into_owned();
    fs::write(
        workspace.translations.join(format!("{}.txt", stem)),
        "车票皱巴巴的\n站台清空之前我出示了两次车票\n",
    )
    .unwrap();

    let evaluated = run_evaluation(
        MockProvider::new("**Overall score**: 7"),
        EvaluateArgs {
            article: "train-journey".to_string(),
            translation: None,
            language: None,
        },
        &config,
        &workspace,
        &formatter,
    )
    .await
    .unwrap();
    assert_eq!(evaluated.evaluated_pairs, 2);

    let status = workspace.status(&config_path).unwrap();
    assert!(status.is_complete());
}
