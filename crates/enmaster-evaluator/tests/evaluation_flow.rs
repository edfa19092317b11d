//! Integration tests for the evaluation workflow
//!
//! Generated articles are evaluated against translations picked by loose
//! file name matching, as the CLI does.

use enmaster_articles::{ArticleGenerator, GenerationConfig, Workspace};
use enmaster_domain::WordList;
use enmaster_evaluator::{find_matching_files, EvaluationConfig, TranslationEvaluator, REPORT_PREFIX};
use enmaster_llm::MockProvider;
use std::fs;
use tempfile::TempDir;

const ARTICLE: &str = "=== ARTICLE 1 ===
Title: Rainy Season
Abstract: Weather in the hills.
---
Clouds gathered over the hills. The **umbrella** was finally useful!
=== END ARTICLE 1 ===";

#[tokio::test]
async fn test_generate_translate_evaluate() {
    let tmp = TempDir::new().unwrap();
    let workspace = Workspace::new(tmp.path());
    workspace.ensure().unwrap();

    let generator = ArticleGenerator::new(
        MockProvider::new(ARTICLE),
        GenerationConfig {
            article_count: 1,
            min_occurrences: 1,
            ..Default::default()
        },
        &workspace.articles,
    );
    let outcome = generator
        .generate(&WordList::new("weather", ["umbrella"]))
        .await
        .unwrap();
    assert!(outcome.coverage.is_satisfied());

    // The user saves a translation named after the article
    let stem = outcome.articles[0].path.file_stem().unwrap().to_string_lossy().into_owned();
    fs::write(
        workspace.translations.join(format!("{}.txt", stem)),
        "云聚集在山上\n雨伞终于派上用场了\n",
    )
    .unwrap();

    let (article, translation) = find_matching_files(&workspace, "rainy-season", None).unwrap();
    assert_eq!(article, outcome.articles[0].path);

    let evaluator = TranslationEvaluator::new(
        MockProvider::new("## **OVERALL ASSESSMENT**\n**Overall score**: 9"),
        EvaluationConfig::default(),
        &workspace.results,
    );
    let result = evaluator.evaluate(&article, &translation).await.unwrap();

    assert_eq!(result.evaluated_pairs, 2);
    assert!(result.report.content.contains("**Article title**: Rainy Season"));

    let reports = workspace.list_reports().unwrap();
    assert_eq!(reports.len(), 1);
    assert!(reports[0]
        .file_name()
        .unwrap()
        .to_string_lossy()
        .starts_with(REPORT_PREFIX));
}
