//! Integration tests for the generation workflow
//!
//! These drive the public API from a word list file on disk through the
//! mock LLM to persisted articles and a coverage verdict.

use enmaster_articles::workspace::read_word_list;
use enmaster_articles::{ArticleDocument, ArticleGenerator, GenerationConfig, Workspace};
use enmaster_llm::MockProvider;
use std::fs;
use tempfile::TempDir;

const RESPONSE: &str = "Sure! Here are your articles.

=== ARTICLE 1 ===
Title: The **Harbor** at Dawn
Abstract: Boats return to the harbor while the town wakes.
---
The **harbor** was quiet. A **lantern** swung over the harbor wall.

Fishermen counted their **nets** beside a second lantern.
=== END ARTICLE 1 ===

=== ARTICLE 2 ===
Title: Mending Nets
Abstract: An afternoon of repairs.
---
Old **nets** hang to dry. Every net tells a story.
=== END ARTICLE 2 ===
";

fn setup() -> (TempDir, Workspace) {
    let tmp = TempDir::new().unwrap();
    let workspace = Workspace::new(tmp.path());
    workspace.ensure().unwrap();
    fs::write(
        workspace.word_lists.join("harbor.txt"),
        "harbor\nlantern\n\nnet\nHarbor\n",
    )
    .unwrap();
    (tmp, workspace)
}

#[tokio::test]
async fn test_word_list_to_articles() {
    let (_tmp, workspace) = setup();

    let path = workspace.find_word_list("harbor").unwrap();
    let list = read_word_list(&path).unwrap();
    assert_eq!(list.words(), &["harbor", "lantern", "net"]);

    let generator = ArticleGenerator::new(
        MockProvider::new(RESPONSE),
        GenerationConfig::default(),
        &workspace.articles,
    );
    let outcome = generator.generate(&list).await.unwrap();

    assert!(!outcome.degraded);
    assert_eq!(outcome.raw_output, RESPONSE);
    assert_eq!(outcome.articles.len(), 2);
    assert_eq!(workspace.list_articles().unwrap().len(), 2);

    // Titles are not counted; "nets" contains "net"
    assert!(outcome.coverage.is_satisfied());
    assert_eq!(outcome.coverage.count_for("harbor"), Some(2));
    assert_eq!(outcome.coverage.count_for("lantern"), Some(2));
    assert_eq!(outcome.coverage.count_for("net"), Some(3));

    let first = ArticleDocument::read(&outcome.articles[0].path).unwrap();
    assert_eq!(first.title, "The **Harbor** at Dawn");
    assert_eq!(first.abstract_text, "Boats return to the harbor while the town wakes.");
    assert!(first.body.ends_with("beside a second lantern."));
    assert_eq!(first.group.as_deref(), Some("harbor"));
}

#[tokio::test]
async fn test_repeated_runs_never_overwrite() {
    let (_tmp, workspace) = setup();
    let list = read_word_list(&workspace.word_lists.join("harbor.txt")).unwrap();

    let generator = ArticleGenerator::new(
        MockProvider::new(RESPONSE),
        GenerationConfig::default(),
        &workspace.articles,
    );
    let first = generator.generate(&list).await.unwrap();
    let second = generator.generate(&list).await.unwrap();

    assert_eq!(workspace.list_articles().unwrap().len(), 4);
    for record in first.articles.iter().chain(&second.articles) {
        assert!(record.path.exists());
    }
}

#[tokio::test]
async fn test_status_after_generation() {
    let (tmp, workspace) = setup();
    let list = read_word_list(&workspace.word_lists.join("harbor.txt")).unwrap();
    let generator = ArticleGenerator::new(
        MockProvider::new(RESPONSE),
        GenerationConfig::default(),
        &workspace.articles,
    );
    generator.generate(&list).await.unwrap();

    let status = workspace.status(&tmp.path().join("enmaster.toml")).unwrap();
    assert_eq!(status.word_lists, 1);
    assert_eq!(status.articles, 2);
    assert_eq!(status.translations, 0);
    assert!(!status.is_complete());
}
