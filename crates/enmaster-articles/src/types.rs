//! Request and outcome types for article generation

use crate::config::GenerationConfig;
use enmaster_domain::{ArticleRecord, CoverageResult, WordList};
use serde::{Deserialize, Serialize};

/// Request to generate one batch of articles
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationRequest {
    /// Target words, in word list order
    pub words: Vec<String>,

    /// Word list group, used as the filename prefix
    pub group: String,

    /// Number of articles to request
    pub count: usize,

    /// Topic of the articles
    pub topic: String,

    /// Genre of the articles
    pub genre: String,

    /// Reading difficulty
    pub difficulty: String,

    /// Minimum total occurrences per word across the batch
    pub min_occurrences: usize,
}

impl GenerationRequest {
    /// Request for `list` using the batch settings of `config`
    pub fn from_word_list(list: &WordList, config: &GenerationConfig) -> Self {
        Self {
            words: list.words().to_vec(),
            group: list.group().to_string(),
            count: config.article_count,
            topic: config.topic.clone(),
            genre: config.genre.clone(),
            difficulty: config.difficulty.clone(),
            min_occurrences: config.min_occurrences,
        }
    }
}

/// Result of one generation run
#[derive(Debug, Clone)]
pub struct GenerationOutcome {
    /// Unmodified model response
    pub raw_output: String,

    /// Persisted articles in ordinal order
    pub articles: Vec<ArticleRecord>,

    /// Whether the paragraph fallback was used instead of the markers
    pub degraded: bool,

    /// Number of articles whose title or abstract was a placeholder
    pub defaulted_fields: usize,

    /// Word coverage across `articles`
    pub coverage: CoverageResult,
}

impl GenerationOutcome {
    /// Fewer articles were produced than requested
    pub fn is_short(&self, requested: usize) -> bool {
        self.articles.len() < requested
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_from_word_list() {
        let list = WordList::new("fruits", ["apple", "Apple", "banana"]);
        let config = GenerationConfig {
            article_count: 3,
            ..Default::default()
        };

        let request = GenerationRequest::from_word_list(&list, &config);
        assert_eq!(request.group, "fruits");
        assert_eq!(request.words, vec!["apple", "banana"]);
        assert_eq!(request.count, 3);
        assert_eq!(request.min_occurrences, config.min_occurrences);
    }
}
