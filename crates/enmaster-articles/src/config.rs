//! Configuration for article generation

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for the ArticleGenerator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Number of articles requested per batch
    pub article_count: usize,

    /// Topic the articles should be about
    pub topic: String,

    /// Genre (e.g. "news report", "story")
    pub genre: String,

    /// Reading difficulty
    pub difficulty: String,

    /// Minimum total occurrences of each target word across the batch
    pub min_occurrences: usize,

    /// Token limit for the generation call
    pub max_tokens: u32,

    /// Sampling temperature for the generation call
    pub temperature: f32,

    /// Maximum time for a single generation call (seconds)
    pub timeout_secs: u64,
}

impl GenerationConfig {
    /// Get the generation timeout as a Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.article_count == 0 {
            return Err("article_count must be greater than 0".to_string());
        }
        if self.min_occurrences == 0 {
            return Err("min_occurrences must be greater than 0".to_string());
        }
        if self.max_tokens == 0 {
            return Err("max_tokens must be greater than 0".to_string());
        }
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err("temperature must be between 0.0 and 2.0".to_string());
        }
        if self.timeout_secs == 0 {
            return Err("timeout_secs must be greater than 0".to_string());
        }
        if self.topic.trim().is_empty() {
            return Err("topic must not be empty".to_string());
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            article_count: 2,
            topic: "Technology and Innovation".to_string(),
            genre: "Expository essay".to_string(),
            difficulty: "Intermediate".to_string(),
            min_occurrences: 2,
            max_tokens: 3000,
            temperature: 0.6,
            timeout_secs: 120,
        }
    }
}
