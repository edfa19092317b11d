//! Configuration for translation evaluation

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for the TranslationEvaluator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvaluationConfig {
    /// Language the user translates into
    pub target_language: String,

    /// Token limit for the evaluation call
    pub max_tokens: u32,

    /// Sampling temperature for the evaluation call
    pub temperature: f32,

    /// Maximum time for a single evaluation call (seconds)
    pub timeout_secs: u64,
}

impl EvaluationConfig {
    /// Get the evaluation timeout as a Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.target_language.trim().is_empty() {
            return Err("target_language must not be empty".to_string());
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

impl Default for EvaluationConfig {
    fn default() -> Self {
        Self {
            target_language: "Chinese".to_string(),
            max_tokens: 4000,
            temperature: 0.3,
            timeout_secs: 120,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = EvaluationConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.target_language, "Chinese");
        assert_eq!(config.max_tokens, 4000);
    }

    #[test]
    fn test_invalid_temperature() {
        let config = EvaluationConfig {
            temperature: 3.5,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = EvaluationConfig::from_toml("target_language = \"Spanish\"").unwrap();
        assert_eq!(config.target_language, "Spanish");
        assert_eq!(config.timeout_secs, 120);
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = EvaluationConfig::default();
        let toml_str = config.to_toml().unwrap();
        assert_eq!(EvaluationConfig::from_toml(&toml_str).unwrap(), config);
    }
}
