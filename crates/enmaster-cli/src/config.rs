//! Configuration management for the CLI.
//!
//! Lookup order: `--config <path>`, then `enmaster.toml` in the working
//! directory, then `~/.enmaster/config.toml`. An explicit path must exist;
//! otherwise built-in defaults are used when no file is found.

use crate::error::{CliError, Result};
use enmaster_articles::{GenerationConfig, Workspace};
use enmaster_evaluator::EvaluationConfig;
use enmaster_llm::openai::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Config file name looked up in the working directory
pub const DEFAULT_FILE: &str = "enmaster.toml";

/// CLI configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Chat completions endpoint
    #[serde(default)]
    pub openai: OpenAiSettings,

    /// Article generation defaults
    #[serde(default)]
    pub generation: GenerationConfig,

    /// Translation evaluation defaults
    #[serde(default)]
    pub evaluation: EvaluationConfig,

    /// Working directories
    #[serde(default)]
    pub workspace: WorkspaceSettings,

    /// Global settings
    #[serde(default)]
    pub settings: Settings,
}

/// Chat completions endpoint settings.
#[derive(Clone, Serialize, Deserialize)]
pub struct OpenAiSettings {
    /// API key (overridden by `--api-key` / `ENMASTER_API_KEY`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Model name
    #[serde(default = "default_model")]
    pub model: String,

    /// API base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// HTTP request timeout (seconds)
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

/// Working directory layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkspaceSettings {
    /// Root all directories are relative to
    pub root: PathBuf,
    /// Word list directory
    pub word_lists: String,
    /// Generated article directory
    pub articles: String,
    /// Translation directory
    pub translations: String,
    /// Evaluation report directory
    pub results: String,
}

/// Global CLI settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Enable colored output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Default output format
    #[serde(default = "default_format")]
    pub format: OutputFormat,
}

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Table format
    Table,
    /// JSON format
    Json,
    /// Quiet (minimal) format
    Quiet,
}

impl Config {
    /// Path of the per-user configuration file.
    pub fn home_path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
        Ok(home.join(".enmaster").join("config.toml"))
    }

    /// Resolve which config file applies.
    pub fn resolve_path(explicit: Option<&Path>) -> PathBuf {
        if let Some(path) = explicit {
            return path.to_path_buf();
        }

        let local = PathBuf::from(DEFAULT_FILE);
        if local.is_file() {
            return local;
        }

        match Self::home_path() {
            Ok(home) if home.is_file() => home,
            _ => local,
        }
    }

    /// Load configuration.
    ///
    /// Returns the config and the path it was (or would be) loaded from.
    pub fn load(explicit: Option<&Path>) -> Result<(Self, PathBuf)> {
        let path = Self::resolve_path(explicit);
        if explicit.is_none() && !path.is_file() {
            return Ok((Self::default(), path));
        }
        Ok((Self::load_from(&path)?, path))
    }

    /// Load and validate configuration from a specific file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => CliError::MissingFile(path.to_path_buf()),
            _ => CliError::Io(e),
        })?;

        let config = Self::from_toml(&contents).map_err(|message| CliError::MalformedConfig {
            path: path.to_path_buf(),
            message,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> std::result::Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| e.to_string())
    }

    /// Serialize configuration to a TOML string.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| CliError::Config(format!("Failed to serialize config: {}", e)))
    }

    /// Save configuration to `path`.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, self.to_toml()?)?;
        Ok(())
    }

    /// Check every section.
    pub fn validate(&self) -> Result<()> {
        self.generation
            .validate()
            .map_err(|e| CliError::Config(format!("[generation] {}", e)))?;
        self.evaluation
            .validate()
            .map_err(|e| CliError::Config(format!("[evaluation] {}", e)))?;
        if self.openai.model.trim().is_empty() {
            return Err(CliError::Config("[openai] model must not be empty".into()));
        }
        Ok(())
    }

    /// The API key, preferring `override_key`.
    pub fn api_key(&self, override_key: Option<&str>) -> Result<String> {
        override_key
            .or(self.openai.api_key.as_deref())
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .map(str::to_string)
            .ok_or_else(|| {
                CliError::Config(
                    "No API key. Set ENMASTER_API_KEY, pass --api-key or add api_key under [openai]".into(),
                )
            })
    }

    /// Working directories described by `[workspace]`.
    pub fn workspace(&self) -> Workspace {
        let ws = &self.workspace;
        Workspace {
            word_lists: ws.root.join(&ws.word_lists),
            articles: ws.root.join(&ws.articles),
            translations: ws.root.join(&ws.translations),
            results: ws.root.join(&ws.results),
        }
    }
}

impl std::fmt::Debug for OpenAiSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAiSettings")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl Default for OpenAiSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            model: default_model(),
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Default for WorkspaceSettings {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            word_lists: enmaster_articles::workspace::WORD_LISTS_DIR.to_string(),
            articles: enmaster_articles::workspace::ARTICLES_DIR.to_string(),
            translations: enmaster_articles::workspace::TRANSLATIONS_DIR.to_string(),
            results: enmaster_articles::workspace::RESULTS_DIR.to_string(),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: true,
            format: OutputFormat::Table,
        }
    }
}

fn default_model() -> String {
    "gpt-4o-mini".to_string()
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

fn default_true() -> bool {
    true
}

fn default_format() -> OutputFormat {
    OutputFormat::Table
}
