//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// enmaster - Practice English vocabulary with AI generated articles.
#[derive(Debug, Parser)]
#[command(name = "enmaster")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// API key for the chat completions endpoint
    #[arg(long, global = true, env = "ENMASTER_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (file paths only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Create the working directories and a default config file
    Init,

    /// List word lists, or show the words of one list
    Lists(ListsArgs),

    /// Generate articles for a word list
    Generate(GenerateArgs),

    /// List generated articles
    Articles,

    /// List translation files
    Translations,

    /// List evaluation reports
    Reports,

    /// Evaluate a translation of an article
    Evaluate(EvaluateArgs),

    /// Show project status
    Status,

    /// Back up working directories
    Backup(BackupArgs),

    /// Print the configuration
    Config(ConfigArgs),
}

/// Arguments for the lists command.
#[derive(Debug, Parser)]
pub struct ListsArgs {
    /// Word list to show (1-based index or file stem)
    pub show: Option<String>,
}

/// Arguments for the generate command.
#[derive(Debug, Parser)]
pub struct GenerateArgs {
    /// Word list (1-based index or file stem)
    pub list: String,

    /// Number of articles
    #[arg(short = 'n', long)]
    pub count: Option<usize>,

    /// Article topic
    #[arg(short, long)]
    pub topic: Option<String>,

    /// Article genre
    #[arg(short, long)]
    pub genre: Option<String>,

    /// Reading difficulty
    #[arg(short, long)]
    pub difficulty: Option<String>,

    /// Minimum total occurrences per word
    #[arg(short, long)]
    pub min_occurrences: Option<usize>,
}

/// Arguments for the evaluate command.
#[derive(Debug, Parser)]
pub struct EvaluateArgs {
    /// Article file name or part of it
    pub article: String,

    /// Translation file name or part of it (default: match the article name)
    pub translation: Option<String>,

    /// Language the translation is written in
    #[arg(short, long)]
    pub language: Option<String>,
}

/// Arguments for the backup command.
#[derive(Debug, Parser)]
pub struct BackupArgs {
    /// Directory to back up
    #[arg(value_enum, default_value = "all")]
    pub target: BackupTarget,
}

/// Directories that can be backed up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum BackupTarget {
    /// Word lists
    WordLists,
    /// Generated articles
    Articles,
    /// Translations
    Translations,
    /// Evaluation reports
    Results,
    /// Every directory
    All,
}

/// Arguments for the config command.
#[derive(Debug, Parser)]
pub struct ConfigArgs {
    /// Print built-in defaults instead of the loaded configuration
    #[arg(long)]
    pub default: bool,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}
