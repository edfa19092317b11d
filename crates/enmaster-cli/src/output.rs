//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use enmaster_articles::ProjectStatus;
use enmaster_domain::{CoverageResult, WordList};
use std::path::Path;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// A listed file.
#[derive(Debug, Clone)]
pub struct FileEntry {
    /// File name
    pub name: String,

    /// Extra column (article title, word count, ...)
    pub detail: Option<String>,
}

impl FileEntry {
    /// Entry for `path` with an optional detail column.
    pub fn new(path: &Path, detail: Option<String>) -> Self {
        Self {
            name: path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default(),
            detail,
        }
    }
}

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Selected output format.
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Format a numbered file listing.
    pub fn format_files(&self, kind: &str, detail_header: &str, files: &[FileEntry]) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let json: Vec<serde_json::Value> = files
                    .iter()
                    .enumerate()
                    .map(|(i, f)| {
                        serde_json::json!({
                            "index": i + 1,
                            "name": f.name,
                            "detail": f.detail,
                        })
                    })
                    .collect();
                Ok(serde_json::to_string_pretty(&json)?)
            }
            OutputFormat::Quiet => Ok(files
                .iter()
                .map(|f| f.name.as_str())
                .collect::<Vec<_>>()
                .join("\n")),
            OutputFormat::Table => {
                if files.is_empty() {
                    return Ok(self.colorize(&format!("No {} found.", kind), "yellow"));
                }

                let mut builder = Builder::default();
                builder.push_record(["#", "File", detail_header]);
                for (i, file) in files.iter().enumerate() {
                    builder.push_record([
                        (i + 1).to_string(),
                        file.name.clone(),
                        file.detail.clone().unwrap_or_default(),
                    ]);
                }
                Ok(self.render(builder))
            }
        }
    }

    /// Format the words of a list.
    pub fn format_word_list(&self, list: &WordList) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&serde_json::json!({
                "group": list.group(),
                "words": list.words(),
            }))?),
            OutputFormat::Quiet => Ok(list.words().join("\n")),
            OutputFormat::Table => {
                let preview: Vec<&str> = list.words().iter().take(10).map(String::as_str).collect();
                let more = if list.len() > preview.len() {
                    format!(" ... (+{})", list.len() - preview.len())
                } else {
                    String::new()
                };
                Ok(format!(
                    "Word list '{}': {} word(s)\n  {}{}",
                    list.group(),
                    list.len(),
                    preview.join(", "),
                    more
                ))
            }
        }
    }

    /// Format a coverage verdict.
    pub fn format_coverage(&self, coverage: &CoverageResult) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let counts: Vec<serde_json::Value> = coverage
                    .counts
                    .iter()
                    .map(|c| serde_json::json!({ "word": c.word, "count": c.count }))
                    .collect();
                Ok(serde_json::to_string_pretty(&serde_json::json!({
                    "min_occurrences": coverage.min_occurrences,
                    "satisfied": coverage.is_satisfied(),
                    "counts": counts,
                    "under_threshold": coverage.under_threshold(),
                }))?)
            }
            OutputFormat::Quiet => Ok(coverage.under_threshold().join("\n")),
            OutputFormat::Table => {
                let mut builder = Builder::default();
                builder.push_record(["Word", "Count", "OK"]);
                for entry in &coverage.counts {
                    let ok = if entry.count >= coverage.min_occurrences { "✓" } else { "✗" };
                    builder.push_record([entry.word.clone(), entry.count.to_string(), ok.to_string()]);
                }

                let verdict = if coverage.is_satisfied() {
                    self.success(&format!(
                        "Every word appears at least {} time(s)",
                        coverage.min_occurrences
                    ))
                } else {
                    self.warning(&format!(
                        "Below {} occurrence(s): {}",
                        coverage.min_occurrences,
                        coverage.under_threshold().join(", ")
                    ))
                };
                Ok(format!("{}\n{}", self.render(builder), verdict))
            }
        }
    }

    /// Format project status.
    pub fn format_status(&self, status: &ProjectStatus, config_path: &Path) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&serde_json::json!({
                "word_lists": status.word_lists,
                "articles": status.articles,
                "translations": status.translations,
                "reports": status.reports,
                "config": config_path.display().to_string(),
                "config_present": status.config_present,
                "complete": status.is_complete(),
            }))?),
            OutputFormat::Quiet => Ok(status.is_complete().to_string()),
            OutputFormat::Table => {
                let mut builder = Builder::default();
                builder.push_record(["Item", "Status"]);
                builder.push_record(["Word lists".to_string(), status.word_lists.to_string()]);
                builder.push_record(["Articles".to_string(), status.articles.to_string()]);
                builder.push_record(["Translations".to_string(), status.translations.to_string()]);
                builder.push_record(["Reports".to_string(), status.reports.to_string()]);
                builder.push_record([
                    "Config".to_string(),
                    format!(
                        "{} ({})",
                        if status.config_present { "present" } else { "missing" },
                        config_path.display()
                    ),
                ]);

                let verdict = if status.is_complete() {
                    self.success("Every workflow stage has output")
                } else {
                    self.info("Some workflow stages have no output yet")
                };
                Ok(format!("{}\n{}", self.render(builder), verdict))
            }
        }
    }

    /// Format a text preview under a heading.
    pub fn preview(&self, heading: &str, text: &str) -> String {
        format!("{}\n{}", self.colorize(&format!("=== {} ===", heading), "cyan"), text)
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    fn render(&self, builder: Builder) -> String {
        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));
        table.to_string()
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            _ => text.to_string(),
        }
    }
}
