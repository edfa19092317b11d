//! Evaluation report rendering and persistence

use crate::error::{EvaluatorError, Result};
use crate::types::EvaluationReport;
use chrono::{Local, NaiveDateTime};
use enmaster_articles::create_unique_file;
use enmaster_articles::writer::FILE_TIMESTAMP_FORMAT;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;

/// Report file name prefix
pub const REPORT_PREFIX: &str = "AI_translation_evaluation_";

const HEADER_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const USAGE_FOOTER: &str = "## How to Use This Report
This report was generated automatically and assesses the quality of your translation. Keep improving with these points in mind:

1. **Word choice**: match each English word to its meaning in context
2. **Grammar**: make sure the translation is grammatical in the target language
3. **Fluency**: the translation should read naturally
4. **Cultural fit**: mind the differences in how the two languages express ideas

Keep practicing and your translations will keep getting better!

---
*Generated by enmaster*
";

/// Header fields of a report
#[derive(Debug, Clone)]
pub struct ReportMeta<'a> {
    /// Title of the evaluated article
    pub article_title: &'a str,

    /// File name of the translation
    pub translation_filename: &'a str,

    /// Model that produced the evaluation
    pub model: &'a str,
}

/// Render a complete report around the verbatim model evaluation
pub fn render_report(evaluation: &str, meta: &ReportMeta<'_>, at: NaiveDateTime) -> String {
    format!(
        "# AI Translation Evaluation Report\n\n\
         ## Details\n\
         - **Article title**: {}\n\
         - **Translation file**: {}\n\
         - **Evaluated at**: {}\n\
         - **Model**: {}\n\n\
         ## Evaluation\n\n\
         {}\n\n\
         {}",
        meta.article_title,
        meta.translation_filename,
        at.format(HEADER_TIMESTAMP_FORMAT),
        meta.model,
        evaluation.trim(),
        USAGE_FOOTER
    )
}

/// Writes reports into the results directory
#[derive(Debug, Clone)]
pub struct ReportWriter {
    output_dir: PathBuf,
}

impl ReportWriter {
    /// Create a writer targeting `output_dir` (created on first write)
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// Directory reports are written to
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Write a report stamped with the current time
    pub fn write(&self, evaluation: &str, meta: &ReportMeta<'_>) -> Result<EvaluationReport> {
        self.write_at(evaluation, meta, Local::now().naive_local())
    }

    /// Write a report using an explicit timestamp
    pub fn write_at(
        &self,
        evaluation: &str,
        meta: &ReportMeta<'_>,
        at: NaiveDateTime,
    ) -> Result<EvaluationReport> {
        if evaluation.trim().is_empty() {
            return Err(EvaluatorError::EmptyInput("model returned no evaluation".to_string()));
        }

        let content = render_report(evaluation, meta, at);
        let stem = format!("{}{}", REPORT_PREFIX, at.format(FILE_TIMESTAMP_FORMAT));

        let (path, mut file) =
            create_unique_file(&self.output_dir, &stem, "md").map_err(EvaluatorError::from_article)?;
        file.write_all(content.as_bytes())
            .map_err(|source| EvaluatorError::Write {
                path: path.clone(),
                source,
            })?;

        info!("Saved evaluation report: {}", path.display());
        Ok(EvaluationReport { path, content })
    }
}
