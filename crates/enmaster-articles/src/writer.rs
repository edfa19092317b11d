//! Persist parsed articles as markdown files

use crate::document::ArticleDocument;
use crate::error::{ArticleError, Result};
use chrono::{Local, NaiveDateTime};
use enmaster_domain::{ArticleRecord, ParsedArticle};
use std::fs::{self, File, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tracing::info;

/// Maximum slug length in characters
pub const MAX_SLUG_LEN: usize = 50;

/// Timestamp format used in generated file names
pub const FILE_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Writes one markdown file per article into an output directory
#[derive(Debug, Clone)]
pub struct ArticleWriter {
    output_dir: PathBuf,
}

impl ArticleWriter {
    /// Create a writer targeting `output_dir` (created on first write)
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// Directory articles are written to
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Persist `parsed` for word list `group`, stamped with the current time
    pub fn write(&self, parsed: &ParsedArticle, group: &str) -> Result<ArticleRecord> {
        self.write_at(parsed, group, Local::now().naive_local())
    }

    /// Persist `parsed` using an explicit timestamp
    pub fn write_at(
        &self,
        parsed: &ParsedArticle,
        group: &str,
        at: NaiveDateTime,
    ) -> Result<ArticleRecord> {
        let title = parsed.title.as_str();
        let stem = format!(
            "{}-{}-{}",
            group,
            slugify(title),
            at.format(FILE_TIMESTAMP_FORMAT)
        );

        let document = ArticleDocument {
            title: title.to_string(),
            abstract_text: parsed.abstract_text.as_str().to_string(),
            body: parsed.body.clone(),
            group: Some(group.to_string()),
        };

        let (path, mut file) = create_unique_file(&self.output_dir, &stem, "md")?;
        file.write_all(document.render().as_bytes())
            .map_err(|source| ArticleError::Write {
                path: path.clone(),
                source,
            })?;

        let filename = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        info!("Saved article: {}", filename);

        Ok(ArticleRecord {
            title: document.title,
            abstract_text: document.abstract_text,
            filename,
            path,
        })
    }
}

/// Filesystem-safe slug of a title.
///
/// Keeps alphanumerics, turns every run of whitespace or hyphens into one
/// hyphen and truncates to [`MAX_SLUG_LEN`] characters. Never empty.
pub fn slugify(title: &str) -> String {
    let mut slug = String::new();
    let mut pending_hyphen = false;

    for c in title.chars() {
        if c.is_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(c);
        } else if c.is_whitespace() || c == '-' {
            pending_hyphen = true;
        }
    }

    let slug: String = slug.chars().take(MAX_SLUG_LEN).collect();
    let slug = slug.trim_end_matches('-');
    if slug.is_empty() {
        "article".to_string()
    } else {
        slug.to_string()
    }
}

/// Create `<dir>/<stem>.<ext>`, or `<stem>-2.<ext>`, `<stem>-3.<ext>`, ...
/// when the name is taken. Creates `dir` if needed.
pub fn create_unique_file(dir: &Path, stem: &str, ext: &str) -> Result<(PathBuf, File)> {
    fs::create_dir_all(dir).map_err(|source| ArticleError::Write {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut n = 1u32;
    loop {
        let filename = if n == 1 {
            format!("{}.{}", stem, ext)
        } else {
            format!("{}-{}.{}", stem, n, ext)
        };
        let path = dir.join(filename);

        match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(file) => return Ok((path, file)),
            Err(e) if e.kind() == ErrorKind::AlreadyExists => n += 1,
            Err(source) => return Err(ArticleError::Write { path, source }),
        }
    }
}
