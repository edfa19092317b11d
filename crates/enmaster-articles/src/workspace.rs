//! Flat-file working directories
//!
//! The four directories are plain configuration passed to whoever needs
//! them. They are created on demand and never deleted.

use crate::document::read_existing;
use crate::error::{ArticleError, Result};
use crate::writer::FILE_TIMESTAMP_FORMAT;
use chrono::Local;
use enmaster_domain::WordList;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Default directory names, relative to the workspace root
pub const WORD_LISTS_DIR: &str = "word_lists";
/// Generated articles
pub const ARTICLES_DIR: &str = "articles";
/// User translations
pub const TRANSLATIONS_DIR: &str = "translations";
/// Evaluation reports
pub const RESULTS_DIR: &str = "translation_results";

/// Locations of the workflow's directories
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workspace {
    /// Word list files (`*.txt`)
    pub word_lists: PathBuf,

    /// Generated articles (`*.md`)
    pub articles: PathBuf,

    /// User translations (`*.txt`)
    pub translations: PathBuf,

    /// Evaluation reports (`*.md`)
    pub results: PathBuf,
}

/// File counts per directory plus config presence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectStatus {
    /// Number of word lists
    pub word_lists: usize,
    /// Number of generated articles
    pub articles: usize,
    /// Number of translations
    pub translations: usize,
    /// Number of evaluation reports
    pub reports: usize,
    /// Whether the config file exists
    pub config_present: bool,
}

impl ProjectStatus {
    /// Every stage of the workflow has produced at least one file
    pub fn is_complete(&self) -> bool {
        self.config_present
            && self.word_lists > 0
            && self.articles > 0
            && self.translations > 0
            && self.reports > 0
    }
}

impl Workspace {
    /// Workspace with the default directory names under `root`
    pub fn new(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        Self {
            word_lists: root.join(WORD_LISTS_DIR),
            articles: root.join(ARTICLES_DIR),
            translations: root.join(TRANSLATIONS_DIR),
            results: root.join(RESULTS_DIR),
        }
    }

    /// All directories in workflow order
    pub fn dirs(&self) -> [&Path; 4] {
        [
            &self.word_lists,
            &self.articles,
            &self.translations,
            &self.results,
        ]
    }

    /// Create any missing directories
    pub fn ensure(&self) -> Result<()> {
        for dir in self.dirs() {
            fs::create_dir_all(dir).map_err(|source| ArticleError::Write {
                path: dir.to_path_buf(),
                source,
            })?;
        }
        Ok(())
    }

    /// Word list files, sorted by name
    pub fn list_word_lists(&self) -> Result<Vec<PathBuf>> {
        list_files(&self.word_lists, "txt")
    }

    /// Article files, sorted by name
    pub fn list_articles(&self) -> Result<Vec<PathBuf>> {
        list_files(&self.articles, "md")
    }

    /// Translation files, sorted by name
    pub fn list_translations(&self) -> Result<Vec<PathBuf>> {
        list_files(&self.translations, "txt")
    }

    /// Evaluation reports, sorted by name
    pub fn list_reports(&self) -> Result<Vec<PathBuf>> {
        list_files(&self.results, "md")
    }

    /// Resolve a word list by 1-based index or by file stem
    pub fn find_word_list(&self, selector: &str) -> Result<PathBuf> {
        let lists = self.list_word_lists()?;
        let selector = selector.trim();

        let found = match selector.parse::<usize>() {
            Ok(index) if index >= 1 => lists.get(index - 1).cloned(),
            _ => lists.into_iter().find(|p| {
                p.file_stem()
                    .map(|s| s.to_string_lossy().eq_ignore_ascii_case(selector))
                    .unwrap_or(false)
            }),
        };

        found.ok_or_else(|| ArticleError::MissingFile(self.word_lists.join(selector)))
    }

    /// Count files in each directory
    pub fn status(&self, config_path: &Path) -> Result<ProjectStatus> {
        Ok(ProjectStatus {
            word_lists: self.list_word_lists()?.len(),
            articles: self.list_articles()?.len(),
            translations: self.list_translations()?.len(),
            reports: self.list_reports()?.len(),
            config_present: config_path.is_file(),
        })
    }
}

/// Read a word list file; the group name is the file stem
pub fn read_word_list(path: &Path) -> Result<WordList> {
    let contents = read_existing(path)?;
    let group = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    Ok(WordList::parse(group, &contents))
}

/// Files in `dir` with extension `ext`, sorted; a missing dir is empty
pub fn list_files(dir: &Path, ext: &str) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Ok(Vec::new());
    }

    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        let matches_ext = path
            .extension()
            .map(|e| e.to_string_lossy().eq_ignore_ascii_case(ext))
            .unwrap_or(false);
        if path.is_file() && matches_ext {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Copy every file in `dir` into a sibling `<dir>_backup` directory.
///
/// Names already present in the backup get a timestamp suffix. Returns the
/// number of files copied.
pub fn backup_dir(dir: &Path) -> Result<usize> {
    if !dir.is_dir() {
        return Ok(0);
    }

    let name = dir
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "workspace".to_string());
    let backup = dir.with_file_name(format!("{}_backup", name));

    let mut copied = 0;
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }

        let Some(file_name) = path.file_name() else {
            continue;
        };
        let mut target = backup.join(file_name);
        if target.exists() {
            let stem = path
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_default();
            let ext = path
                .extension()
                .map(|e| format!(".{}", e.to_string_lossy()))
                .unwrap_or_default();
            let stamp = Local::now().format(FILE_TIMESTAMP_FORMAT);
            target = backup.join(format!("{}_{}{}", stem, stamp, ext));
        }

        fs::create_dir_all(&backup).map_err(|source| ArticleError::Write {
            path: backup.clone(),
            source,
        })?;
        fs::copy(&path, &target).map_err(|source| ArticleError::Write {
            path: target.clone(),
            source,
        })?;
        copied += 1;
    }

    if copied > 0 {
        info!("Backed up {} file(s) to {}", copied, backup.display());
    }
    Ok(copied)
}
