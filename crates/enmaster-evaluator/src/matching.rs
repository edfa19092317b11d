//! Loose file name matching for articles and translations

use crate::error::{EvaluatorError, Result};
use enmaster_articles::Workspace;
use std::path::{Path, PathBuf};
use tracing::debug;

/// First candidate whose lowercase file name contains `query` or is
/// contained in it
pub fn fuzzy_match<'a>(candidates: &'a [PathBuf], query: &str) -> Option<&'a PathBuf> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return None;
    }

    candidates.iter().find(|path| {
        let name = file_name_lower(path);
        name.contains(&query) || query.contains(&name)
    })
}

/// Resolve an article and its translation from loose names.
///
/// Without a translation query the translation is the first file whose name
/// contains the article's stem.
pub fn find_matching_files(
    workspace: &Workspace,
    article_query: &str,
    translation_query: Option<&str>,
) -> Result<(PathBuf, PathBuf)> {
    let articles = workspace.list_articles().map_err(EvaluatorError::from_article)?;
    let article = fuzzy_match(&articles, article_query)
        .cloned()
        .ok_or_else(|| EvaluatorError::MissingFile(workspace.articles.join(article_query)))?;
    debug!("Matched article {}", article.display());

    let translations = workspace
        .list_translations()
        .map_err(EvaluatorError::from_article)?;

    let translation = match translation_query {
        Some(query) => fuzzy_match(&translations, query)
            .cloned()
            .ok_or_else(|| EvaluatorError::MissingFile(workspace.translations.join(query)))?,
        None => {
            let stem = article
                .file_stem()
                .map(|s| s.to_string_lossy().to_lowercase())
                .unwrap_or_default();
            translations
                .iter()
                .find(|p| file_name_lower(p).contains(&stem))
                .cloned()
                .ok_or_else(|| {
                    EvaluatorError::MissingFile(workspace.translations.join(format!("{}.txt", stem)))
                })?
        }
    };
    debug!("Matched translation {}", translation.display());

    Ok((article, translation))
}

fn file_name_lower(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_lowercase())
        .unwrap_or_default()
}
