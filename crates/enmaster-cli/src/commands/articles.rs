//! Articles command implementation.

use crate::error::Result;
use crate::output::{FileEntry, Formatter};
use enmaster_articles::document::title_of;
use enmaster_articles::Workspace;

/// Execute the articles command.
pub fn execute_articles(workspace: &Workspace, formatter: &Formatter) -> Result<()> {
    let entries: Vec<FileEntry> = workspace
        .list_articles()?
        .iter()
        .map(|path| FileEntry::new(path, Some(title_of(path))))
        .collect();

    println!("{}", formatter.format_files("articles", "Title", &entries)?);
    Ok(())
}
