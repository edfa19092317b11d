//! Lists command implementation.

use crate::cli::ListsArgs;
use crate::error::Result;
use crate::output::{FileEntry, Formatter};
use enmaster_articles::workspace::read_word_list;
use enmaster_articles::Workspace;

/// Execute the lists command.
pub fn execute_lists(args: ListsArgs, workspace: &Workspace, formatter: &Formatter) -> Result<()> {
    if let Some(selector) = args.show {
        let path = workspace.find_word_list(&selector)?;
        let list = read_word_list(&path)?;
        println!("{}", formatter.format_word_list(&list)?);
        return Ok(());
    }

    let entries = word_list_entries(workspace)?;
    println!("{}", formatter.format_files("word lists", "Words", &entries)?);
    Ok(())
}

/// Word list files with their word counts.
pub fn word_list_entries(workspace: &Workspace) -> Result<Vec<FileEntry>> {
    workspace
        .list_word_lists()?
        .iter()
        .map(|path| {
            let detail = read_word_list(path)
                .map(|list| format!("{} word(s)", list.len()))
                .unwrap_or_else(|e| format!("unreadable: {}", e));
            Ok(FileEntry::new(path, Some(detail)))
        })
        .collect()
}
