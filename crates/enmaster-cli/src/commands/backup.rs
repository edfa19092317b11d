//! Backup command implementation.

use crate::cli::{BackupArgs, BackupTarget};
use crate::error::Result;
use crate::output::Formatter;
use enmaster_articles::workspace::backup_dir;
use enmaster_articles::Workspace;
use std::path::Path;

/// Execute the backup command.
pub fn execute_backup(args: BackupArgs, workspace: &Workspace, formatter: &Formatter) -> Result<()> {
    for dir in targets(args.target, workspace) {
        let copied = backup_dir(dir)?;
        if copied == 0 {
            println!("{}", formatter.info(&format!("Nothing to back up in {}", dir.display())));
        } else {
            println!(
                "{}",
                formatter.success(&format!("Backed up {} file(s) from {}", copied, dir.display()))
            );
        }
    }
    Ok(())
}

/// Directories selected by `target`.
pub fn targets(target: BackupTarget, workspace: &Workspace) -> Vec<&Path> {
    match target {
        BackupTarget::WordLists => vec![workspace.word_lists.as_path()],
        BackupTarget::Articles => vec![workspace.articles.as_path()],
        BackupTarget::Translations => vec![workspace.translations.as_path()],
        BackupTarget::Results => vec![workspace.results.as_path()],
        BackupTarget::All => workspace.dirs().to_vec(),
    }
}
