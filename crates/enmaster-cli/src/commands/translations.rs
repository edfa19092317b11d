//! Translation and report listing.

use crate::error::Result;
use crate::output::{FileEntry, Formatter};
use enmaster_articles::Workspace;
use std::fs;

/// Execute the translations command.
pub fn execute_translations(workspace: &Workspace, formatter: &Formatter) -> Result<()> {
    let entries: Vec<FileEntry> = workspace
        .list_translations()?
        .iter()
        .map(|path| {
            let lines = fs::read_to_string(path)
                .map(|c| c.lines().filter(|l| !l.trim().is_empty()).count())
                .ok();
            FileEntry::new(path, lines.map(|n| format!("{} line(s)", n)))
        })
        .collect();

    println!("{}", formatter.format_files("translations", "Lines", &entries)?);
    Ok(())
}

/// Execute the reports command.
pub fn execute_reports(workspace: &Workspace, formatter: &Formatter) -> Result<()> {
    let entries: Vec<FileEntry> = workspace
        .list_reports()?
        .iter()
        .map(|path| {
            let size = fs::metadata(path).map(|m| m.len()).ok();
            FileEntry::new(path, size.map(|n| format!("{} bytes", n)))
        })
        .collect();

    println!("{}", formatter.format_files("reports", "Size", &entries)?);
    Ok(())
}
