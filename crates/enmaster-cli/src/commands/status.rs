//! Status command implementation.

use crate::error::Result;
use crate::output::Formatter;
use enmaster_articles::Workspace;
use std::path::Path;

/// Execute the status command.
pub fn execute_status(workspace: &Workspace, config_path: &Path, formatter: &Formatter) -> Result<()> {
    let status = workspace.status(config_path)?;
    println!("{}", formatter.format_status(&status, config_path)?);
    Ok(())
}
