//! Init command implementation.

use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use enmaster_articles::Workspace;
use std::path::Path;

/// Execute the init command.
///
/// Creates the working directories and writes a default config file when
/// none exists. Existing files are left alone.
pub fn execute_init(workspace: &Workspace, config_path: &Path, formatter: &Formatter) -> Result<()> {
    workspace.ensure()?;
    for dir in workspace.dirs() {
        println!("{}", formatter.success(&format!("Directory ready: {}", dir.display())));
    }

    if config_path.is_file() {
        println!("{}", formatter.info(&format!("Config already exists: {}", config_path.display())));
    } else {
        Config::default().save_to(config_path)?;
        println!("{}", formatter.success(&format!("Wrote default config: {}", config_path.display())));
    }

    Ok(())
}
