//! Config command implementation.

use crate::cli::ConfigArgs;
use crate::config::Config;
use crate::error::Result;
use std::path::Path;

/// Execute the config command.
///
/// The API key is never printed.
pub fn execute_config(args: ConfigArgs, config: &Config, config_path: &Path) -> Result<()> {
    let mut shown = if args.default {
        Config::default()
    } else {
        config.clone()
    };
    shown.openai.api_key = None;

    if !args.default {
        println!("# {}", config_path.display());
    }
    print!("{}", shown.to_toml()?);
    Ok(())
}
