//! Command implementations.

pub mod articles;
pub mod backup;
pub mod config;
pub mod evaluate;
pub mod generate;
pub mod init;
pub mod lists;
pub mod status;
pub mod translations;

pub use self::articles::execute_articles;
pub use self::backup::execute_backup;
pub use self::config::execute_config;
pub use self::evaluate::execute_evaluate;
pub use self::generate::execute_generate;
pub use self::init::execute_init;
pub use self::lists::execute_lists;
pub use self::status::execute_status;
pub use self::translations::{execute_reports, execute_translations};

use crate::config::Config;
use crate::error::Result;
use enmaster_llm::OpenAiProvider;

/// Build the chat completions provider described by `config`.
pub(crate) fn openai_provider(config: &Config, api_key: Option<&str>) -> Result<OpenAiProvider> {
    let key = config.api_key(api_key)?;
    Ok(OpenAiProvider::with_options(
        &config.openai.base_url,
        key,
        &config.openai.model,
        config.openai.timeout_secs,
    )?)
}
