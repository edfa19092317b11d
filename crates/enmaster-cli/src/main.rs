//! enmaster CLI - generate vocabulary articles and evaluate translations.

use clap::Parser;
use enmaster_cli::commands;
use enmaster_cli::{Cli, CliError, Command, Config, Formatter};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Log to stderr; `RUST_LOG` wins over `-v`.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
}

async fn run(cli: Cli) -> enmaster_cli::Result<()> {
    // init may be asked to create the file it is pointed at
    let (config, config_path) = match (&cli.command, Config::load(cli.config.as_deref())) {
        (Command::Init, Err(CliError::MissingFile(path))) => (Config::default(), path),
        (_, loaded) => loaded?,
    };
    debug!("Using config {} ({:?})", config_path.display(), config.openai);

    // Determine output format
    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);

    // Determine color setting
    let color_enabled = !cli.no_color && config.settings.color;

    let formatter = Formatter::new(format, color_enabled);
    let workspace = config.workspace();
    let api_key = cli.api_key.as_deref();

    match cli.command {
        Command::Init => commands::execute_init(&workspace, &config_path, &formatter)?,
        Command::Lists(args) => commands::execute_lists(args, &workspace, &formatter)?,
        Command::Generate(args) => {
            commands::execute_generate(args, &config, api_key, &workspace, &formatter).await?
        }
        Command::Articles => commands::execute_articles(&workspace, &formatter)?,
        Command::Translations => commands::execute_translations(&workspace, &formatter)?,
        Command::Reports => commands::execute_reports(&workspace, &formatter)?,
        Command::Evaluate(args) => {
            commands::execute_evaluate(args, &config, api_key, &workspace, &formatter).await?
        }
        Command::Status => commands::execute_status(&workspace, &config_path, &formatter)?,
        Command::Backup(args) => commands::execute_backup(args, &workspace, &formatter)?,
        Command::Config(args) => commands::execute_config(args, &config, &config_path)?,
    }

    Ok(())
}
