//! casepull - Export support cases to CSV.

use casepull_cli::commands;
use casepull_cli::{Cli, Command, Config, Formatter};
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> casepull_cli::Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();
    init_tracing(cli.log_filter());

    // init must work before a config file exists
    if let Command::Init(args) = &cli.command {
        let formatter = Formatter::new(!cli.no_color);
        commands::execute_init(args, cli.config.as_deref(), &formatter)?;
        return Ok(());
    }

    let config = Config::load(cli.config.as_deref())?;

    // Determine color setting
    let color_enabled = !cli.no_color && config.settings.color;
    let formatter = Formatter::new(color_enabled);

    let token = cli.token.as_deref();
    match cli.command {
        Command::Fetch(args) => commands::execute_fetch(args, token, &config, &formatter).await?,
        Command::Run(args) => commands::execute_run(args, token, &config, &formatter).await?,
        Command::Inspect(args) => {
            commands::execute_inspect(args, token, &config, &formatter).await?
        }
        Command::Columns => commands::execute_columns(&config, &formatter),
        Command::Init(_) => {}
    }

    Ok(())
}

/// Log to stderr. `RUST_LOG` wins over the `-v` level.
fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
