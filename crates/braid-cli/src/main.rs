//! Braid CLI - Command-line interface for the Braid timeline engine.

use braid_cli::commands;
use braid_cli::{Cli, Command, Config, Formatter};
use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    // Load config: explicit path, default path, or built-in defaults
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    // Determine output format
    let format = cli.format.map(Into::into).unwrap_or(config.settings.format);

    // Determine color setting
    let color_enabled = !cli.no_color && config.settings.color;

    // Create formatter
    let formatter = Formatter::new(format, color_enabled);

    // Handle commands
    match cli.command {
        Command::Render(args) => commands::execute_render(args, &config.settings, &formatter)?,
        Command::Events(args) => commands::execute_events(args, &formatter)?,
        Command::Branches(args) => commands::execute_branches(args, &formatter)?,
        Command::Sources(args) => commands::execute_sources(args, &formatter)?,
        Command::Status(args) => commands::execute_status(args, &formatter)?,
        Command::Demo(args) => commands::execute_demo(args, &formatter)?,
    }

    Ok(())
}

fn init_tracing(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
