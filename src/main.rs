//! CLI entry point for the publication classifier.

use anyhow::Result;
use clap::Parser;
use tracing::{debug, info};

use pubclass_core::Classifier;

mod app_config;
mod cli;
mod commands;

use app_config::{VerbositySetting, load_config};
use cli::{Cli, Command, ConfigCommand};

fn main() -> Result<()> {
    // Parse CLI arguments first (before tracing, so --help works without logs)
    let cli = Cli::parse();
    let loaded_config = load_config(cli.config.as_deref())?;

    // Priority: RUST_LOG env var > quiet flag > verbose flag > config verbosity > info
    let default_level = default_log_level(&cli, loaded_config.verbosity());
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    debug!(?cli, "CLI arguments parsed");
    if let Some(path) = loaded_config.path.as_ref().filter(|_| loaded_config.loaded_from_file) {
        info!(path = %path.display(), "Loaded config file");
    }

    match &cli.command {
        Command::Normalize(args) => {
            let classifier = Classifier::new(loaded_config.lexicon()?);
            commands::run_normalize_command(args, loaded_config.format(), &classifier)
        }
        Command::Classify(args) => {
            let classifier = Classifier::new(loaded_config.lexicon()?);
            commands::run_classify_command(args, &classifier)
        }
        Command::Config {
            command: ConfigCommand::Show,
        } => commands::run_config_show_command(&cli, &loaded_config),
    }
}

fn default_log_level(cli: &Cli, configured: Option<VerbositySetting>) -> &'static str {
    if cli.quiet {
        return "error";
    }
    match cli.verbose {
        0 => configured.map_or("info", VerbositySetting::log_level),
        1 => "debug",
        _ => "trace",
    }
}

/// Effective verbosity label shown by `config show`.
pub(crate) fn verbosity_label(cli: &Cli, configured: Option<VerbositySetting>) -> &'static str {
    if cli.quiet {
        return VerbositySetting::Quiet.as_str();
    }
    match cli.verbose {
        0 => configured.unwrap_or(VerbositySetting::Default).as_str(),
        1 => VerbositySetting::Verbose.as_str(),
        _ => VerbositySetting::Debug.as_str(),
    }
}
