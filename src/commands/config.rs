//! Config command handlers: show effective configuration.

use anyhow::Result;

use crate::app_config::LoadedConfig;
use crate::cli::Cli;

pub fn run_config_show_command(cli: &Cli, loaded_config: &LoadedConfig) -> Result<()> {
    let lexicon = loaded_config.lexicon()?;

    let resolved_path = loaded_config.path.as_ref().map_or_else(
        || "<unresolved>".to_string(),
        |path| path.display().to_string(),
    );
    println!("config_path = {resolved_path}");
    println!(
        "config_file = {}",
        if loaded_config.loaded_from_file {
            "loaded"
        } else {
            "not found (using defaults)"
        }
    );
    println!(
        "verbosity = {}",
        crate::verbosity_label(cli, loaded_config.verbosity())
    );
    println!(
        "format = {}",
        loaded_config.format().unwrap_or_default().as_str()
    );
    println!(
        "conference_keywords = {}",
        lexicon.conference_keywords().len()
    );
    println!(
        "conference_acronyms = {}",
        lexicon.conference_acronyms().len()
    );
    println!(
        "chapter_title_words = {}",
        lexicon.chapter_title_words().len()
    );
    println!(
        "chapter_venue_keywords = {}",
        lexicon.chapter_venue_keywords().len()
    );
    println!("book_tokens = {}", lexicon.book_tokens().len());
    println!("journal_keywords = {}", lexicon.journal_keywords().len());

    Ok(())
}
