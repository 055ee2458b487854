//! CLI argument definitions using clap derive macros.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use pubclass_core::{BibliographicRecord, InputFormat};

/// Normalize and categorize publication metadata.
///
/// Pubclass reads a Scholar-profile JSON export or a BibTeX database and
/// assigns every publication a category: Journal, Conference, Book Chapter,
/// Book, or Other.
#[derive(Parser, Debug)]
#[command(name = "pubclass")]
#[command(author, version, about)]
pub struct Cli {
    /// Increase output verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Config file path (default: $XDG_CONFIG_HOME/pubclass/config.toml)
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Classify every publication in an export and print JSON records
    Normalize(NormalizeArgs),
    /// Classify one record described by flags
    Classify(ClassifyArgs),
    /// Inspect configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigCommand {
    /// Print the effective configuration
    Show,
}

#[derive(Args, Debug, Clone)]
pub struct NormalizeArgs {
    /// Input file (reads stdin when omitted)
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,

    /// Input format (default: config value, else auto-detect)
    #[arg(short, long, value_enum)]
    pub format: Option<FormatArg>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pub pretty: bool,
}

#[derive(Args, Debug, Clone, Default)]
pub struct ClassifyArgs {
    /// Structural entry type (article, inproceedings, incollection, book, ...)
    #[arg(long)]
    pub entry_type: Option<String>,

    /// Journal name
    #[arg(long)]
    pub journal: Option<String>,

    /// Proceedings or collection title
    #[arg(long)]
    pub book_title: Option<String>,

    /// Free-text venue
    #[arg(long)]
    pub venue: Option<String>,

    #[arg(long)]
    pub publisher: Option<String>,

    #[arg(long)]
    pub title: Option<String>,

    /// Also print which rule tier decided the category
    #[arg(long)]
    pub explain: bool,
}

impl ClassifyArgs {
    #[must_use]
    pub fn to_record(&self) -> BibliographicRecord {
        BibliographicRecord {
            entry_type: self.entry_type.clone(),
            journal_name: self.journal.clone(),
            book_title: self.book_title.clone(),
            venue_text: self.venue.clone(),
            publisher: self.publisher.clone(),
            title: self.title.clone(),
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatArg {
    Auto,
    Scholar,
    Bibtex,
}

impl From<FormatArg> for InputFormat {
    fn from(value: FormatArg) -> Self {
        match value {
            FormatArg::Auto => Self::Auto,
            FormatArg::Scholar => Self::Scholar,
            FormatArg::Bibtex => Self::Bibtex,
        }
    }
}
