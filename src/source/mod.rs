//! Upstream publication sources.
//!
//! A source turns an exported document into [`SourcePublication`] values.
//! Whole-document failures are returned as [`SourceError`]; a single bad
//! publication is recorded in [`SourceBatch::skipped`] and the rest of the
//! batch is still read.
//!
//! # Supported formats
//!
//! - Scholar-profile JSON ([`ScholarJsonSource`])
//! - BibTeX ([`BibtexSource`])

mod bibtex;
mod error;
mod scholar;

pub use bibtex::{BibtexEntry, BibtexParseResult, BibtexSource, parse_bibtex_entries};
pub use error::SourceError;
pub use scholar::ScholarJsonSource;

use std::fmt;

use serde::Deserialize;
use tracing::debug;

use crate::record::{ProfileMetrics, SourcePublication};

/// Publications read from one source document.
#[derive(Debug, Clone, Default)]
pub struct SourceBatch {
    /// Successfully read publications, in document order.
    pub items: Vec<SourcePublication>,
    /// Actionable messages for publications that could not be read.
    pub skipped: Vec<String>,
    /// Total candidate publications discovered, including skipped ones.
    pub total_found: usize,
    /// Profile metrics carried by the document, empty when it has none.
    pub metrics: ProfileMetrics,
}

impl SourceBatch {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn skipped_count(&self) -> usize {
        self.skipped.len()
    }
}

/// Producer of publications from an exported document.
pub trait PublicationSource {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Reads every publication in `input`.
    ///
    /// # Errors
    /// Returns [`SourceError`] when the document as a whole is unreadable.
    fn read(&self, input: &str) -> Result<SourceBatch, SourceError>;
}

/// Input document format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputFormat {
    /// Sniff the format from the first non-whitespace character.
    #[default]
    Auto,
    /// Scholar-profile JSON export.
    Scholar,
    /// BibTeX database.
    Bibtex,
}

impl InputFormat {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Scholar => "scholar",
            Self::Bibtex => "bibtex",
        }
    }

    /// Resolves `Auto` against the input; concrete formats are returned as-is.
    ///
    /// # Errors
    /// Returns [`SourceError::EmptyInput`] or [`SourceError::UnrecognizedFormat`]
    /// when `Auto` cannot decide.
    pub fn resolve(self, input: &str) -> Result<Self, SourceError> {
        if self != Self::Auto {
            return Ok(self);
        }
        match input.trim_start().chars().next() {
            None => Err(SourceError::EmptyInput),
            Some('@') => Ok(Self::Bibtex),
            Some('[' | '{') => Ok(Self::Scholar),
            Some(_) => Err(SourceError::unrecognized_format(input)),
        }
    }

    /// Source implementation for a concrete format. `Auto` has none.
    #[must_use]
    pub fn source(self) -> Option<Box<dyn PublicationSource>> {
        match self {
            Self::Auto => None,
            Self::Scholar => Some(Box::new(ScholarJsonSource)),
            Self::Bibtex => Some(Box::new(BibtexSource)),
        }
    }
}

impl fmt::Display for InputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for InputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "scholar" | "json" => Ok(Self::Scholar),
            "bibtex" | "bib" => Ok(Self::Bibtex),
            _ => Err(format!("invalid input format: {s}")),
        }
    }
}

/// Reads publications from `input` in the given format.
///
/// # Errors
/// Returns [`SourceError`] when the format cannot be detected or the document
/// as a whole is unreadable.
#[tracing::instrument(skip(input), fields(input_len = input.len()))]
pub fn read_publications(input: &str, format: InputFormat) -> Result<SourceBatch, SourceError> {
    let resolved = format.resolve(input)?;
    let Some(source) = resolved.source() else {
        return Err(SourceError::unrecognized_format(input));
    };
    debug!(source = source.name(), "reading publications");
    source.read(input)
}
