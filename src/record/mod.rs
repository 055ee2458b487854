//! Publication record types flowing into and out of the classifier.
//!
//! - [`BibliographicRecord`] - the loosely structured fields the classifier reads
//! - [`SourcePublication`] - a record plus the display fields a source supplies
//! - [`ClassifiedRecord`] - the normalized output with its category
//! - [`ProfileDocument`] - classified records plus profile [`ProfileMetrics`]

mod classified;
mod link;
mod profile;

pub use classified::{ClassifiedRecord, SourcePublication};
pub use link::normalize_link;
pub use profile::{ProfileDocument, ProfileMetrics};

use serde::{Deserialize, Serialize};

/// Bibliographic metadata for one publication.
///
/// Every field is optional, and a blank string is treated the same as a
/// missing field by all accessors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BibliographicRecord {
    /// Structural tag such as `article` or `inproceedings`.
    pub entry_type: Option<String>,
    /// Journal name.
    pub journal_name: Option<String>,
    /// Collection or proceedings volume title.
    pub book_title: Option<String>,
    /// Generic venue string.
    pub venue_text: Option<String>,
    pub publisher: Option<String>,
    pub title: Option<String>,
}

impl BibliographicRecord {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_entry_type(mut self, value: impl Into<String>) -> Self {
        self.entry_type = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_journal_name(mut self, value: impl Into<String>) -> Self {
        self.journal_name = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_book_title(mut self, value: impl Into<String>) -> Self {
        self.book_title = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_venue_text(mut self, value: impl Into<String>) -> Self {
        self.venue_text = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_publisher(mut self, value: impl Into<String>) -> Self {
        self.publisher = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_title(mut self, value: impl Into<String>) -> Self {
        self.title = Some(value.into());
        self
    }

    #[must_use]
    pub fn entry_type(&self) -> Option<&str> {
        present(self.entry_type.as_deref())
    }

    #[must_use]
    pub fn journal_name(&self) -> Option<&str> {
        present(self.journal_name.as_deref())
    }

    #[must_use]
    pub fn book_title(&self) -> Option<&str> {
        present(self.book_title.as_deref())
    }

    #[must_use]
    pub fn venue_text(&self) -> Option<&str> {
        present(self.venue_text.as_deref())
    }

    #[must_use]
    pub fn publisher(&self) -> Option<&str> {
        present(self.publisher.as_deref())
    }

    #[must_use]
    pub fn title(&self) -> Option<&str> {
        present(self.title.as_deref())
    }

    /// True when no field carries any text.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.entry_type().is_none()
            && self.journal_name().is_none()
            && self.book_title().is_none()
            && self.venue_text().is_none()
            && self.publisher().is_none()
            && self.title().is_none()
    }
}

fn present(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
