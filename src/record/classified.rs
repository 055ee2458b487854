//! Source-side publication and normalized output record.

use serde::{Deserialize, Serialize};

use super::BibliographicRecord;
use super::link::normalize_link;
use crate::classifier::{Category, Classifier, collapse_whitespace, venue_display};

/// One publication as yielded by a source, before classification.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourcePublication {
    /// Fields the classifier reads.
    pub record: BibliographicRecord,
    /// Author list as display text.
    pub authors: String,
    /// Publication year when known.
    pub year: Option<i32>,
    /// Citation count (0 when unknown).
    pub citation_count: u64,
    /// Link to the paper, unvalidated.
    pub link: String,
}

/// Normalized publication with its category.
///
/// Serialized field names match the `publications` array of the profile
/// JSON document consumed by the publications page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifiedRecord {
    pub title: String,
    pub authors: String,
    /// Journal name, else book title, else venue text, else empty.
    pub venue: String,
    pub year: Option<i32>,
    #[serde(rename = "citedBy", alias = "citationCount")]
    pub citation_count: u64,
    /// Validated `http`/`https` link or empty.
    pub link: String,
    pub category: Category,
}

impl ClassifiedRecord {
    /// Classifies `publication` and folds it into an output record.
    #[must_use]
    pub fn from_source(publication: SourcePublication, classifier: &Classifier) -> Self {
        let category = classifier.classify(&publication.record);
        Self::from_parts(publication, category)
    }

    /// Builds the output record for an already decided category.
    #[must_use]
    pub fn from_parts(publication: SourcePublication, category: Category) -> Self {
        let SourcePublication {
            record,
            authors,
            year,
            citation_count,
            link,
        } = publication;

        Self {
            title: collapse_whitespace(record.title().unwrap_or_default()),
            authors: collapse_whitespace(&authors),
            venue: venue_display(&record),
            year,
            citation_count,
            link: normalize_link(&link),
            category,
        }
    }
}
