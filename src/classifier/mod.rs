//! Publication category classifier.
//!
//! Maps a [`BibliographicRecord`] to one [`Category`] through a fixed,
//! short-circuiting sequence of rule tiers:
//!
//! 1. Recognized structural entry type (`article`, `inproceedings`, ...)
//! 2. Presence of a book title (Conference) or journal name (Journal)
//! 3. Free-text cues over venue, journal, book title and publisher, in order:
//!    conference, book chapter, book, journal
//! 4. Fallback to [`Category::Other`]
//!
//! Classification is total: every record, including a completely blank one,
//! yields a category. The classifier holds only an immutable [`Lexicon`], so a
//! shared `&Classifier` can be used from any number of threads.
//!
//! # Example
//!
//! ```
//! use pubclass_core::classifier::{Category, classify};
//! use pubclass_core::record::BibliographicRecord;
//!
//! let record = BibliographicRecord::new().with_venue_text("Proc. of the ACM Workshop");
//! assert_eq!(classify(&record), Category::Conference);
//! ```

mod category;
mod lexicon;
mod text;

pub use category::{Category, Decision, Tier};
pub use lexicon::{Lexicon, LexiconError, LexiconExtension};
pub use text::{CueText, collapse_whitespace, normalize_text, tokenize};

use std::sync::LazyLock;

use crate::record::BibliographicRecord;

static BUILTIN_CLASSIFIER: LazyLock<Classifier> =
    LazyLock::new(|| Classifier::new(Lexicon::builtin().clone()));

/// Classifies `record` with the built-in lexicon.
#[must_use]
pub fn classify(record: &BibliographicRecord) -> Category {
    BUILTIN_CLASSIFIER.classify(record)
}

/// Picks the venue string shown for a record.
///
/// Preference: journal name, then book title, then venue text, then `""`.
/// Independent of the category decision.
#[must_use]
pub fn venue_display(record: &BibliographicRecord) -> String {
    record
        .journal_name()
        .or_else(|| record.book_title())
        .or_else(|| record.venue_text())
        .map(collapse_whitespace)
        .unwrap_or_default()
}

/// Maps a structural entry type to its category, if recognized.
#[must_use]
pub fn category_for_entry_type(entry_type: &str) -> Option<Category> {
    match entry_type.trim().to_ascii_lowercase().as_str() {
        "article" => Some(Category::Journal),
        "inproceedings" | "conference" | "proceedings" => Some(Category::Conference),
        "incollection" | "inbook" | "chapter" => Some(Category::BookChapter),
        "book" => Some(Category::Book),
        _ => None,
    }
}

/// Tiered rule classifier over a fixed lexicon.
#[derive(Debug, Clone, Default)]
pub struct Classifier {
    lexicon: Lexicon,
}

impl Classifier {
    #[must_use]
    pub fn new(lexicon: Lexicon) -> Self {
        Self { lexicon }
    }

    #[must_use]
    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    #[must_use]
    pub fn classify(&self, record: &BibliographicRecord) -> Category {
        self.decide(record).category
    }

    /// Classifies `record` and reports which tier decided.
    #[must_use]
    pub fn decide(&self, record: &BibliographicRecord) -> Decision {
        if let Some(category) = record.entry_type().and_then(category_for_entry_type) {
            return Decision::new(category, Tier::EntryType);
        }

        if record.book_title().is_some() {
            return Decision::new(Category::Conference, Tier::StructuredField);
        }
        if record.journal_name().is_some() {
            return Decision::new(Category::Journal, Tier::StructuredField);
        }

        let venue = CueText::from_parts(
            [
                record.venue_text(),
                record.journal_name(),
                record.book_title(),
                record.publisher(),
            ]
            .into_iter()
            .flatten(),
        );
        let title = CueText::new(record.title().unwrap_or_default());

        if self.lexicon.has_conference_cue(&venue) {
            Decision::new(Category::Conference, Tier::ConferenceCue)
        } else if self.lexicon.has_chapter_cue(&title, &venue) {
            Decision::new(Category::BookChapter, Tier::ChapterCue)
        } else if self.lexicon.has_book_cue(&venue) {
            Decision::new(Category::Book, Tier::BookCue)
        } else if self.lexicon.has_journal_cue(&venue) {
            Decision::new(Category::Journal, Tier::JournalCue)
        } else {
            Decision::new(Category::Other, Tier::Fallback)
        }
    }
}
