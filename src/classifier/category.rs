//! Publication categories and the rule tiers that produce them.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Fixed set of publication categories a record can be assigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Journal article.
    Journal,
    /// Conference, workshop, or symposium paper.
    Conference,
    /// Chapter in an edited collection or handbook.
    #[serde(rename = "Book Chapter", alias = "book_chapter")]
    BookChapter,
    /// Monograph or edited book.
    Book,
    /// Nothing matched.
    Other,
}

impl Category {
    /// Every category, in declaration order.
    pub const ALL: [Self; 5] = [
        Self::Journal,
        Self::Conference,
        Self::BookChapter,
        Self::Book,
        Self::Other,
    ];

    /// Returns the display label (also the serialized form).
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Journal => "Journal",
            Self::Conference => "Conference",
            Self::BookChapter => "Book Chapter",
            Self::Book => "Book",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace(['_', '-'], " ");
        match normalized.as_str() {
            "journal" => Ok(Self::Journal),
            "conference" => Ok(Self::Conference),
            "book chapter" => Ok(Self::BookChapter),
            "book" => Ok(Self::Book),
            "other" => Ok(Self::Other),
            _ => Err(format!("invalid category: {s}")),
        }
    }
}

/// Rule tier (or Tier 3 sub-tier) that decided a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    /// Tier 1: recognized structural entry type.
    EntryType,
    /// Tier 2: a non-empty book title or journal name field.
    StructuredField,
    /// Tier 3a: conference keyword or acronym in the venue text.
    ConferenceCue,
    /// Tier 3b: chapter cue in the title or venue text.
    ChapterCue,
    /// Tier 3c: university press publisher.
    BookCue,
    /// Tier 3d: journal keyword in the venue text.
    JournalCue,
    /// Tier 4: no rule matched.
    Fallback,
}

impl Tier {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::EntryType => "entry_type",
            Self::StructuredField => "structured_field",
            Self::ConferenceCue => "conference_cue",
            Self::ChapterCue => "chapter_cue",
            Self::BookCue => "book_cue",
            Self::JournalCue => "journal_cue",
            Self::Fallback => "fallback",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A category together with the tier that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Decision {
    pub category: Category,
    pub tier: Tier,
}

impl Decision {
    #[must_use]
    pub fn new(category: Category, tier: Tier) -> Self {
        Self { category, tier }
    }
}
