//! Cue tables consulted by the free-text tier of the classifier.
//!
//! Keyword lists match as substrings of the normalized venue or title text.
//! Conference acronyms and the book tokens match whole tokens only, so the
//! acronym `ic` never fires inside "clinic".
//!
//! The built-in tables are parsed once per process. A configured lexicon is
//! the built-in one plus a [`LexiconExtension`]; it never removes entries.

use std::collections::HashSet;
use std::sync::LazyLock;

use serde::Deserialize;
use thiserror::Error;

use super::text::{CueText, normalize_keyword, tokenize};

/// Matched as substrings, so `"proceeding"` also covers `"proceedings"`.
const CONFERENCE_KEYWORDS: &[&str] = &[
    "proceeding",
    "conf",
    "workshop",
    "symposium",
    "symposia",
    "meeting",
    "companion",
    "demo",
    "poster",
    "colloquium",
    "congress",
];

const CONFERENCE_ACRONYMS: &[&str] = &[
    "neurips",
    "nips",
    "icml",
    "iclr",
    "cvpr",
    "iccv",
    "eccv",
    "kdd",
    "sigmod",
    "vldb",
    "icde",
    "acl",
    "emnlp",
    "naacl",
    "coling",
    "aaai",
    "ijcai",
    "sigir",
    "wsdm",
    "cikm",
    "recsys",
    "chi",
    "uist",
    "cscw",
    "icse",
    "pldi",
    "popl",
    "oopsla",
    "sosp",
    "osdi",
    "nsdi",
    "sigcomm",
    "infocom",
    "mobicom",
    "icra",
    "iros",
    "miccai",
    "isbi",
    "icassp",
    "interspeech",
];

const CHAPTER_TITLE_WORDS: &[&str] = &["chapter"];

const CHAPTER_VENUE_KEYWORDS: &[&str] = &["handbook", "springer series"];

/// Every entry must be present for the book cue to fire.
const BOOK_TOKENS: &[&str] = &["press", "university"];

const JOURNAL_KEYWORDS: &[&str] = &[
    "journal",
    "transactions",
    "trans.",
    "letters",
    "bulletin",
    "annals",
    "frontiers in",
    "ieee access",
    "review",
    "magazine",
];

static BUILTIN: LazyLock<Lexicon> = LazyLock::new(Lexicon::from_defaults);

/// Errors raised while applying a configured lexicon extension.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexiconError {
    /// An entry had no alphanumeric content.
    #[error("empty entry '{entry}' in lexicon list `{list}`\n  Suggestion: remove blank or punctuation-only strings from the list")]
    EmptyEntry {
        /// Which list the entry came from
        list: &'static str,
        /// The raw entry
        entry: String,
    },

    /// An acronym contained more than one token.
    #[error("conference acronym '{entry}' spans several words\n  Suggestion: list multi-word cues under `conference_keywords` instead")]
    MultiWordAcronym {
        /// The raw entry
        entry: String,
    },
}

/// Additional cue entries loaded from configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LexiconExtension {
    pub conference_keywords: Vec<String>,
    pub conference_acronyms: Vec<String>,
    pub chapter_title_words: Vec<String>,
    pub chapter_venue_keywords: Vec<String>,
    pub journal_keywords: Vec<String>,
}

impl LexiconExtension {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.conference_keywords.is_empty()
            && self.conference_acronyms.is_empty()
            && self.chapter_title_words.is_empty()
            && self.chapter_venue_keywords.is_empty()
            && self.journal_keywords.is_empty()
    }
}


/// Immutable cue tables for the free-text tier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lexicon {
    conference_keywords: Vec<String>,
    conference_acronyms: HashSet<String>,
    chapter_title_words: Vec<String>,
    chapter_venue_keywords: Vec<String>,
    book_tokens: Vec<String>,
    journal_keywords: Vec<String>,
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::builtin().clone()
    }
}

impl Lexicon {
    /// Returns the process-wide built-in lexicon.
    #[must_use]
    pub fn builtin() -> &'static Self {
        &BUILTIN
    }

    fn from_defaults() -> Self {
        Self {
            conference_keywords: keywords(CONFERENCE_KEYWORDS),
            conference_acronyms: CONFERENCE_ACRONYMS
                .iter()
                .map(|acronym| (*acronym).to_string())
                .collect(),
            chapter_title_words: keywords(CHAPTER_TITLE_WORDS),
            chapter_venue_keywords: keywords(CHAPTER_VENUE_KEYWORDS),
            book_tokens: BOOK_TOKENS.iter().map(|token| (*token).to_string()).collect(),
            journal_keywords: keywords(JOURNAL_KEYWORDS),
        }
    }

    /// Builds the built-in lexicon extended with `extension`.
    ///
    /// # Errors
    /// Returns [`LexiconError`] if any extension entry is blank, or an acronym
    /// has more than one token.
    pub fn with_extension(extension: &LexiconExtension) -> Result<Self, LexiconError> {
        let mut lexicon = Self::builtin().clone();
        lexicon.extend(extension)?;
        Ok(lexicon)
    }

    /// Adds extension entries, skipping ones already present.
    ///
    /// Validation runs before anything is added, so on error `self` is unchanged.
    ///
    /// # Errors
    /// See [`Lexicon::with_extension`].
    pub fn extend(&mut self, extension: &LexiconExtension) -> Result<(), LexiconError> {
        let conference_keywords =
            parse_keywords("conference_keywords", &extension.conference_keywords)?;
        let chapter_title_words =
            parse_keywords("chapter_title_words", &extension.chapter_title_words)?;
        let chapter_venue_keywords =
            parse_keywords("chapter_venue_keywords", &extension.chapter_venue_keywords)?;
        let journal_keywords = parse_keywords("journal_keywords", &extension.journal_keywords)?;
        let acronyms = parse_acronyms(&extension.conference_acronyms)?;

        merge(&mut self.conference_keywords, conference_keywords);
        merge(&mut self.chapter_title_words, chapter_title_words);
        merge(&mut self.chapter_venue_keywords, chapter_venue_keywords);
        merge(&mut self.journal_keywords, journal_keywords);
        self.conference_acronyms.extend(acronyms);
        Ok(())
    }

    /// Tier 3a: conference keyword substring or whole-token acronym.
    #[must_use]
    pub fn has_conference_cue(&self, venue: &CueText) -> bool {
        venue.contains_any_keyword(&self.conference_keywords)
            || venue
                .tokens()
                .iter()
                .any(|token| self.conference_acronyms.contains(token))
    }

    /// Tier 3b: chapter word in the title, or a chapter venue keyword.
    #[must_use]
    pub fn has_chapter_cue(&self, title: &CueText, venue: &CueText) -> bool {
        title.contains_any_keyword(&self.chapter_title_words)
            || venue.contains_any_keyword(&self.chapter_venue_keywords)
    }

    /// Tier 3c: all book tokens present.
    #[must_use]
    pub fn has_book_cue(&self, venue: &CueText) -> bool {
        venue.contains_all_tokens(&self.book_tokens)
    }

    /// Tier 3d: journal keyword substring.
    #[must_use]
    pub fn has_journal_cue(&self, venue: &CueText) -> bool {
        venue.contains_any_keyword(&self.journal_keywords)
    }

    #[must_use]
    pub fn conference_keywords(&self) -> &[String] {
        &self.conference_keywords
    }

    #[must_use]
    pub fn conference_acronyms(&self) -> &HashSet<String> {
        &self.conference_acronyms
    }

    #[must_use]
    pub fn chapter_title_words(&self) -> &[String] {
        &self.chapter_title_words
    }

    #[must_use]
    pub fn chapter_venue_keywords(&self) -> &[String] {
        &self.chapter_venue_keywords
    }

    #[must_use]
    pub fn book_tokens(&self) -> &[String] {
        &self.book_tokens
    }

    #[must_use]
    pub fn journal_keywords(&self) -> &[String] {
        &self.journal_keywords
    }
}

fn keywords(entries: &[&str]) -> Vec<String> {
    entries
        .iter()
        .filter_map(|entry| normalize_keyword(entry))
        .collect()
}

fn parse_keywords(list: &'static str, entries: &[String]) -> Result<Vec<String>, LexiconError> {
    entries
        .iter()
        .map(|entry| {
            normalize_keyword(entry).ok_or_else(|| LexiconError::EmptyEntry {
                list,
                entry: entry.clone(),
            })
        })
        .collect()
}

fn parse_acronyms(entries: &[String]) -> Result<Vec<String>, LexiconError> {
    entries
        .iter()
        .map(|entry| {
            let mut tokens = tokenize(entry);
            match tokens.len() {
                0 => Err(LexiconError::EmptyEntry {
                    list: "conference_acronyms",
                    entry: entry.clone(),
                }),
                1 => Ok(tokens.remove(0)),
                _ => Err(LexiconError::MultiWordAcronym {
                    entry: entry.clone(),
                }),
            }
        })
        .collect()
}

fn merge(target: &mut Vec<String>, additions: Vec<String>) {
    for keyword in additions {
        if !target.contains(&keyword) {
            target.push(keyword);
        }
    }
}
