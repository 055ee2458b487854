//! Publication Classifier Core Library
//!
//! This library normalizes publication metadata exported from an academic
//! profile and assigns each publication a category (Journal, Conference,
//! Book Chapter, Book, Other) from inconsistent bibliographic fields.
//!
//! # Architecture
//!
//! The library is organized into the following modules:
//! - [`classifier`] - Tiered rule classifier and its cue lexicon
//! - [`record`] - Input and output publication records
//! - [`source`] - Readers for Scholar-profile JSON and BibTeX exports
//! - [`pipeline`] - Batch classification with per-category summary

// Clippy lints - strict for library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod classifier;
pub mod pipeline;
pub mod record;
pub mod source;

// Re-export commonly used types
pub use classifier::{
    Category, Classifier, Decision, Lexicon, LexiconError, LexiconExtension, Tier, classify,
    venue_display,
};
pub use pipeline::{BatchReport, classify_batch};
pub use record::{
    BibliographicRecord, ClassifiedRecord, ProfileDocument, ProfileMetrics, SourcePublication,
};
pub use source::{InputFormat, PublicationSource, SourceBatch, SourceError, read_publications};
