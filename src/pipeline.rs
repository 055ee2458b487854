//! Batch classification of source publications.

use std::collections::BTreeMap;

use tracing::{debug, info, instrument};

use crate::classifier::{Category, Classifier};
use crate::record::{ClassifiedRecord, ProfileDocument, ProfileMetrics};
use crate::source::SourceBatch;

/// Output of classifying one source batch.
#[derive(Debug, Clone, Default)]
pub struct BatchReport {
    /// Classified records in source order.
    pub records: Vec<ClassifiedRecord>,
    /// Skip messages carried over from the source.
    pub skipped: Vec<String>,
    /// Number of records per category.
    pub counts: BTreeMap<Category, usize>,
    /// Profile metrics carried over from the source.
    pub metrics: ProfileMetrics,
}

impl BatchReport {
    #[must_use]
    pub fn total(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn count(&self, category: Category) -> usize {
        self.counts.get(&category).copied().unwrap_or(0)
    }

    /// Consumes the report into the `{ metrics, publications }` output document.
    #[must_use]
    pub fn into_document(self) -> ProfileDocument {
        ProfileDocument {
            metrics: self.metrics,
            publications: self.records,
        }
    }
}

/// Classifies every publication in `batch`.
///
/// Never fails: source-level skips are carried through untouched and every
/// readable publication receives a category.
#[must_use]
#[instrument(skip(batch, classifier), fields(items = batch.len(), skipped = batch.skipped_count()))]
pub fn classify_batch(batch: SourceBatch, classifier: &Classifier) -> BatchReport {
    let SourceBatch {
        items,
        skipped,
        metrics,
        ..
    } = batch;
    let mut report = BatchReport {
        records: Vec::with_capacity(items.len()),
        skipped,
        counts: BTreeMap::new(),
        metrics,
    };

    for publication in items {
        let decision = classifier.decide(&publication.record);
        debug!(
            title = publication.record.title().unwrap_or("<untitled>"),
            category = %decision.category,
            tier = %decision.tier,
            "classified publication"
        );
        *report.counts.entry(decision.category).or_insert(0) += 1;
        report
            .records
            .push(ClassifiedRecord::from_parts(publication, decision.category));
    }

    info!(
        classified = report.total(),
        skipped = report.skipped.len(),
        journal = report.count(Category::Journal),
        conference = report.count(Category::Conference),
        book_chapter = report.count(Category::BookChapter),
        book = report.count(Category::Book),
        other = report.count(Category::Other),
        "classification complete"
    );

    report
}
