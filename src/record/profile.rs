//! Profile-level metrics and the output document.

use serde::{Deserialize, Serialize};

use super::ClassifiedRecord;

/// Author-level citation metrics from a profile export.
///
/// Absent values are omitted on output, so an empty set serializes as `{}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfileMetrics {
    /// Total citations across all publications.
    #[serde(alias = "citedby", skip_serializing_if = "Option::is_none")]
    pub citations: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hindex: Option<u64>,
    #[serde(alias = "i10index", skip_serializing_if = "Option::is_none")]
    pub i10: Option<u64>,
    /// Date the metrics were collected, as written by the exporter.
    #[serde(alias = "last_updated", skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<String>,
}

impl ProfileMetrics {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

/// The `{ "metrics": ..., "publications": [...] }` document read by the site.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileDocument {
    pub metrics: ProfileMetrics,
    pub publications: Vec<ClassifiedRecord>,
}
