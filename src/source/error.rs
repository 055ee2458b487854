//! Error types for whole-source read failures.
//!
//! Failures confined to one publication never surface here; they become skip
//! messages on the [`SourceBatch`](super::SourceBatch).

use thiserror::Error;

/// Errors that abort reading an entire source document.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The document is not valid JSON.
    #[error("invalid publication JSON: {source}\n  Suggestion: check that the file is a complete JSON export")]
    InvalidJson {
        #[from]
        source: serde_json::Error,
    },

    /// Valid JSON, but not a shape that holds publications.
    #[error("unsupported publication document: {reason}\n  Suggestion: {suggestion}")]
    UnsupportedDocument {
        /// What was found instead
        reason: String,
        /// How to fix the issue
        suggestion: String,
    },

    /// Auto-detection found neither BibTeX nor JSON.
    #[error(
        "could not detect input format from '{preview}'\n  Suggestion: pass --format scholar or --format bibtex"
    )]
    UnrecognizedFormat {
        /// Leading characters of the input
        preview: String,
    },

    /// Auto-detection was asked to inspect blank input.
    #[error("input is empty\n  Suggestion: pass a file path or pipe publication data via stdin")]
    EmptyInput,
}

impl SourceError {
    #[must_use]
    pub fn unsupported_document(reason: impl Into<String>) -> Self {
        Self::UnsupportedDocument {
            reason: reason.into(),
            suggestion: "Provide a JSON array of publications or an object with a `publications` array"
                .to_string(),
        }
    }

    #[must_use]
    pub fn unrecognized_format(input: &str) -> Self {
        Self::UnrecognizedFormat {
            preview: input.trim_start().chars().take(40).collect(),
        }
    }
}
