//! Scholar-profile JSON reader.
//!
//! Accepts the publication list of a profile export, either as a bare array
//! or under a top-level `publications` key. Each publication may be nested
//! (`bib` object plus link and citation fields beside it) or flat, as in a
//! previously written output document.
//!
//! A profile object may also carry a `metrics` object with the author's
//! citation totals. It is kept on the batch; unreadable metrics are logged
//! and dropped without affecting the publications.

use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, instrument, warn};

use super::error::SourceError;
use super::{PublicationSource, SourceBatch};
use crate::record::{BibliographicRecord, ProfileMetrics, SourcePublication};

/// Reads Scholar-profile JSON exports.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScholarJsonSource;

impl PublicationSource for ScholarJsonSource {
    fn name(&self) -> &'static str {
        "scholar"
    }

    fn read(&self, input: &str) -> Result<SourceBatch, SourceError> {
        parse_scholar_json(input)
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawBib {
    title: Option<String>,
    #[serde(alias = "authors")]
    author: Option<RawAuthors>,
    venue: Option<String>,
    citation: Option<String>,
    #[serde(alias = "year")]
    pub_year: Option<Value>,
    #[serde(alias = "journal_name", alias = "journalName")]
    journal: Option<String>,
    #[serde(alias = "book_title", alias = "bookTitle")]
    booktitle: Option<String>,
    publisher: Option<String>,
    #[serde(
        rename = "ENTRYTYPE",
        alias = "pub_type",
        alias = "entry_type",
        alias = "entryType"
    )]
    entry_type: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawAuthors {
    Text(String),
    List(Vec<String>),
}

impl RawAuthors {
    fn into_display(self) -> String {
        match self {
            Self::Text(text) => text,
            Self::List(names) => names
                .iter()
                .map(|name| name.trim())
                .filter(|name| !name.is_empty())
                .collect::<Vec<_>>()
                .join(", "),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawLinks {
    eprint_url: Option<String>,
    #[serde(alias = "link")]
    pub_url: Option<String>,
    #[serde(alias = "citedBy", alias = "citationCount")]
    num_citations: Option<Value>,
}

/// Parses a Scholar-profile JSON document.
///
/// # Errors
/// Returns [`SourceError`] if the input is not JSON or holds no publication list.
#[instrument(skip(input), fields(input_len = input.len()))]
pub fn parse_scholar_json(input: &str) -> Result<SourceBatch, SourceError> {
    let document: Value = serde_json::from_str(input)?;
    let (entries, metrics) = publication_list(document)?;

    let mut batch = SourceBatch::new();
    batch.total_found = entries.len();
    batch.metrics = match parse_metrics(metrics) {
        Ok(metrics) => metrics,
        Err(reason) => {
            warn!(%reason, "ignoring profile metrics");
            ProfileMetrics::default()
        }
    };

    for (index, entry) in entries.into_iter().enumerate() {
        match parse_publication(entry) {
            Ok(publication) => batch.items.push(publication),
            Err(reason) => {
                debug!(index, %reason, "skipping publication");
                batch.skipped.push(format!(
                    "What: skipped publication #{}. Why: {reason}. Fix: correct or remove this entry in the export.",
                    index + 1
                ));
            }
        }
    }

    Ok(batch)
}

fn publication_list(document: Value) -> Result<(Vec<Value>, Value), SourceError> {
    match document {
        Value::Array(entries) => Ok((entries, Value::Null)),
        Value::Object(mut fields) => match fields.remove("publications") {
            Some(Value::Array(entries)) => {
                let metrics = fields.remove("metrics").unwrap_or(Value::Null);
                Ok((entries, metrics))
            }
            Some(other) => Err(SourceError::unsupported_document(format!(
                "`publications` is {} instead of an array",
                kind(&other)
            ))),
            None => Err(SourceError::unsupported_document(
                "object has no `publications` key",
            )),
        },
        other => Err(SourceError::unsupported_document(format!(
            "top-level value is {}",
            kind(&other)
        ))),
    }
}

fn parse_metrics(value: Value) -> Result<ProfileMetrics, String> {
    match value {
        Value::Null => Ok(ProfileMetrics::default()),
        Value::Object(fields) => serde_json::from_value(Value::Object(fields))
            .map_err(|err| format!("unreadable metrics ({err})")),
        other => Err(format!("`metrics` is {} instead of an object", kind(&other))),
    }
}

fn parse_publication(entry: Value) -> Result<SourcePublication, String> {
    let mut fields = match entry {
        Value::Object(fields) => fields,
        other => return Err(format!("expected an object, found {}", kind(&other))),
    };

    let bib_fields = match fields.remove("bib") {
        Some(Value::Object(bib)) => bib,
        Some(other) => return Err(format!("`bib` is {} instead of an object", kind(&other))),
        None => fields.clone(),
    };

    let bib: RawBib = serde_json::from_value(Value::Object(bib_fields))
        .map_err(|err| format!("unreadable bibliographic fields ({err})"))?;
    let links: RawLinks = serde_json::from_value(Value::Object(fields))
        .map_err(|err| format!("unreadable link or citation fields ({err})"))?;

    let year = parse_year(bib.pub_year.as_ref())?;
    let citation_count = parse_citations(links.num_citations.as_ref())?;

    let link = [links.eprint_url, links.pub_url]
        .into_iter()
        .flatten()
        .find(|url| !url.trim().is_empty())
        .unwrap_or_default();

    let venue_text = [bib.venue, bib.citation]
        .into_iter()
        .flatten()
        .find(|venue| !venue.trim().is_empty());

    Ok(SourcePublication {
        record: BibliographicRecord {
            entry_type: bib.entry_type,
            journal_name: bib.journal,
            book_title: bib.booktitle,
            venue_text,
            publisher: bib.publisher,
            title: bib.title,
        },
        authors: bib.author.map(RawAuthors::into_display).unwrap_or_default(),
        year,
        citation_count,
        link,
    })
}

fn parse_year(value: Option<&Value>) -> Result<Option<i32>, String> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(number)) => number
            .as_i64()
            .and_then(|year| i32::try_from(year).ok())
            .map(Some)
            .ok_or_else(|| format!("year `{number}` is not an integer")),
        Some(Value::String(text)) if text.trim().is_empty() => Ok(None),
        Some(Value::String(text)) => text
            .trim()
            .parse::<i32>()
            .map(Some)
            .map_err(|_| format!("year `{text}` is not an integer")),
        Some(other) => Err(format!("year is {} instead of a number", kind(other))),
    }
}

fn parse_citations(value: Option<&Value>) -> Result<u64, String> {
    match value {
        None | Some(Value::Null) => Ok(0),
        Some(Value::Number(number)) => number
            .as_u64()
            .ok_or_else(|| format!("citation count `{number}` is not a non-negative integer")),
        Some(Value::String(text)) if text.trim().is_empty() => Ok(0),
        Some(Value::String(text)) => text
            .trim()
            .parse::<u64>()
            .map_err(|_| format!("citation count `{text}` is not a non-negative integer")),
        Some(other) => Err(format!(
            "citation count is {} instead of a number",
            kind(other)
        )),
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
