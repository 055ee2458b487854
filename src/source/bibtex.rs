//! BibTeX reader.
//!
//! Every entry type is read, since the type is the strongest classification
//! signal. `@comment`, `@preamble` and `@string` blocks are ignored.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, instrument};

use super::error::SourceError;
use super::{PublicationSource, SourceBatch};
use crate::record::{BibliographicRecord, SourcePublication};

#[allow(clippy::expect_used)]
static YEAR_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(?:1[5-9]|20)\d{2}\b").expect("bibtex year regex is valid"));
#[allow(clippy::expect_used)]
static AUTHOR_SPLIT_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\s+and\s+").expect("bibtex author split regex is valid"));

const IGNORED_BLOCK_TYPES: [&str; 3] = ["comment", "preamble", "string"];

const DOI_RESOLVER: &str = "https://doi.org/";

/// One parsed BibTeX entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BibtexEntry {
    /// Lowercased entry type (`article`, `inproceedings`, `misc`, ...).
    pub entry_type: String,
    /// Citation key after `@type{`.
    pub key: String,
    pub title: Option<String>,
    /// Authors rendered comma-separated.
    pub author: Option<String>,
    /// First plausible 4-digit year.
    pub year: Option<i32>,
    /// `journal`, else `journaltitle`.
    pub journal: Option<String>,
    pub booktitle: Option<String>,
    /// `venue`, else `howpublished`, else `series`.
    pub venue: Option<String>,
    pub publisher: Option<String>,
    pub url: Option<String>,
    /// Bare DOI (`10.xxxx/...`).
    pub doi: Option<String>,
}

impl BibtexEntry {
    /// Link to the work: explicit `url`, else the DOI resolver URL.
    #[must_use]
    pub fn link(&self) -> String {
        self.url
            .clone()
            .or_else(|| self.doi.as_ref().map(|doi| format!("{DOI_RESOLVER}{doi}")))
            .unwrap_or_default()
    }

    #[must_use]
    pub fn into_publication(self) -> SourcePublication {
        let link = self.link();
        SourcePublication {
            record: BibliographicRecord {
                entry_type: Some(self.entry_type),
                journal_name: self.journal,
                book_title: self.booktitle,
                venue_text: self.venue,
                publisher: self.publisher,
                title: self.title,
            },
            authors: self.author.unwrap_or_default(),
            year: self.year,
            citation_count: 0,
            link,
        }
    }
}

/// Batch parse result for BibTeX input.
#[derive(Debug, Clone, Default)]
pub struct BibtexParseResult {
    pub entries: Vec<BibtexEntry>,
    /// Actionable parse/skip messages.
    pub skipped: Vec<String>,
    /// Total candidate `@...{...}` segments discovered, ignored blocks included.
    pub total_found: usize,
}

/// Reads BibTeX databases.
#[derive(Debug, Clone, Copy, Default)]
pub struct BibtexSource;

impl PublicationSource for BibtexSource {
    fn name(&self) -> &'static str {
        "bibtex"
    }

    fn read(&self, input: &str) -> Result<SourceBatch, SourceError> {
        let parsed = parse_bibtex_entries(input);
        Ok(SourceBatch {
            total_found: parsed.entries.len() + parsed.skipped.len(),
            items: parsed
                .entries
                .into_iter()
                .map(BibtexEntry::into_publication)
                .collect(),
            skipped: parsed.skipped,
            ..SourceBatch::default()
        })
    }
}

/// Parses BibTeX entries from input text.
#[instrument(skip(input), fields(input_len = input.len()))]
#[must_use]
pub fn parse_bibtex_entries(input: &str) -> BibtexParseResult {
    let mut result = BibtexParseResult::default();
    let segments = segment_entries(input);
    result.total_found = segments.len();

    for raw_entry in &segments {
        match parse_entry(raw_entry) {
            EntryOutcome::Parsed(entry) => {
                debug!(key = %entry.key, entry_type = %entry.entry_type, "parsed BibTeX entry");
                result.entries.push(*entry);
            }
            EntryOutcome::Ignore => {}
            EntryOutcome::Skip(message) => result.skipped.push(message),
        }
    }

    result
}

#[derive(Debug)]
enum EntryOutcome {
    Parsed(Box<BibtexEntry>),
    Ignore,
    Skip(String),
}

/// Splits input into `@type{...}` segments, tracking brace depth and quotes.
fn segment_entries(input: &str) -> Vec<String> {
    let chars: Vec<(usize, char)> = input.char_indices().collect();
    let mut entries = Vec::new();
    let mut i = 0usize;

    while i < chars.len() {
        if chars[i].1 != '@' {
            i += 1;
            continue;
        }

        let mut j = i + 1;
        while j < chars.len() && chars[j].1.is_ascii_alphabetic() {
            j += 1;
        }
        while j < chars.len() && chars[j].1.is_whitespace() {
            j += 1;
        }
        if j >= chars.len() || chars[j].1 != '{' {
            i += 1;
            continue;
        }

        let start = chars[i].0;
        match closing_brace(&chars, j) {
            Some(end_index) => {
                let end_exclusive = chars
                    .get(end_index + 1)
                    .map_or(input.len(), |(offset, _)| *offset);
                entries.push(input[start..end_exclusive].trim().to_string());
                i = end_index + 1;
            }
            None => {
                // Unbalanced entry: keep it up to the next `@` at a line start
                // so the following entry is still parsed.
                let recovery = (i + 1..chars.len())
                    .find(|&k| chars[k].1 == '@' && matches!(chars[k - 1].1, '\n' | '\r'));
                let Some(recovery) = recovery else {
                    entries.push(input[start..].trim().to_string());
                    break;
                };
                entries.push(input[start..chars[recovery].0].trim().to_string());
                i = recovery;
            }
        }
    }

    entries
}

fn closing_brace(chars: &[(usize, char)], open_index: usize) -> Option<usize> {
    let mut depth = 0usize;
    let mut in_quotes = false;
    let mut escape = false;

    for (k, (_, ch)) in chars.iter().enumerate().skip(open_index) {
        if escape {
            escape = false;
            continue;
        }
        match *ch {
            '\\' => escape = true,
            // Depth 1 is the entry body; quotes inside braced values are literal.
            '"' if depth == 1 => in_quotes = !in_quotes,
            _ if in_quotes => {}
            '{' => depth += 1,
            '}' => {
                depth = depth.checked_sub(1)?;
                if depth == 0 {
                    return Some(k);
                }
            }
            _ => {}
        }
    }
    None
}

fn parse_entry(raw_entry: &str) -> EntryOutcome {
    let trimmed = raw_entry.trim();
    let Some(after_at) = trimmed.strip_prefix('@') else {
        return EntryOutcome::Skip(
            "What: malformed BibTeX entry. Why: missing '@type{...}' prefix. Fix: start entries with @article{key, ...}."
                .to_string(),
        );
    };
    let Some(brace_pos) = after_at.find('{') else {
        return EntryOutcome::Skip(format!(
            "What: malformed BibTeX entry `{}`. Why: missing opening '{{' after entry type. Fix: use `@type{{key, field = value}}`.",
            preview(trimmed)
        ));
    };

    let entry_type = after_at[..brace_pos].trim().to_ascii_lowercase();
    if IGNORED_BLOCK_TYPES.contains(&entry_type.as_str()) {
        return EntryOutcome::Ignore;
    }
    if entry_type.is_empty() {
        return EntryOutcome::Skip(format!(
            "What: malformed BibTeX entry `{}`. Why: empty entry type. Fix: name the type, e.g. `@article{{...}}`.",
            preview(trimmed)
        ));
    }

    let Some(body) = after_at[brace_pos + 1..].strip_suffix('}') else {
        return EntryOutcome::Skip(format!(
            "What: malformed BibTeX entry `{}`. Why: unbalanced braces (entry never closed). Fix: ensure each '{{' has a matching '}}'.",
            preview(trimmed)
        ));
    };
    let Some((key_raw, fields_raw)) = body.split_once(',') else {
        return EntryOutcome::Skip(format!(
            "What: malformed BibTeX entry `{}`. Why: missing citation key or field list. Fix: use `@{entry_type}{{key, field = value}}`.",
            preview(trimmed)
        ));
    };

    let key = key_raw.trim();
    if key.is_empty() {
        return EntryOutcome::Skip(format!(
            "What: malformed BibTeX entry `{}`. Why: empty citation key. Fix: provide a non-empty key before the first comma.",
            preview(trimmed)
        ));
    }

    let fields = match parse_fields(fields_raw) {
        Ok(fields) => fields,
        Err(reason) => {
            return EntryOutcome::Skip(format!(
                "What: malformed BibTeX field assignment in `{}`. Why: {reason}. Fix: use `field = {{value}}` or `field = \"value\"` with commas between fields.",
                preview(trimmed)
            ));
        }
    };

    let text = |name: &str| {
        fields
            .get(name)
            .map(|value| clean_latex(value))
            .filter(|value| !value.is_empty())
    };
    let first_text = |names: &[&str]| names.iter().find_map(|name| text(*name));

    EntryOutcome::Parsed(Box::new(BibtexEntry {
        key: key.to_string(),
        title: text("title"),
        author: fields
            .get("author")
            .map(|value| normalize_authors(&clean_latex(value)))
            .filter(|value| !value.is_empty()),
        year: fields.get("year").and_then(|value| normalize_year(value)),
        journal: first_text(&["journal", "journaltitle"]),
        booktitle: text("booktitle"),
        venue: first_text(&["venue", "howpublished", "series"]),
        publisher: text("publisher"),
        url: text("url"),
        doi: fields.get("doi").and_then(|value| normalize_doi(value)),
        entry_type,
    }))
}

fn parse_fields(input: &str) -> Result<HashMap<String, String>, String> {
    let mut pairs = Vec::new();
    let mut current = String::new();
    let mut depth = 0usize;
    let mut in_quotes = false;
    let mut escape = false;

    for ch in input.chars() {
        if escape {
            current.push(ch);
            escape = false;
            continue;
        }
        match ch {
            '\\' => escape = true,
            '"' if depth == 0 => in_quotes = !in_quotes,
            _ if in_quotes => {}
            '{' => depth += 1,
            '}' => {
                depth = depth
                    .checked_sub(1)
                    .ok_or_else(|| "closing brace without matching opening brace".to_string())?;
            }
            ',' if depth == 0 => {
                let segment = current.trim();
                if !segment.is_empty() {
                    pairs.push(segment.to_string());
                }
                current.clear();
                continue;
            }
            _ => {}
        }
        current.push(ch);
    }

    if in_quotes {
        return Err("unterminated quoted value".to_string());
    }
    if depth != 0 {
        return Err("unbalanced braces in field values".to_string());
    }

    let tail = current.trim();
    if !tail.is_empty() {
        pairs.push(tail.to_string());
    }

    let mut fields = HashMap::new();
    for pair in pairs {
        let Some((name, value_raw)) = pair.split_once('=') else {
            return Err(format!("missing '=' in field segment `{}`", preview(&pair)));
        };
        let field_name = name.trim().to_ascii_lowercase();
        if field_name.is_empty() {
            return Err("empty field name".to_string());
        }
        let value = strip_bibtex_value(value_raw)
            .ok_or_else(|| format!("invalid value in field `{field_name}`"))?;
        // First value wins, as in BibTeX itself.
        fields.entry(field_name).or_insert(value);
    }

    Ok(fields)
}

fn strip_bibtex_value(value: &str) -> Option<String> {
    let trimmed = value.trim().trim_end_matches(',').trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Some(inner) = trimmed
        .strip_prefix('{')
        .and_then(|rest| rest.strip_suffix('}'))
    {
        return Some(inner.trim().to_string());
    }
    if let Some(inner) = trimmed
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
    {
        return Some(inner.replace("\\\"", "\"").trim().to_string());
    }

    Some(trimmed.to_string())
}

/// Removes grouping braces and common escapes, collapsing whitespace.
fn clean_latex(value: &str) -> String {
    let unescaped = value
        .replace("\\&", "&")
        .replace("\\%", "%")
        .replace("\\_", "_")
        .replace("\\$", "$");
    unescaped
        .chars()
        .filter(|ch| !matches!(ch, '{' | '}'))
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

fn normalize_authors(value: &str) -> String {
    AUTHOR_SPLIT_PATTERN
        .split(value)
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}

fn normalize_year(value: &str) -> Option<i32> {
    YEAR_PATTERN
        .find(value)
        .and_then(|m| m.as_str().parse::<i32>().ok())
}

fn normalize_doi(value: &str) -> Option<String> {
    let trimmed = value.trim();
    let lowered = trimmed.to_ascii_lowercase();
    let bare = [
        "https://doi.org/",
        "http://doi.org/",
        "https://dx.doi.org/",
        "http://dx.doi.org/",
        "doi:",
    ]
    .iter()
    .find_map(|prefix| lowered.starts_with(prefix).then(|| &trimmed[prefix.len()..]))
    .unwrap_or(trimmed)
    .trim();
    (bare.starts_with("10.") && bare.contains('/')).then(|| bare.to_string())
}

fn preview(input: &str) -> String {
    const MAX: usize = 80;
    if input.chars().count() <= MAX {
        return input.to_string();
    }
    let shortened: String = input.chars().take(MAX).collect();
    format!("{shortened}...")
}
