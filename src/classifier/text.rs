//! Text normalization and cue matching.
//!
//! Keyword cues match as substrings of the normalized text (lowercase,
//! whitespace runs collapsed). Acronym and book cues match whole tokens.

/// Collapses every whitespace run to a single space and trims the ends.
#[must_use]
pub fn collapse_whitespace(input: &str) -> String {
    input.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Lowercases and collapses whitespace.
#[must_use]
pub fn normalize_text(input: &str) -> String {
    collapse_whitespace(&input.to_lowercase())
}

/// Splits text into lowercase alphanumeric tokens.
///
/// Every non-alphanumeric character is a separator, so `"Proc. ACM/IEEE"`
/// yields `["proc", "acm", "ieee"]`.
#[must_use]
pub fn tokenize(input: &str) -> Vec<String> {
    input
        .split(|c: char| !c.is_alphanumeric())
        .filter(|token| !token.is_empty())
        .map(str::to_lowercase)
        .collect()
}

/// Normalizes a keyword entry. `None` when it has no alphanumeric content.
#[must_use]
pub fn normalize_keyword(raw: &str) -> Option<String> {
    if raw.chars().any(char::is_alphanumeric) {
        Some(normalize_text(raw))
    } else {
        None
    }
}

/// Normalized text plus its tokens, searched by the cue tables.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CueText {
    text: String,
    tokens: Vec<String>,
}

impl CueText {
    #[must_use]
    pub fn new(input: &str) -> Self {
        Self {
            text: normalize_text(input),
            tokens: tokenize(input),
        }
    }

    /// Builds cue text from the space-joined concatenation of `parts`.
    #[must_use]
    pub fn from_parts<'a>(parts: impl IntoIterator<Item = &'a str>) -> Self {
        let joined = parts.into_iter().collect::<Vec<_>>().join(" ");
        Self::new(&joined)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    #[must_use]
    pub fn contains_token(&self, token: &str) -> bool {
        self.tokens.iter().any(|t| t == token)
    }

    /// Substring match of an already normalized keyword. Empty keywords never match.
    #[must_use]
    pub fn contains_keyword(&self, keyword: &str) -> bool {
        !keyword.is_empty() && self.text.contains(keyword)
    }

    #[must_use]
    pub fn contains_any_keyword(&self, keywords: &[String]) -> bool {
        keywords.iter().any(|keyword| self.contains_keyword(keyword))
    }

    /// True when every token occurs somewhere, in any order. False for an empty list.
    #[must_use]
    pub fn contains_all_tokens(&self, tokens: &[String]) -> bool {
        !tokens.is_empty() && tokens.iter().all(|token| self.contains_token(token))
    }
}
