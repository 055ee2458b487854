//! Publication link validation.

use tracing::debug;
use url::Url;

/// Returns the trimmed link if it is an absolute `http`/`https` URL, otherwise `""`.
///
/// A valid link is passed through as written, without re-serialization.
#[must_use]
pub fn normalize_link(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return String::new();
    }

    match Url::parse(trimmed) {
        Ok(url) if matches!(url.scheme(), "http" | "https") && url.host().is_some() => {
            trimmed.to_string()
        }
        Ok(url) => {
            debug!(link = %trimmed, scheme = url.scheme(), "dropping non-web link");
            String::new()
        }
        Err(err) => {
            debug!(link = %trimmed, error = %err, "dropping malformed link");
            String::new()
        }
    }
}
