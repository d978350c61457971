//! Default-scheme normalization.

use std::sync::LazyLock;

use regex::Regex;

/// Scheme prepended to input that has none.
pub const DEFAULT_SCHEME: &str = "http://";

static SCHEME_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z][a-zA-Z0-9+\-.]*://").expect("valid scheme regex"));

/// Returns true if `s` starts with `<letter>[letters/digits/+/-/.]*://`.
pub fn has_scheme(s: &str) -> bool {
    SCHEME_PREFIX.is_match(s)
}

/// Trims `raw` and prepends [`DEFAULT_SCHEME`] when no scheme is present.
///
/// Empty or whitespace-only input yields an empty string.
pub fn normalize_url(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return String::new();
    }
    if has_scheme(trimmed) {
        trimmed.to_string()
    } else {
        format!("{DEFAULT_SCHEME}{trimmed}")
    }
}
