//! URL normalization and hostname extraction.
//!
//! Turns raw user input into a scheme-qualified URL string and, when it
//! has an authority, a lowercase hostname. Nothing here fails: a URL
//! without a usable host simply has no domain.

mod host;
mod normalize;

pub use host::{count_subdomains, extract_domain};
pub use normalize::{has_scheme, normalize_url, DEFAULT_SCHEME};

/// A normalized URL together with its extracted hostname.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedUrl {
    pub url: String,
    pub domain: Option<String>,
}

impl NormalizedUrl {
    /// Normalizes `raw` and extracts its hostname.
    ///
    /// # Examples
    ///
    /// - `"example.com"` → url `"http://example.com"`, domain `Some("example.com")`
    /// - `"  "` → url `""`, domain `None`
    pub fn parse(raw: &str) -> Self {
        let url = normalize_url(raw);
        let domain = if url.is_empty() {
            None
        } else {
            extract_domain(&url)
        };
        Self { url, domain }
    }
}
