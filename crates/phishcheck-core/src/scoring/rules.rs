//! The rule table: one entry per heuristic check, evaluated in order.

use std::sync::LazyLock;

use regex::Regex;

use crate::url_model::count_subdomains;

/// Substrings commonly found in credential-harvesting URLs.
pub const SUSPICIOUS_KEYWORDS: [&str; 12] = [
    "login",
    "signin",
    "secure",
    "account",
    "update",
    "verify",
    "bank",
    "confirm",
    "webscr",
    "ebayisapi",
    "wp-login",
    "admin",
];

/// Domain endings associated with throwaway registrations.
pub const SUSPICIOUS_TLDS: [&str; 5] = [".xyz", ".ru", ".tk", ".cf", ".ga"];

pub const MAX_URL_LENGTH: usize = 120;
pub const MIN_HEX_ESCAPES: usize = 4;
pub const MIN_DOMAIN_HYPHENS: usize = 3;
pub const MIN_DIGITS: usize = 6;
pub const MIN_SUBDOMAINS: usize = 3;

static IP_ADDRESS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\d{1,3}(?:\.\d{1,3}){3}\b").expect("valid ip regex"));
static HEX_ESCAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"%[0-9a-fA-F]{2}").expect("valid hex regex"));
static DIGIT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d").expect("valid digit regex"));

/// What a rule looks at: the lowercased normalized URL and its hostname.
#[derive(Debug, Clone, Copy)]
pub struct Subject<'a> {
    pub url: &'a str,
    pub domain: Option<&'a str>,
    /// Length of `url` in characters.
    pub length: usize,
}

/// A single weighted check.
#[derive(Clone, Copy)]
pub struct Rule {
    pub name: &'static str,
    pub weight: u32,
    pub reason: &'static str,
    check: fn(&Subject<'_>) -> bool,
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule")
            .field("name", &self.name)
            .field("weight", &self.weight)
            .finish()
    }
}

impl Rule {
    pub fn matches(&self, subject: &Subject<'_>) -> bool {
        (self.check)(subject)
    }
}

fn has_at_symbol(s: &Subject<'_>) -> bool {
    s.url.contains('@')
}

fn has_ip_address(s: &Subject<'_>) -> bool {
    IP_ADDRESS.is_match(s.url)
}

fn has_keyword(s: &Subject<'_>) -> bool {
    SUSPICIOUS_KEYWORDS.iter().any(|kw| s.url.contains(kw))
}

fn has_hex_escapes(s: &Subject<'_>) -> bool {
    HEX_ESCAPE.find_iter(s.url).count() >= MIN_HEX_ESCAPES
}

fn is_long(s: &Subject<'_>) -> bool {
    s.length > MAX_URL_LENGTH
}

fn has_hyphenated_domain(s: &Subject<'_>) -> bool {
    s.domain
        .is_some_and(|d| d.matches('-').count() >= MIN_DOMAIN_HYPHENS)
}

fn has_many_digits(s: &Subject<'_>) -> bool {
    DIGIT.find_iter(s.url).count() >= MIN_DIGITS
}

fn has_many_subdomains(s: &Subject<'_>) -> bool {
    count_subdomains(s.domain) >= MIN_SUBDOMAINS
}

fn has_suspicious_tld(s: &Subject<'_>) -> bool {
    s.domain
        .is_some_and(|d| SUSPICIOUS_TLDS.iter().any(|tld| d.ends_with(tld)))
}

/// All checks, in evaluation order.
pub static RULES: [Rule; 9] = [
    Rule {
        name: "at-symbol",
        weight: 3,
        reason: "Contains '@' which can hide the real domain",
        check: has_at_symbol,
    },
    Rule {
        name: "ip-address",
        weight: 3,
        reason: "URL contains an IP address instead of domain",
        check: has_ip_address,
    },
    Rule {
        name: "keyword",
        weight: 2,
        reason: "Suspicious keyword found in URL",
        check: has_keyword,
    },
    Rule {
        name: "hex-encoding",
        weight: 2,
        reason: "Multiple encoded characters (possible obfuscation)",
        check: has_hex_escapes,
    },
    Rule {
        name: "long-url",
        weight: 1,
        reason: "Very long URL (length > 120)",
        check: is_long,
    },
    Rule {
        name: "domain-hyphens",
        weight: 1,
        reason: "Domain contains many hyphens",
        check: has_hyphenated_domain,
    },
    Rule {
        name: "many-digits",
        weight: 1,
        reason: "URL contains many digits",
        check: has_many_digits,
    },
    Rule {
        name: "subdomains",
        weight: 1,
        reason: "Too many subdomains",
        check: has_many_subdomains,
    },
    Rule {
        name: "suspicious-tld",
        weight: 2,
        reason: "Suspicious domain extension",
        check: has_suspicious_tld,
    },
];

/// Looks up a rule by name.
pub fn rule(name: &str) -> Option<&'static Rule> {
    RULES.iter().find(|r| r.name == name)
}
