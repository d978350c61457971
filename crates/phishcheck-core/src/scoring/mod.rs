//! Heuristic phishing score.
//!
//! [`heuristic_score`] normalizes the input, then runs every entry of
//! [`RULES`] against the lowercased URL and its hostname. Each triggered rule
//! adds its weight and its reason; the rules are independent of each other.

mod rules;

use serde::{Deserialize, Serialize};

use crate::url_model::NormalizedUrl;

pub use rules::{
    rule, Rule, Subject, MAX_URL_LENGTH, RULES, SUSPICIOUS_KEYWORDS, SUSPICIOUS_TLDS,
};

/// Score at or above which a URL is considered suspicious.
pub const SUSPICIOUS_THRESHOLD: u32 = 3;

pub const REASON_EMPTY: &str = "Empty input";
pub const REASON_CLEAN: &str = "No obvious suspicious patterns found";

/// Outcome of scoring one URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckResult {
    pub is_suspicious: bool,
    pub score: u32,
    pub reasons: Vec<String>,
    pub normalized_url: String,
    pub domain: Option<String>,
    /// Length of the lowercased normalized URL, in characters.
    pub length: usize,
}

impl CheckResult {
    fn empty() -> Self {
        Self {
            is_suspicious: false,
            score: 0,
            reasons: vec![REASON_EMPTY.to_string()],
            normalized_url: String::new(),
            domain: None,
            length: 0,
        }
    }

    /// Names of the rules that fired, in evaluation order.
    pub fn triggered_rules(&self) -> Vec<&'static str> {
        RULES
            .iter()
            .filter(|r| self.reasons.iter().any(|reason| reason == r.reason))
            .map(|r| r.name)
            .collect()
    }
}

/// Scores `raw` user input.
///
/// Blank input short-circuits to a non-suspicious result with the single
/// reason [`REASON_EMPTY`].
pub fn heuristic_score(raw: &str) -> CheckResult {
    if raw.trim().is_empty() {
        return CheckResult::empty();
    }

    let NormalizedUrl { url, domain } = NormalizedUrl::parse(raw);
    let lower = url.to_lowercase();
    let subject = Subject {
        url: &lower,
        domain: domain.as_deref(),
        length: lower.chars().count(),
    };

    let mut score = 0u32;
    let mut reasons = Vec::new();
    for rule in RULES.iter().filter(|r| r.matches(&subject)) {
        score += rule.weight;
        reasons.push(rule.reason.to_string());
    }
    if reasons.is_empty() {
        reasons.push(REASON_CLEAN.to_string());
    }

    CheckResult {
        is_suspicious: score >= SUSPICIOUS_THRESHOLD,
        score,
        reasons,
        length: subject.length,
        normalized_url: url,
        domain,
    }
}
