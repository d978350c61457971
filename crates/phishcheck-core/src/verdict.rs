//! Caller-side interpretation of a score: label, risk level and message.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::scoring::CheckResult;

/// Score at or above which the risk level is `Medium`.
pub const MEDIUM_RISK_SCORE: u32 = 3;
/// Score at or above which the risk level is `High`.
pub const HIGH_RISK_SCORE: u32 = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Label {
    Safe,
    Suspicious,
}

impl Label {
    pub fn from_suspicious(is_suspicious: bool) -> Self {
        if is_suspicious {
            Label::Suspicious
        } else {
            Label::Safe
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Label::Safe => "Safe",
            Label::Suspicious => "Suspicious",
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Three-tier bucket derived from the heuristic score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn from_score(score: u32) -> Self {
        if score >= HIGH_RISK_SCORE {
            RiskLevel::High
        } else if score >= MEDIUM_RISK_SCORE {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What the front end shows for one checked URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Verdict {
    pub label: Label,
    pub message: String,
    pub score: u32,
    pub risk_level: RiskLevel,
    pub reasons: Vec<String>,
    pub normalized_url: String,
    pub domain: Option<String>,
}

impl Verdict {
    pub fn from_result(result: &CheckResult) -> Self {
        let label = Label::from_suspicious(result.is_suspicious);
        Self {
            label,
            message: format!("{label} URL: {}", result.normalized_url),
            score: result.score,
            risk_level: RiskLevel::from_score(result.score),
            reasons: result.reasons.clone(),
            normalized_url: result.normalized_url.clone(),
            domain: result.domain.clone(),
        }
    }
}
