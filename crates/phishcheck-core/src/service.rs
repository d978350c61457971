//! Checker service: score a URL, build the verdict, remember it.

use crate::history::{History, HistoryEntry, HistoryPayload};
use crate::scoring::heuristic_score;
use crate::verdict::Verdict;

/// Per-process checker state. Shared across connections behind an `Arc`.
#[derive(Debug, Default)]
pub struct PhishChecker {
    history: History,
}

impl PhishChecker {
    pub fn new(history_capacity: usize) -> Self {
        Self {
            history: History::new(history_capacity),
        }
    }

    /// Score `raw`, record the outcome in the history, and return the verdict.
    pub fn check(&self, raw: &str) -> Verdict {
        let result = heuristic_score(raw.trim());
        let verdict = Verdict::from_result(&result);
        tracing::debug!(
            url = %verdict.normalized_url,
            score = verdict.score,
            risk = %verdict.risk_level,
            "checked url"
        );
        self.history.record(HistoryEntry::stamped_now(&verdict));
        verdict
    }

    /// Current history, newest first.
    pub fn history(&self) -> Vec<HistoryEntry> {
        self.history.snapshot()
    }

    pub fn history_payload(&self) -> HistoryPayload {
        self.history.payload()
    }
}
