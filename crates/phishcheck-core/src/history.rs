//! Recent-checks log.
//!
//! A bounded, newest-first list of past verdicts. It is process-local and
//! lost on restart; the checker service owns one and every connection shares
//! it through that service.

use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard, PoisonError};

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::verdict::{Label, RiskLevel, Verdict};

/// Number of entries kept when no capacity is configured.
pub const DEFAULT_CAPACITY: usize = 10;

/// One past check, as shown in the history table and `/history` payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub url: String,
    pub domain: Option<String>,
    pub label: Label,
    pub score: u32,
    pub risk_level: RiskLevel,
    /// Local wall-clock time, `HH:MM:SS`.
    pub timestamp: String,
}

impl HistoryEntry {
    pub fn from_verdict(verdict: &Verdict, timestamp: impl Into<String>) -> Self {
        Self {
            url: verdict.normalized_url.clone(),
            domain: verdict.domain.clone(),
            label: verdict.label,
            score: verdict.score,
            risk_level: verdict.risk_level,
            timestamp: timestamp.into(),
        }
    }

    /// Entry stamped with the current local time.
    pub fn stamped_now(verdict: &Verdict) -> Self {
        Self::from_verdict(verdict, chrono::Local::now().format("%H:%M:%S").to_string())
    }
}

/// Body of the `/history` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryPayload {
    pub history: Vec<HistoryEntry>,
}

impl HistoryPayload {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Bounded newest-first history guarded by a single mutex.
#[derive(Debug)]
pub struct History {
    entries: Mutex<VecDeque<HistoryEntry>>,
    capacity: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl History {
    /// Create an empty history; `capacity` is clamped to at least 1.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: Mutex::new(VecDeque::with_capacity(capacity + 1)),
            capacity,
        }
    }

    // Entries are plain data, so a panic mid-update cannot leave them torn.
    fn lock(&self) -> MutexGuard<'_, VecDeque<HistoryEntry>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Insert `entry` as the newest item, evicting the oldest past capacity.
    pub fn record(&self, entry: HistoryEntry) {
        let mut entries = self.lock();
        entries.push_front(entry);
        while entries.len() > self.capacity {
            entries.pop_back();
        }
    }

    /// Copy of the current entries, newest first.
    pub fn snapshot(&self) -> Vec<HistoryEntry> {
        self.lock().iter().cloned().collect()
    }

    pub fn payload(&self) -> HistoryPayload {
        HistoryPayload {
            history: self.snapshot(),
        }
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
