// src/report.rs
//! In-memory store for user-submitted scam reports.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use serde::{Deserialize, Serialize};

use crate::analyze::Channel;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub id: String,
    pub content: String,
    pub channel: Channel,
    #[serde(rename = "userId", skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    pub timestamp: String,
}

/// Append-only report list. Ids come from an atomic counter, not the list
/// length, so concurrent submissions cannot collide.
#[derive(Debug, Default)]
pub struct ReportStore {
    entries: Mutex<Vec<Report>>,
    next_id: AtomicU64,
}

impl ReportStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a report and returns it together with the new total.
    pub fn submit(
        &self,
        content: String,
        channel: Channel,
        user_id: Option<String>,
    ) -> (Report, usize) {
        let id = format!("r_{}", self.next_id.fetch_add(1, Ordering::Relaxed) + 1);
        let report = Report {
            id,
            content,
            channel,
            user_id,
            timestamp: chrono::Utc::now().to_rfc3339(),
        };
        let mut entries = self.entries.lock().expect("report store mutex poisoned");
        entries.push(report.clone());
        (report, entries.len())
    }

    pub fn len(&self) -> usize {
        self.entries.lock().expect("report store mutex poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn snapshot_last_n(&self, n: usize) -> Vec<Report> {
        let entries = self.entries.lock().expect("report store mutex poisoned");
        let start = entries.len().saturating_sub(n);
        entries[start..].to_vec()
    }
}
