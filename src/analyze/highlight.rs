// src/analyze/highlight.rs
//! Locates first-occurrence offsets of matched phrases for UI emphasis.

use serde::{Deserialize, Serialize};

/// A matched phrase and its first-occurrence byte offset in the source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Highlight {
    pub phrase: String,
    pub index: usize,
}

/// One entry per phrase that occurs in `text` (case-insensitive), at its
/// first occurrence. Output order follows the input phrase order, not
/// positional order. Overlapping or nested ranges are left as-is; any
/// de-overlap is a presentation concern for the caller.
pub fn highlight(text: &str, phrases: &[String]) -> Vec<Highlight> {
    let lower = text.to_lowercase();
    let mut hits = Vec::new();
    for p in phrases {
        if let Some(i) = lower.find(&p.to_lowercase()) {
            hits.push(Highlight {
                phrase: p.clone(),
                index: i,
            });
        }
    }
    hits
}
