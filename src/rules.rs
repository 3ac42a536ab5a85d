// src/rules.rs
//! Rule table + loader.
//!
//! An explicit, immutable config object (`Rules`) deserialized once at
//! startup from a JSON resource and shared read-only via `Arc<Rules>`.
//! Keyword matching is case-insensitive substring containment on lowercased
//! content, so the table itself is trimmed, lowercased and deduplicated at
//! load time.

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;

/// Environment variable overriding the rule-table path.
const RULES_PATH_ENV: &str = "FRAUD_RULES_PATH";
/// Fixed fallback path used when the override is absent.
const DEFAULT_RULES_PATH: &str = "config/fraud_rules.json";

/// The fraud-detection rule table.
///
/// Field names on the wire are camelCase (`suspiciousDomains`) for drop-in
/// compatibility with the original config file.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rules {
    pub keywords: Vec<String>,
    pub urgency: Vec<String>,
    pub suspicious_domains: Vec<String>,
}

impl Rules {
    /// Load the rule table from the default location: the `FRAUD_RULES_PATH`
    /// override when set, otherwise the fixed fallback path.
    pub fn load_default() -> anyhow::Result<Self> {
        let path = std::env::var(RULES_PATH_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_RULES_PATH));
        Self::load_from(&path)
    }

    /// Load and normalize the rule table from `path`. A missing or malformed
    /// resource is a fatal, contextual error.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading fraud rules from {}", path.display()))?;
        let mut rules: Rules = serde_json::from_str(&raw)
            .with_context(|| format!("parsing fraud rules from {}", path.display()))?;

        rules.keywords = clean_list(rules.keywords);
        rules.urgency = clean_list(rules.urgency);
        rules.suspicious_domains = clean_list(rules.suspicious_domains);

        Ok(rules)
    }
}

/// Trim, lowercase, drop empties, and deduplicate (preserving first-seen
/// order) so matching can rely on a normalized table.
fn clean_list(entries: Vec<String>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    let mut out = Vec::new();
    for entry in entries {
        let normalized = entry.trim().to_lowercase();
        if normalized.is_empty() {
            continue;
        }
        if seen.insert(normalized.clone()) {
            out.push(normalized);
        }
    }
    out
}
