// src/metrics.rs

use axum::{routing::get, Router};
use metrics::{counter, gauge};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};

use crate::analyze::Channel;
use crate::rules::Rules;

pub struct Metrics {
    pub handle: PrometheusHandle,
}

impl Metrics {
    /// Initialize the Prometheus recorder and expose static gauges for the
    /// rule-table sizes loaded at startup.
    pub fn init(rules: &Rules) -> Self {
        // Default buckets to avoid API differences across crate versions.
        let builder = PrometheusBuilder::new();

        let handle = builder
            .install_recorder()
            .expect("prometheus: install recorder");

        gauge!("fraud_rules_keywords").set(rules.keywords.len() as f64);
        gauge!("fraud_rules_urgency").set(rules.urgency.len() as f64);
        gauge!("fraud_rules_suspicious_domains").set(rules.suspicious_domains.len() as f64);

        Self { handle }
    }

    /// Returns a router exposing `/metrics` with the Prometheus exposition format.
    pub fn router(&self) -> Router {
        let handle = self.handle.clone();
        Router::new().route(
            "/metrics",
            get(move || {
                let h = handle.clone();
                async move { h.render() }
            }),
        )
    }
}

/// Per-request counters, recorded whether or not a recorder is installed
/// (the metrics facade no-ops without one, which keeps tests quiet).
pub fn record_analyze(channel: Channel) {
    counter!("fraud_analyze_requests_total", "channel" => channel.as_str()).increment(1);
}

pub fn record_batch_items(n: usize) {
    counter!("fraud_batch_items_total").increment(n as u64);
}

pub fn record_report() {
    counter!("fraud_reports_total").increment(1);
}
