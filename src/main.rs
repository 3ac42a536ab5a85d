//! Fraud Risk Analyzer — Binary Entrypoint
//! Boots the Axum HTTP server, wiring routes, shared state, and middleware.

use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use fraud_risk_analyzer::api::{self, AppState};
use fraud_risk_analyzer::metrics::Metrics;
use fraud_risk_analyzer::rules::Rules;
use fraud_risk_analyzer::transcribe::MockTranscriber;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("fraud_risk_analyzer=info,warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact())
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env in local/dev; no-op in prod environments. This enables
    // FRAUD_RULES_PATH / PORT overrides from .env.
    let _ = dotenvy::dotenv();
    init_tracing();

    // The rule table is static per deployment: a missing or malformed
    // file aborts startup instead of limping along with empty rules.
    let rules = Rules::load_default().context("failed to load fraud rules")?;
    tracing::info!(
        keywords = rules.keywords.len(),
        urgency = rules.urgency.len(),
        domains = rules.suspicious_domains.len(),
        "rule table loaded"
    );

    let metrics = Metrics::init(&rules);
    let state = AppState::new(Arc::new(rules), Arc::new(MockTranscriber));
    let router = api::create_router(state).merge(metrics.router());

    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080);
    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "listening");
    axum::serve(listener, router).await?;
    Ok(())
}
