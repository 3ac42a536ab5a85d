// src/lib.rs
// Public library surface for integration tests (and potential reuse).

pub mod analyze;
pub mod api;
pub mod error;
pub mod metrics;
pub mod report;
pub mod rules;
pub mod samples;
pub mod transcribe;

// ---- Re-exports for stable public API ----
pub use crate::analyze::{
    analyze_channel, analyze_text, analyze_video, analyze_voice, AnalysisResult, Channel, Label,
    Metadata, Severity,
};
pub use crate::api::{create_router, AppState};
pub use crate::rules::Rules;
pub use crate::transcribe::{MockTranscriber, Transcriber};
