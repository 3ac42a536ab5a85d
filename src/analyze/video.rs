// src/analyze/video.rs
//! Video scorer: text scoring over the transcript plus a coarse deepfake
//! signal from blink-rate and lip-sync metadata.

use super::{analyze_text, label_for, severity_for, AnalysisResult, Metadata, CHANNEL_SIGNAL_WEIGHT};
use crate::rules::Rules;

// Assumed-normal defaults when an indicator is absent, and the anomaly
// cutoffs below them. A resting blink rate under 6/min or a lip-sync
// confidence under 0.7 flags the call.
const NORMAL_BLINK_RATE_PER_MIN: f32 = 12.0;
const LOW_BLINK_RATE_PER_MIN: f32 = 6.0;
const NORMAL_LIP_SYNC_SCORE: f32 = 1.0;
const MIN_LIP_SYNC_SCORE: f32 = 0.7;

/// Wraps the text scorer on the transcript, then adds a flat bump plus
/// video-specific advice when deepfake indicators look anomalous.
pub fn analyze_video(transcript: &str, metadata: &Metadata, rules: &Rules) -> AnalysisResult {
    let mut base = analyze_text(transcript, metadata, rules);

    let indicators = metadata.deepfake_indicators.unwrap_or_default();
    let blink = indicators
        .blink_rate_per_min
        .unwrap_or(NORMAL_BLINK_RATE_PER_MIN);
    let lip_sync = indicators.lip_sync_score.unwrap_or(NORMAL_LIP_SYNC_SCORE);
    let flagged = blink < LOW_BLINK_RATE_PER_MIN || lip_sync < MIN_LIP_SYNC_SCORE;

    if flagged {
        base.score = (base.score + CHANNEL_SIGNAL_WEIGHT).min(1.0);
        base.severity = severity_for(base.score);
        base.label = label_for(base.score);
        base.reasons
            .push("Possible deepfake indicators (blink/lip-sync anomaly)".to_string());
        base.advice.push(
            "Ask for official email confirmation from a .gov.in / official domain.".to_string(),
        );
        base.advice
            .push("Do not perform any payment on call/video; independently verify.".to_string());
    }
    base
}
