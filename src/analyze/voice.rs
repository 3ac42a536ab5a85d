// src/analyze/voice.rs
//! Voice scorer: text scoring over the transcript plus a caller-ID
//! spoofing signal.

use once_cell::sync::Lazy;
use regex::Regex;

use super::{analyze_text, label_for, severity_for, AnalysisResult, Metadata, CHANNEL_SIGNAL_WEIGHT};
use crate::rules::Rules;

/// Known-spoofable telemarketing number format (Indian 140-xx series).
static SPOOFABLE_CALLER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"140-").expect("spoofable caller regex"));

/// Wraps the text scorer on the transcript, then adds a flat bump when the
/// caller ID is flagged or matches the spoofable pattern.
pub fn analyze_voice(transcript: &str, metadata: &Metadata, rules: &Rules) -> AnalysisResult {
    let mut base = analyze_text(transcript, metadata, rules);

    let caller_id = metadata.caller_id.as_deref().unwrap_or("");
    let spoofed =
        metadata.spoofed_caller_id == Some(true) || SPOOFABLE_CALLER.is_match(caller_id);

    if spoofed {
        base.score = (base.score + CHANNEL_SIGNAL_WEIGHT).min(1.0);
        base.severity = severity_for(base.score);
        base.label = label_for(base.score);
        base.reasons.push("Possible caller ID spoofing".to_string());
    }
    base
}
