// src/analyze/mod.rs
//! Channel scorers: shared result types, fixed weights/thresholds, and
//! per-channel analysis entry points.

pub mod highlight;
pub mod text;
pub mod video;
pub mod voice;

use serde::{Deserialize, Serialize};

use crate::rules::Rules;

// Re-export the per-channel entry points.
pub use highlight::{highlight, Highlight};
pub use text::analyze_text;
pub use video::analyze_video;
pub use voice::analyze_voice;

// Fixed scoring weights. Preserved as-is for output compatibility; there
// is no calibration data behind them, so no config surface is exposed.
pub const KEYWORD_WEIGHT: f32 = 0.25;
pub const URGENCY_WEIGHT: f32 = 0.15;
pub const DOMAIN_WEIGHT: f32 = 0.2;
/// Flat bump added by the voice (spoofing) and video (deepfake) signals.
pub const CHANNEL_SIGNAL_WEIGHT: f32 = 0.25;

// Severity buckets use strict `>`: a score of exactly 0.4 stays low and
// exactly 0.75 stays medium.
const HIGH_THRESHOLD: f32 = 0.75;
const MEDIUM_THRESHOLD: f32 = 0.4;
const SCAM_LABEL_THRESHOLD: f32 = 0.5;

/// Medium of the analyzed communication.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    Text,
    Voice,
    Video,
}

impl Channel {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "text" => Some(Self::Text),
            "voice" => Some(Self::Voice),
            "video" => Some(Self::Video),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Voice => "voice",
            Self::Video => "video",
        }
    }
}

/// Risk bucket derived from the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Label {
    PotentialScam,
    Unclear,
}

pub fn severity_for(score: f32) -> Severity {
    if score > HIGH_THRESHOLD {
        Severity::High
    } else if score > MEDIUM_THRESHOLD {
        Severity::Medium
    } else {
        Severity::Low
    }
}

pub fn label_for(score: f32) -> Label {
    if score > SCAM_LABEL_THRESHOLD {
        Label::PotentialScam
    } else {
        Label::Unclear
    }
}

/// Channel-specific request metadata. All fields optional; absent fields
/// simply contribute no signal. Wire names stay camelCase.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Metadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sender: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caller_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spoofed_caller_id: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deepfake_indicators: Option<DeepfakeIndicators>,
}

/// Coarse manipulation-likelihood proxies attached to video calls.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DeepfakeIndicators {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blink_rate_per_min: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lip_sync_score: Option<f32>,
}

/// Full assessment returned for one piece of content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub label: Label,
    pub score: f32,
    pub severity: Severity,
    pub reasons: Vec<String>,
    pub highlights: Vec<Highlight>,
    pub advice: Vec<String>,
}

/// Dispatch to the scorer matching `channel`.
pub fn analyze_channel(
    channel: Channel,
    content: &str,
    metadata: &Metadata,
    rules: &Rules,
) -> AnalysisResult {
    match channel {
        Channel::Text => analyze_text(content, metadata, rules),
        Channel::Voice => analyze_voice(content, metadata, rules),
        Channel::Video => analyze_video(content, metadata, rules),
    }
}
