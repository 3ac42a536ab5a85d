// src/samples.rs
//! Static demo datasets: one record set per channel, embedded at compile
//! time and parsed once. Read-only reference data, not a live store.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::analyze::{analyze_channel, AnalysisResult, Channel, DeepfakeIndicators, Metadata};
use crate::rules::Rules;

static TEXT_SAMPLES: Lazy<Vec<TextSample>> = Lazy::new(|| {
    serde_json::from_str(include_str!("../data/text_samples.json")).expect("valid text samples")
});
static VOICE_SAMPLES: Lazy<Vec<VoiceSample>> = Lazy::new(|| {
    serde_json::from_str(include_str!("../data/voice_samples.json")).expect("valid voice samples")
});
static VIDEO_SAMPLES: Lazy<Vec<VideoSample>> = Lazy::new(|| {
    serde_json::from_str(include_str!("../data/video_samples.json")).expect("valid video samples")
});

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextSample {
    pub id: String,
    pub content: String,
    pub sender: String,
    pub timestamp: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoiceSample {
    pub id: String,
    pub transcript: String,
    pub caller_id: String,
    pub spoofed_caller_id: bool,
    pub timestamp: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoSample {
    pub id: String,
    pub transcript: String,
    pub deepfake_indicators: DeepfakeIndicators,
    pub timestamp: String,
}

pub fn text_samples() -> &'static [TextSample] {
    &TEXT_SAMPLES
}

pub fn voice_samples() -> &'static [VoiceSample] {
    &VOICE_SAMPLES
}

pub fn video_samples() -> &'static [VideoSample] {
    &VIDEO_SAMPLES
}

/// A sample record with its precomputed assessment, as served by the
/// incidents listing.
#[derive(Debug, Clone, Serialize)]
pub struct Incident {
    pub id: String,
    pub channel: Channel,
    pub content: String,
    pub timestamp: String,
    pub severity: crate::analyze::Severity,
    pub analysis: AnalysisResult,
    pub metadata: Metadata,
}

/// Runs every sample record through its channel scorer and merges the
/// three datasets into one listing.
pub fn incidents(rules: &Rules) -> Vec<Incident> {
    let mut out = Vec::with_capacity(
        TEXT_SAMPLES.len() + VOICE_SAMPLES.len() + VIDEO_SAMPLES.len(),
    );

    for t in TEXT_SAMPLES.iter() {
        let metadata = Metadata {
            sender: Some(t.sender.clone()),
            ..Default::default()
        };
        out.push(build_incident(
            &t.id, Channel::Text, &t.content, &t.timestamp, metadata, rules,
        ));
    }
    for v in VOICE_SAMPLES.iter() {
        let metadata = Metadata {
            caller_id: Some(v.caller_id.clone()),
            spoofed_caller_id: Some(v.spoofed_caller_id),
            ..Default::default()
        };
        out.push(build_incident(
            &v.id, Channel::Voice, &v.transcript, &v.timestamp, metadata, rules,
        ));
    }
    for vd in VIDEO_SAMPLES.iter() {
        let metadata = Metadata {
            deepfake_indicators: Some(vd.deepfake_indicators),
            ..Default::default()
        };
        out.push(build_incident(
            &vd.id, Channel::Video, &vd.transcript, &vd.timestamp, metadata, rules,
        ));
    }
    out
}

fn build_incident(
    id: &str,
    channel: Channel,
    content: &str,
    timestamp: &str,
    metadata: Metadata,
    rules: &Rules,
) -> Incident {
    let analysis = analyze_channel(channel, content, &metadata, rules);
    Incident {
        id: id.to_string(),
        channel,
        content: content.to_string(),
        timestamp: timestamp.to_string(),
        severity: analysis.severity,
        analysis,
        metadata,
    }
}

/// Deterministically picks a sample record for an uploaded file and
/// returns its channel-specific metadata. Demo realism only: the hash
/// selects a plausible record, it does not infer anything from the media.
pub fn synthesize_metadata(channel: Channel, file_bytes: &[u8]) -> Metadata {
    let digest = Sha256::digest(file_bytes);
    let pick = u32::from_be_bytes([0, digest[0], digest[1], digest[2]]) as usize;

    match channel {
        Channel::Voice => {
            let s = &VOICE_SAMPLES[pick % VOICE_SAMPLES.len()];
            Metadata {
                caller_id: Some(s.caller_id.clone()),
                spoofed_caller_id: Some(s.spoofed_caller_id),
                ..Default::default()
            }
        }
        Channel::Video => {
            let s = &VIDEO_SAMPLES[pick % VIDEO_SAMPLES.len()];
            Metadata {
                deepfake_indicators: Some(s.deepfake_indicators),
                ..Default::default()
            }
        }
        Channel::Text => Metadata::default(),
    }
}
