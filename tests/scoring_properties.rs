// tests/scoring_properties.rs
//
// Scoring-contract tests over the library surface, using the checked-in
// rule table: clean content, monotonicity, clamping, exact severity
// boundaries, and the channel wrappers never scoring below the text base.

use std::path::Path;

use fraud_risk_analyzer::analyze::{
    analyze_text, analyze_video, analyze_voice, DeepfakeIndicators, Label, Metadata, Severity,
};
use fraud_risk_analyzer::rules::Rules;

fn rules() -> Rules {
    Rules::load_from(Path::new("config/fraud_rules.json")).expect("load rules")
}

#[test]
fn content_without_hits_scores_zero_across_channels() {
    let r = rules();
    let meta = Metadata::default();
    for content in ["", "See you at the gym at six", "Happy birthday!"] {
        let text = analyze_text(content, &meta, &r);
        assert_eq!(text.score, 0.0, "content {content:?}");
        assert_eq!(text.severity, Severity::Low);
        assert_eq!(text.label, Label::Unclear);
        assert!(text.reasons.is_empty());
        assert!(text.highlights.is_empty());
        assert!(!text.advice.is_empty());

        assert_eq!(analyze_voice(content, &meta, &r).score, 0.0);
        assert_eq!(analyze_video(content, &meta, &r).score, 0.0);
    }
}

#[test]
fn score_is_monotone_in_hits_and_clamped() {
    let r = rules();
    let meta = Metadata::default();

    // Each message adds one more rule hit than the previous.
    let escalating = [
        "your otp",
        "your otp for the kyc check",
        "your otp for the kyc check on the blocked account",
        "urgent: your otp for the kyc check on the blocked account",
    ];
    let mut last = -1.0f32;
    for content in escalating {
        let score = analyze_text(content, &meta, &r).score;
        assert!(score > last, "expected growth at {content:?}");
        last = score;
    }

    // Pile on far more hits than the clamp allows.
    let flood = "urgent! immediately act now: kyc otp blocked suspended lottery prize refund customs parcel arrest warrant";
    let flooded = analyze_text(flood, &meta, &r);
    assert_eq!(flooded.score, 1.0);
    assert_eq!(flooded.severity, Severity::High);
    assert_eq!(flooded.label, Label::PotentialScam);
}

#[test]
fn severity_boundaries_are_inclusive_on_the_lower_bucket() {
    let r = rules();
    let meta = Metadata::default();

    // Exactly two signal categories at 0.25 + 0.15 = 0.40: stays low.
    let at_medium_edge = analyze_text("Urgent: verify your KYC now", &meta, &r);
    assert!((at_medium_edge.score - 0.40).abs() < 1e-6);
    assert_eq!(at_medium_edge.severity, Severity::Low);

    // Exactly three keywords at 0.75: stays medium.
    let at_high_edge = analyze_text("kyc otp blocked", &meta, &r);
    assert!((at_high_edge.score - 0.75).abs() < 1e-6);
    assert_eq!(at_high_edge.severity, Severity::Medium);
}

#[test]
fn channel_wrappers_never_score_below_the_text_base() {
    let r = rules();
    let spoof_meta = Metadata {
        caller_id: Some("140-1234567".into()),
        ..Default::default()
    };
    let fake_meta = Metadata {
        deepfake_indicators: Some(DeepfakeIndicators {
            blink_rate_per_min: Some(2.0),
            lip_sync_score: Some(0.3),
        }),
        ..Default::default()
    };

    for content in [
        "",
        "hello there",
        "share the otp",
        "urgent: kyc blocked, act now",
    ] {
        let base = analyze_text(content, &Metadata::default(), &r).score;
        let voice = analyze_voice(content, &spoof_meta, &r).score;
        let video = analyze_video(content, &fake_meta, &r).score;
        assert!(voice >= base, "voice below base at {content:?}");
        assert!(video >= base, "video below base at {content:?}");
        assert!(voice <= 1.0 && video <= 1.0);
    }
}

#[test]
fn spoofed_caller_with_clean_transcript_is_low_but_flagged() {
    let r = rules();
    let meta = Metadata {
        caller_id: Some("140-1234567".into()),
        ..Default::default()
    };
    let res = analyze_voice("good afternoon, quick question", &meta, &r);
    assert!((res.score - 0.25).abs() < 1e-6);
    assert_eq!(res.severity, Severity::Low);
    assert_eq!(res.reasons, vec!["Possible caller ID spoofing".to_string()]);
}

#[test]
fn highlights_are_unique_per_phrase_and_only_for_real_hits() {
    let r = rules();
    let res = analyze_text(
        "OTP scam warning: never share an otp, not even one otp",
        &Metadata::default(),
        &r,
    );
    let otp_entries: Vec<_> = res
        .highlights
        .iter()
        .filter(|h| h.phrase == "otp")
        .collect();
    assert_eq!(otp_entries.len(), 1);
    assert_eq!(otp_entries[0].index, 0);
    for h in &res.highlights {
        assert!(res
            .reasons
            .iter()
            .any(|reason| reason.contains(&h.phrase)));
    }
}
