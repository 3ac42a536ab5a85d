// src/analyze/text.rs
//! Core text scorer: keyword/urgency substring hits plus a suspicious
//! sender-domain check, accumulated with fixed linear weights.

use once_cell::sync::Lazy;
use regex::Regex;

use super::{
    highlight, label_for, severity_for, AnalysisResult, Metadata, DOMAIN_WEIGHT, KEYWORD_WEIGHT,
    URGENCY_WEIGHT,
};
use crate::rules::Rules;

/// Trailing `@domain` of an email-style sender, e.g. `"KYC Desk <kyc@kyc-update.in>"`.
static SENDER_DOMAIN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)@([^\s>]+)$").expect("sender domain regex"));

/// Generic protective guidance, identical for every text analysis.
pub(crate) fn base_advice() -> Vec<String> {
    vec![
        "Do not click links or share OTPs.".to_string(),
        "Verify caller/sender via official website/app.".to_string(),
        "Report to cybercrime.gov.in if in India.".to_string(),
    ]
}

/// Score `content` against the rule table. Empty content scores 0 with
/// empty reasons/highlights; absent metadata just means no domain signal.
pub fn analyze_text(content: &str, metadata: &Metadata, rules: &Rules) -> AnalysisResult {
    let lc = content.to_lowercase();

    let kw_hits: Vec<&str> = rules
        .keywords
        .iter()
        .filter(|k| lc.contains(k.as_str()))
        .map(String::as_str)
        .collect();
    let urgency_hits: Vec<&str> = rules
        .urgency
        .iter()
        .filter(|u| lc.contains(u.as_str()))
        .map(String::as_str)
        .collect();

    let domain_flag = metadata
        .sender
        .as_deref()
        .and_then(|s| SENDER_DOMAIN.captures(s))
        .and_then(|c| c.get(1))
        .map(|m| {
            let dom = m.as_str().to_lowercase();
            rules
                .suspicious_domains
                .iter()
                .any(|d| dom.contains(d.as_str()))
        })
        .unwrap_or(false);

    let score = (kw_hits.len() as f32 * KEYWORD_WEIGHT
        + urgency_hits.len() as f32 * URGENCY_WEIGHT
        + if domain_flag { DOMAIN_WEIGHT } else { 0.0 })
    .min(1.0);

    let mut reasons = Vec::new();
    if !kw_hits.is_empty() {
        reasons.push(format!("Keywords detected: {}", kw_hits.join(", ")));
    }
    if !urgency_hits.is_empty() {
        reasons.push(format!("Urgency cues: {}", urgency_hits.join(", ")));
    }
    if domain_flag {
        reasons.push("Suspicious sender domain".to_string());
    }

    // Keyword hits first, then urgency hits, in that concatenation order.
    let matched: Vec<String> = kw_hits
        .iter()
        .chain(urgency_hits.iter())
        .map(|s| s.to_string())
        .collect();
    let highlights = highlight(content, &matched);

    AnalysisResult {
        label: label_for(score),
        score,
        severity: severity_for(score),
        reasons,
        highlights,
        advice: base_advice(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyze::{Label, Severity};

    fn rules() -> Rules {
        Rules {
            keywords: vec!["blocked".into(), "kyc".into(), "otp".into()],
            urgency: vec!["immediately".into(), "urgent".into()],
            suspicious_domains: vec!["kyc-update".into(), "refund-portal".into()],
        }
    }

    fn meta_with_sender(sender: &str) -> Metadata {
        Metadata {
            sender: Some(sender.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn clean_content_scores_zero() {
        let r = analyze_text("See you at lunch tomorrow", &Metadata::default(), &rules());
        assert_eq!(r.score, 0.0);
        assert_eq!(r.severity, Severity::Low);
        assert_eq!(r.label, Label::Unclear);
        assert!(r.reasons.is_empty());
        assert!(r.highlights.is_empty());
        assert_eq!(r.advice.len(), 3);
    }

    #[test]
    fn empty_content_scores_zero() {
        let r = analyze_text("", &Metadata::default(), &rules());
        assert_eq!(r.score, 0.0);
        assert!(r.reasons.is_empty());
        assert!(r.highlights.is_empty());
        assert!(!r.advice.is_empty());
    }

    #[test]
    fn kyc_urgent_example_lands_exactly_on_the_low_boundary() {
        let r = analyze_text(
            "Urgent: verify your KYC now",
            &Metadata::default(),
            &rules(),
        );
        assert!((r.score - 0.40).abs() < 1e-6);
        // 0.4 is not > 0.4, so the boundary stays low.
        assert_eq!(r.severity, Severity::Low);
        assert_eq!(r.label, Label::Unclear);
        assert_eq!(r.reasons.len(), 2);
        assert!(r.reasons[0].starts_with("Keywords detected: "));
        assert!(r.reasons[1].starts_with("Urgency cues: "));
    }

    #[test]
    fn score_grows_with_hits_and_clamps_at_one() {
        let one = analyze_text("kyc", &Metadata::default(), &rules());
        let two = analyze_text("kyc otp", &Metadata::default(), &rules());
        let three = analyze_text("kyc otp blocked", &Metadata::default(), &rules());
        assert!(one.score < two.score);
        assert!(two.score < three.score);

        let many = analyze_text(
            "kyc otp blocked urgent immediately",
            &meta_with_sender("alerts@kyc-update.in"),
            &rules(),
        );
        assert!(many.score <= 1.0);
        assert_eq!(many.score, 1.0);
        assert_eq!(many.severity, Severity::High);
        assert_eq!(many.label, Label::PotentialScam);
    }

    #[test]
    fn three_keywords_land_exactly_on_the_medium_boundary() {
        let r = analyze_text("kyc otp blocked", &Metadata::default(), &rules());
        assert!((r.score - 0.75).abs() < 1e-6);
        assert_eq!(r.severity, Severity::Medium);
    }

    #[test]
    fn suspicious_sender_domain_adds_its_weight() {
        let r = analyze_text("hello", &meta_with_sender("support@kyc-update.in"), &rules());
        assert!((r.score - 0.2).abs() < 1e-6);
        assert_eq!(r.reasons, vec!["Suspicious sender domain".to_string()]);
        assert!(r.highlights.is_empty());
    }

    #[test]
    fn sender_without_at_sign_contributes_nothing() {
        let r = analyze_text("hello", &meta_with_sender("+91-9812345678"), &rules());
        assert_eq!(r.score, 0.0);
    }

    #[test]
    fn angle_bracketed_sender_is_not_matched() {
        // The trailing-domain pattern excludes `>`; display-name senders
        // must be reduced to the bare address by the caller.
        let r = analyze_text(
            "hello",
            &meta_with_sender("KYC Desk <support@kyc-update.in>"),
            &rules(),
        );
        assert_eq!(r.score, 0.0);
    }

    #[test]
    fn highlights_cover_keyword_then_urgency_hits() {
        let r = analyze_text("Act immediately, your otp expires", &Metadata::default(), &rules());
        let phrases: Vec<&str> = r.highlights.iter().map(|h| h.phrase.as_str()).collect();
        assert_eq!(phrases, vec!["otp", "immediately"]);
    }
}
