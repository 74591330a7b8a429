// Unit tests for the analysis engines and output helpers.
//
// Tests isolated pure functions: RiskTier::from_score boundary
// conditions, classify properties (trigger counting, clamping,
// case-folding), pattern engine scoring, and truncate_chars UTF-8
// safety.

use vishwas::analysis::pattern::PatternAnalyzer;
use vishwas::analysis::traits::Analyzer;
use vishwas::analysis::trigger::{classify, TRIGGER_PHRASES, TRIGGER_WEIGHT};
use vishwas::analysis::verdict::{RiskTier, Verdict};
use vishwas::output::truncate_chars;

// ============================================================
// RiskTier::from_score — boundary conditions
// ============================================================

#[test]
fn tier_exact_boundary_high() {
    assert_eq!(RiskTier::from_score(60), RiskTier::High);
}

#[test]
fn tier_just_below_high() {
    assert_eq!(RiskTier::from_score(59), RiskTier::Medium);
}

#[test]
fn tier_exact_boundary_medium() {
    assert_eq!(RiskTier::from_score(30), RiskTier::Medium);
}

#[test]
fn tier_just_below_medium() {
    assert_eq!(RiskTier::from_score(29), RiskTier::Low);
}

#[test]
fn tier_zero() {
    assert_eq!(RiskTier::from_score(0), RiskTier::Low);
}

#[test]
fn tier_top_of_range() {
    assert_eq!(RiskTier::from_score(100), RiskTier::High);
}

// ============================================================
// RiskTier round-trip: from_score -> as_str -> Display
// ============================================================

#[test]
fn tier_as_str_all_variants() {
    assert_eq!(RiskTier::Low.as_str(), "Low Risk");
    assert_eq!(RiskTier::Medium.as_str(), "Medium Risk");
    assert_eq!(RiskTier::High.as_str(), "High Risk");
}

#[test]
fn tier_round_trip_score_to_label() {
    let cases = [(0, "Low Risk"), (40, "Medium Risk"), (80, "High Risk")];
    for (score, expected) in cases {
        assert_eq!(
            RiskTier::from_score(score).to_string(),
            expected,
            "Score {score} should map to {expected}"
        );
    }
}

// ============================================================
// classify — trigger counting and clamping
// ============================================================

#[test]
fn classify_no_triggers() {
    let verdict = classify("Hello, how are you today?");
    assert_eq!(verdict.score, 0);
    assert_eq!(verdict.risk, RiskTier::Low);
}

#[test]
fn classify_worked_example() {
    // "urgent", "verify", "suspended" -> 60 -> High
    let verdict = classify("This is urgent, please verify your account or it will be suspended");
    assert_eq!(verdict.score, 60);
    assert_eq!(verdict.risk, RiskTier::High);
}

#[test]
fn classify_scores_twenty_per_distinct_trigger() {
    // Build inputs with k distinct triggers; score = min(20k, 100)
    for k in 1..=5 {
        let text = TRIGGER_PHRASES[..k].join(" ");
        let verdict = classify(&text);
        let expected = (k as u32 * TRIGGER_WEIGHT).min(100);
        assert_eq!(verdict.score, expected, "for {k} triggers");
    }
}

#[test]
fn classify_clamps_at_100() {
    let everything = TRIGGER_PHRASES.join(" ");
    assert_eq!(classify(&everything).score, 100);
}

#[test]
fn classify_is_case_insensitive() {
    assert_eq!(classify("URGENT"), classify("urgent"));
    assert_eq!(classify("Wire Money"), classify("wire money"));
}

#[test]
fn classify_is_idempotent() {
    let text = "Dear friend, a prince needs you to wire money urgently";
    assert_eq!(classify(text), classify(text));
}

#[test]
fn classify_presence_not_occurrence_count() {
    // The same trigger three times still contributes once
    assert_eq!(classify("lottery lottery lottery").score, 20);
}

#[test]
fn classify_empty_input() {
    let verdict = classify("");
    assert_eq!(verdict.score, 0);
    assert_eq!(verdict.risk, RiskTier::Low);
    assert_eq!(verdict.summary, RiskTier::Low.summary());
}

// ============================================================
// Pattern engine — signal families
// ============================================================

#[test]
fn pattern_greeting_is_low_risk() {
    let engine = PatternAnalyzer::new().unwrap();
    let verdict = engine.analyze("Good morning! Thank you for the update. Best regards, Priya");
    assert_eq!(verdict.risk, RiskTier::Low);
}

#[test]
fn pattern_reports_matched_keywords() {
    let engine = PatternAnalyzer::new().unwrap();
    let verdict = engine.analyze("You inherited a fortune, keep it confidential");
    assert!(verdict
        .reasons
        .contains(&"Contains suspicious keyword: 'confidential'".to_string()));
}

#[test]
fn pattern_detects_links() {
    let engine = PatternAnalyzer::new().unwrap();
    let verdict = engine.analyze("visit https://totally-real-bank.example/verify");
    assert!(verdict.reasons.contains(&"Contains a link".to_string()));
}

#[test]
fn pattern_score_stays_in_range() {
    let engine = PatternAnalyzer::new().unwrap();
    let pile = "URGENT!!! act now winner lottery inheritance prince million \
                wire transfer gift card bitcoin western union moneygram \
                $9,999,999 and 5 million dollars http://a.example \
                urgent respond click this link send money"
        .repeat(3);
    let verdict = engine.analyze(&pile);
    assert!(verdict.score <= 100);
    assert_eq!(verdict.risk, RiskTier::High);
}

#[test]
fn pattern_reasons_never_exceed_five() {
    let engine = PatternAnalyzer::new().unwrap();
    let verdict = engine.analyze(
        "urgent immediate act now limited time winner congratulations lottery \
         inheritance prince million bitcoin paypal",
    );
    assert!(verdict.reasons.len() <= 5);
}

// ============================================================
// Verdict construction
// ============================================================

#[test]
fn verdict_from_score_matches_tier_texts() {
    for score in [0, 30, 60] {
        let verdict = Verdict::from_score(score);
        assert_eq!(verdict.summary, verdict.risk.summary());
        assert_eq!(
            verdict.reasons,
            verdict
                .risk
                .standard_reasons()
                .iter()
                .map(|r| r.to_string())
                .collect::<Vec<_>>()
        );
    }
}

// ============================================================
// truncate_chars — UTF-8 safe truncation
// ============================================================

#[test]
fn truncate_within_limit() {
    assert_eq!(truncate_chars("hello", 10), "hello");
}

#[test]
fn truncate_exactly_at_limit() {
    assert_eq!(truncate_chars("hello", 5), "hello");
}

#[test]
fn truncate_one_over_limit() {
    assert_eq!(truncate_chars("hello!", 5), "hello...");
}

#[test]
fn truncate_devanagari_safe() {
    // "नमस्ते दुनिया" is 13 chars; truncating to 6 never splits a char
    let text = "नमस्ते दुनिया";
    let result = truncate_chars(text, 6);
    assert_eq!(result, "नमस्ते...");
}

#[test]
fn truncate_emoji_safe() {
    let text = "Hello 🌍!";
    assert_eq!(truncate_chars(text, 7), "Hello 🌍...");
}
