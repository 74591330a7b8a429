// Weighted pattern engine.
//
// Scores a message from three signal families: a weighted keyword
// lexicon, suspicious regexes, and text-shape heuristics (stacked
// exclamation marks, capital-letter ratio, urgency words). Greeting
// phrases subtract from the raw total. The raw total is normalized
// against a 50-point scale into the shared 0-100 verdict range, so both
// engines land on the same tier thresholds.

use anyhow::{Context, Result};
use regex_lite::Regex;

use super::traits::Analyzer;
use super::verdict::Verdict;

/// Keyword lexicon with per-keyword weights. Presence is a substring
/// check against the case-folded message; each entry contributes once.
pub const WEIGHTED_KEYWORDS: &[(&str, f64)] = &[
    ("urgent", 3.0),
    ("immediate", 2.5),
    ("act now", 3.5),
    ("limited time", 2.8),
    ("winner", 3.2),
    ("congratulations", 2.7),
    ("lottery", 3.5),
    ("inheritance", 3.0),
    ("prince", 2.8),
    ("million", 2.5),
    ("urgent response", 3.5),
    ("verify account", 3.0),
    ("suspended", 2.8),
    ("click link", 3.2),
    ("wire transfer", 3.0),
    ("gift card", 2.8),
    ("bitcoin", 2.5),
    ("cryptocurrency", 2.3),
    ("urgent wire", 3.8),
    ("confidential", 2.5),
    ("secret", 2.3),
    ("do not tell", 3.0),
    ("western union", 3.5),
    ("moneygram", 3.5),
    ("paypal", 2.0),
    ("account verification", 3.2),
    ("security alert", 3.0),
    ("suspended account", 3.3),
    ("unauthorized access", 2.8),
    ("confirm identity", 3.0),
    ("validate account", 3.0),
];

/// Suspicious regexes with human-readable labels for the reasons list.
/// Each occurrence adds SUSPICIOUS_MATCH_WEIGHT; the all-caps pattern is
/// intentionally case-sensitive.
const SUSPICIOUS_PATTERNS: &[(&str, &str)] = &[
    (
        r"\b\d{3}-\d{2}-\d{4}\b",
        "Contains a social-security-style number",
    ),
    (
        r"\b\d{4}[\s-]?\d{4}[\s-]?\d{4}[\s-]?\d{4}\b",
        "Contains a card-style number",
    ),
    (r"\b[A-Z]{2,}\b", "Contains all-caps words"),
    (r"!{2,}", "Contains stacked exclamation marks"),
    (
        r"\$\d+(?:,\d{3})*(?:\.\d{2})?",
        "Mentions specific dollar amounts",
    ),
    (
        r"(?i)\b\d+\s*(?:million|billion|thousand)\b",
        "Mentions very large sums",
    ),
    (r"(?i)https?://\S+", "Contains a link"),
    (
        r"(?i)\b(?:urgent|immediate|asap)\b.*?\b(?:respond|reply|click)\b",
        "Demands an urgent response",
    ),
    (
        r"(?i)\b(?:click|visit)\b.*\b(?:link|url)\b",
        "Asks to click or visit a link",
    ),
    (
        r"(?i)\b(?:wire|send|transfer)\b.*\b(?:money|funds)\b",
        "Asks for a money transfer",
    ),
];

/// Greeting phrases that discount the raw score, matched against the
/// case-folded message.
const LEGITIMATE_PATTERNS: &[&str] = &[
    r"\bthank you\b",
    r"\bregards\b",
    r"\bbest regards\b",
    r"\bsincerely\b",
    r"\bhello\b",
    r"\bhi\b",
    r"\bhow are you\b",
    r"\bgood morning\b",
    r"\bgood afternoon\b",
    r"\bgood evening\b",
];

/// Standalone urgency words, scored on top of the lexicon.
const URGENCY_WORDS: &[&str] = &["urgent", "immediate", "asap", "hurry", "quick"];

const SUSPICIOUS_MATCH_WEIGHT: f64 = 2.0;
const LEGITIMATE_MATCH_DISCOUNT: f64 = 0.5;
const EXCLAMATION_THRESHOLD: usize = 3;
const EXCLAMATION_WEIGHT: f64 = 0.5;
const CAPS_RATIO_THRESHOLD: f64 = 0.3;
const CAPS_RATIO_WEIGHT: f64 = 5.0;
const URGENCY_WORD_WEIGHT: f64 = 1.5;
/// Raw score that maps to 100 after normalization.
const FULL_SCALE: f64 = 50.0;
/// At most this many reasons are reported.
const MAX_REASONS: usize = 5;

/// The weighted engine behind the Analyzer seam.
pub struct PatternAnalyzer {
    suspicious: Vec<(Regex, &'static str)>,
    legitimate: Vec<Regex>,
}

impl PatternAnalyzer {
    pub fn new() -> Result<Self> {
        let mut suspicious = Vec::with_capacity(SUSPICIOUS_PATTERNS.len());
        for (pattern, label) in SUSPICIOUS_PATTERNS {
            let regex = Regex::new(pattern)
                .with_context(|| format!("invalid suspicious pattern: {pattern}"))?;
            suspicious.push((regex, *label));
        }

        let mut legitimate = Vec::with_capacity(LEGITIMATE_PATTERNS.len());
        for pattern in LEGITIMATE_PATTERNS {
            let regex = Regex::new(pattern)
                .with_context(|| format!("invalid legitimate pattern: {pattern}"))?;
            legitimate.push(regex);
        }

        Ok(Self {
            suspicious,
            legitimate,
        })
    }
}

impl Analyzer for PatternAnalyzer {
    fn name(&self) -> &'static str {
        "pattern"
    }

    fn analyze(&self, text: &str) -> Verdict {
        let lowered = text.to_lowercase();
        let mut raw = 0.0;
        let mut reasons = Vec::new();

        for (keyword, weight) in WEIGHTED_KEYWORDS {
            if lowered.contains(keyword) {
                raw += weight;
                reasons.push(format!("Contains suspicious keyword: '{keyword}'"));
            }
        }

        for (regex, label) in &self.suspicious {
            let matches = regex.find_iter(text).count();
            if matches > 0 {
                raw += matches as f64 * SUSPICIOUS_MATCH_WEIGHT;
                reasons.push((*label).to_string());
            }
        }

        for regex in &self.legitimate {
            raw -= regex.find_iter(&lowered).count() as f64 * LEGITIMATE_MATCH_DISCOUNT;
        }

        let exclamations = text.matches('!').count();
        if exclamations > EXCLAMATION_THRESHOLD {
            raw += exclamations as f64 * EXCLAMATION_WEIGHT;
            reasons.push(format!("Excessive exclamation marks ({exclamations})"));
        }

        let caps = caps_ratio(text);
        if caps > CAPS_RATIO_THRESHOLD {
            raw += caps * CAPS_RATIO_WEIGHT;
            reasons.push(format!(
                "High share of capital letters ({:.0}%)",
                caps * 100.0
            ));
        }

        let urgency = URGENCY_WORDS
            .iter()
            .filter(|word| lowered.contains(*word))
            .count();
        if urgency > 0 {
            raw += urgency as f64 * URGENCY_WORD_WEIGHT;
            reasons.push(format!("Contains {urgency} urgency indicators"));
        }

        reasons.truncate(MAX_REASONS);
        Verdict::with_reasons(normalize(raw), reasons)
    }
}

/// Map a raw signal total onto the 0-100 verdict range. Greeting
/// discounts can push the raw total negative; the result floors at 0.
fn normalize(raw: f64) -> u32 {
    ((raw / FULL_SCALE) * 100.0).clamp(0.0, 100.0).round() as u32
}

/// Share of characters that are uppercase, over all characters.
fn caps_ratio(text: &str) -> f64 {
    let total = text.chars().count().max(1);
    let upper = text.chars().filter(|c| c.is_uppercase()).count();
    upper as f64 / total as f64
}
