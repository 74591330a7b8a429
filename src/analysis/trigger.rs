// Trigger-phrase classifier.
//
// A fixed ordered list of trigger phrases; each phrase present in the
// case-folded input adds a fixed increment. Presence is checked once per
// phrase ("does the text contain it"), never counted per occurrence.

use super::traits::Analyzer;
use super::verdict::Verdict;

/// The trigger phrases, in check order.
pub const TRIGGER_PHRASES: [&str; 7] = [
    "urgent",
    "verify",
    "suspended",
    "lottery",
    "prince",
    "wire money",
    "click link",
];

/// Score added for each trigger phrase present.
pub const TRIGGER_WEIGHT: u32 = 20;

/// Classify a message by trigger-phrase presence.
///
/// Deterministic and side-effect-free. Total over arbitrary input: a
/// text with no triggers (including the empty string) yields a Low Risk
/// verdict with score 0. The score is clamped to 100.
pub fn classify(text: &str) -> Verdict {
    let lowered = text.to_lowercase();
    let hits = TRIGGER_PHRASES
        .iter()
        .filter(|phrase| lowered.contains(*phrase))
        .count() as u32;
    Verdict::from_score((hits * TRIGGER_WEIGHT).min(100))
}

/// The trigger engine behind the Analyzer seam.
pub struct TriggerAnalyzer;

impl Analyzer for TriggerAnalyzer {
    fn name(&self) -> &'static str {
        "trigger"
    }

    fn analyze(&self, text: &str) -> Verdict {
        classify(text)
    }
}
