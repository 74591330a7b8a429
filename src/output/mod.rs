// Output formatting — terminal display and the spoken report.

pub mod terminal;

use crate::analysis::verdict::Verdict;

/// Truncate a string to at most `max_chars` characters, appending "..."
/// when truncated. Counts characters rather than bytes, so multi-byte
/// input (emoji, Devanagari) never splits mid-character.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    let char_count = text.chars().count();
    if char_count <= max_chars {
        text.to_string()
    } else {
        let truncated: String = text.chars().take(max_chars).collect();
        format!("{truncated}...")
    }
}

/// The sentence handed to speech output after an analysis.
pub fn spoken_report(verdict: &Verdict) -> String {
    format!(
        "Analysis complete. Risk level: {}. {}",
        verdict.risk, verdict.summary
    )
}
