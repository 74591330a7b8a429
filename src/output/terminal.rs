// Colored terminal output for verdicts and batch tables.
//
// This module handles all terminal-specific formatting: colors, tables,
// tier tallies. The main.rs display calls delegate here.

use colored::Colorize;

use crate::analysis::verdict::{RiskTier, Verdict};

/// Display a single verdict in detail.
pub fn display_verdict(message: &str, verdict: &Verdict) {
    println!("\n{}", "=== Analysis ===".bold());

    let preview = super::truncate_chars(message.trim(), 120);
    println!("  Message: \"{}\"", preview.dimmed());
    println!("  Risk: {}", colorize_tier(verdict.risk));
    println!("  Score: {}/100", verdict.score);
    println!("  {}", verdict.summary);

    println!("\n  Reasons:");
    for (i, reason) in verdict.reasons.iter().enumerate() {
        println!("    {}. {reason}", i + 1);
    }
    println!();
}

/// Display a ranked batch table, highest scores first, with tier tallies.
pub fn display_batch(results: &[(String, Verdict)]) {
    if results.is_empty() {
        println!("No messages analyzed.");
        return;
    }

    let mut ranked: Vec<&(String, Verdict)> = results.iter().collect();
    ranked.sort_by(|a, b| b.1.score.cmp(&a.1.score));

    println!(
        "\n{}",
        format!("=== Batch Report ({} messages) ===", results.len()).bold()
    );
    println!();

    // Header
    println!(
        "  {:>4}  {:>5}  {:<12}  {}",
        "Rank".dimmed(),
        "Score".dimmed(),
        "Risk".dimmed(),
        "Message".dimmed(),
    );
    println!("  {}", "-".repeat(78).dimmed());

    for (i, (message, verdict)) in ranked.iter().enumerate() {
        let preview = super::truncate_chars(message.trim(), 48);
        println!(
            "  {:>4}. {:>5}  {:<12}  {}",
            i + 1,
            verdict.score,
            colorize_tier(verdict.risk),
            preview.dimmed(),
        );
    }

    println!();

    // Summary
    let high = tally(results, RiskTier::High);
    let medium = tally(results, RiskTier::Medium);
    let low = tally(results, RiskTier::Low);

    if high > 0 {
        println!("  {} {} high risk", "!!".red().bold(), high);
    }
    if medium > 0 {
        println!("  {} {} medium risk", "~".yellow(), medium);
    }
    if low > 0 {
        println!("  {} {} low risk", "-".green(), low);
    }
}

fn tally(results: &[(String, Verdict)], tier: RiskTier) -> usize {
    results.iter().filter(|(_, v)| v.risk == tier).count()
}

/// Colorize a risk tier label.
fn colorize_tier(tier: RiskTier) -> colored::ColoredString {
    match tier {
        RiskTier::High => tier.as_str().red().bold(),
        RiskTier::Medium => tier.as_str().yellow(),
        RiskTier::Low => tier.as_str().green(),
    }
}
