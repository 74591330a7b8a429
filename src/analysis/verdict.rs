// Verdict model — the structured result of analyzing one message.
//
// These types flow through the whole application. They're separate from
// the engines so output and speech can use them without depending on
// either one.

use serde::{Deserialize, Serialize};

/// Risk tier thresholds shared by every engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskTier {
    #[serde(rename = "Low Risk")]
    Low,
    #[serde(rename = "Medium Risk")]
    Medium,
    #[serde(rename = "High Risk")]
    High,
}

impl RiskTier {
    /// Determine the tier from a risk score (0-100).
    pub fn from_score(score: u32) -> Self {
        match score {
            s if s >= 60 => RiskTier::High,
            s if s >= 30 => RiskTier::Medium,
            _ => RiskTier::Low,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskTier::Low => "Low Risk",
            RiskTier::Medium => "Medium Risk",
            RiskTier::High => "High Risk",
        }
    }

    /// The fixed one-sentence summary for this tier.
    pub fn summary(&self) -> &'static str {
        match self {
            RiskTier::High => {
                "This message shows multiple red flags typical of scam messages."
            }
            RiskTier::Medium => {
                "This message has some suspicious elements that warrant caution."
            }
            RiskTier::Low => {
                "This message appears to be legitimate, but always verify with official sources."
            }
        }
    }

    /// The fixed per-tier reason list. Tied to the tier, not to which
    /// signals actually matched.
    pub fn standard_reasons(&self) -> &'static [&'static str] {
        match self {
            RiskTier::High => &[
                "Uses urgency tactics",
                "Requests personal information",
                "Promises unrealistic rewards",
            ],
            RiskTier::Medium => &[
                "Contains unusual requests",
                "May be attempting to create urgency",
            ],
            RiskTier::Low => &["No obvious scam indicators detected"],
        }
    }

    /// Single fallback reason used when an engine reports matched signals
    /// but nothing specific was found.
    pub fn fallback_reason(&self) -> &'static str {
        match self {
            RiskTier::High => "Multiple suspicious indicators detected",
            RiskTier::Medium => "Contains potentially suspicious content",
            RiskTier::Low => "No obvious scam indicators detected",
        }
    }
}

impl std::fmt::Display for RiskTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The result of analyzing one message.
///
/// Constructed fresh per call and handed back to the caller — nothing is
/// retained between analyses. Serializes to the wire shape
/// `{"risk": "...", "score": n, "summary": "...", "reasons": [...]}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Verdict {
    pub risk: RiskTier,
    pub score: u32,
    pub summary: String,
    pub reasons: Vec<String>,
}

impl Verdict {
    /// Build a verdict from a clamped score using the tier's fixed
    /// summary and reason list.
    pub fn from_score(score: u32) -> Self {
        let risk = RiskTier::from_score(score);
        Verdict {
            risk,
            score,
            summary: risk.summary().to_string(),
            reasons: risk
                .standard_reasons()
                .iter()
                .map(|r| (*r).to_string())
                .collect(),
        }
    }

    /// Build a verdict with engine-reported reasons, falling back to the
    /// tier's fallback string when nothing specific matched.
    pub fn with_reasons(score: u32, reasons: Vec<String>) -> Self {
        let risk = RiskTier::from_score(score);
        let reasons = if reasons.is_empty() {
            vec![risk.fallback_reason().to_string()]
        } else {
            reasons
        };
        Verdict {
            risk,
            score,
            summary: risk.summary().to_string(),
            reasons,
        }
    }
}
