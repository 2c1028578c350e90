//! Heuristic Types
//!
//! Data structures shared by both rule sets. No rule logic here.

use serde::{Deserialize, Serialize};
use super::rules::{ADVANCED_SUSPICIOUS_FROM, MAX_SCORE, SIMPLE_SUSPICIOUS_ABOVE};

// ============================================================================
// RISK LEVEL
// ============================================================================

/// Categorical verdict of a heuristic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    #[serde(rename = "suspicious")]
    Suspicious,
    #[serde(rename = "probably safe")]
    ProbablySafe,
}

impl RiskLevel {
    /// Simple variant: strictly greater than the threshold
    pub fn for_simple(score: u8) -> Self {
        if score > SIMPLE_SUSPICIOUS_ABOVE {
            RiskLevel::Suspicious
        } else {
            RiskLevel::ProbablySafe
        }
    }

    /// Advanced variant: threshold inclusive
    pub fn for_advanced(score: u8) -> Self {
        if score >= ADVANCED_SUSPICIOUS_FROM {
            RiskLevel::Suspicious
        } else {
            RiskLevel::ProbablySafe
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Suspicious => "suspicious",
            RiskLevel::ProbablySafe => "probably safe",
        }
    }

    pub fn is_suspicious(&self) -> bool {
        matches!(self, RiskLevel::Suspicious)
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// HEURISTIC RESULT
// ============================================================================

/// Outcome of one heuristic rule set
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeuristicResult {
    /// Accumulated score, clamped to 0-100
    pub score: u8,
    pub classification: RiskLevel,
    /// One entry per triggered rule, in evaluation order
    pub reasons: Vec<String>,
}

// ============================================================================
// SCORE CARD
// ============================================================================

/// Accumulates rule contributions before clamping
#[derive(Debug, Default)]
pub(crate) struct ScoreCard {
    raw: u32,
    reasons: Vec<String>,
}

impl ScoreCard {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn add(&mut self, weight: u32, reason: impl Into<String>) {
        self.raw += weight;
        self.reasons.push(reason.into());
    }

    /// Clamped score
    pub(crate) fn score(&self) -> u8 {
        self.raw.min(MAX_SCORE as u32) as u8
    }

    pub(crate) fn finish(self, classify: fn(u8) -> RiskLevel) -> HeuristicResult {
        let score = self.score();
        HeuristicResult {
            score,
            classification: classify(score),
            reasons: self.reasons,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_asymmetry_at_fifty() {
        assert_eq!(RiskLevel::for_simple(50), RiskLevel::ProbablySafe);
        assert_eq!(RiskLevel::for_advanced(50), RiskLevel::Suspicious);

        assert_eq!(RiskLevel::for_simple(51), RiskLevel::Suspicious);
        assert_eq!(RiskLevel::for_advanced(49), RiskLevel::ProbablySafe);
    }

    #[test]
    fn test_score_card_clamps() {
        let mut card = ScoreCard::new();
        for i in 0..12 {
            card.add(10, format!("rule {}", i));
        }
        let result = card.finish(RiskLevel::for_simple);
        assert_eq!(result.score, 100);
        assert_eq!(result.reasons.len(), 12);
        assert!(result.classification.is_suspicious());
    }

    #[test]
    fn test_risk_level_serialization() {
        let json = serde_json::to_string(&RiskLevel::ProbablySafe).unwrap();
        assert_eq!(json, "\"probably safe\"");
        assert_eq!(RiskLevel::Suspicious.to_string(), "suspicious");
    }
}
