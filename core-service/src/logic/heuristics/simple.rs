//! Simple Heuristic
//!
//! Pattern hits, length and parameter stuffing on the raw URL text.

use super::rules::{
    LONG_URL_CHARS, MAX_EQUALS_SIGNS, SIMPLE_LONG_URL_WEIGHT, SIMPLE_PARAMS_WEIGHT,
    SIMPLE_PATTERNS, SIMPLE_PATTERN_WEIGHT,
};
use super::types::{HeuristicResult, RiskLevel, ScoreCard};

/// Score a URL with the simple rule set
pub fn simple_heuristic(url: &str) -> HeuristicResult {
    let url = url.to_lowercase();
    let mut card = ScoreCard::new();

    for pattern in SIMPLE_PATTERNS {
        if url.contains(pattern) {
            card.add(SIMPLE_PATTERN_WEIGHT, format!("Suspicious pattern: {}", pattern));
        }
    }

    if url.chars().count() > LONG_URL_CHARS {
        card.add(SIMPLE_LONG_URL_WEIGHT, format!("URL too long (>{} characters)", LONG_URL_CHARS));
    }

    if url.matches('=').count() > MAX_EQUALS_SIGNS {
        card.add(SIMPLE_PARAMS_WEIGHT, "Too many URL parameters");
    }

    let result = card.finish(RiskLevel::for_simple);
    log::debug!("simple heuristic: {} -> {} ({})", url, result.score, result.classification);
    result
}
