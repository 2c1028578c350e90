//! Advanced Heuristic
//!
//! Structural checks on the split URL: host shape, TLD, keywords,
//! parameter stuffing, length, encoding tricks and subdomain nesting.

use super::rules::{
    ADVANCED_LONG_URL_WEIGHT, ADVANCED_PARAMS_WEIGHT, BAD_TLD_WEIGHT, ENCODING_WEIGHT,
    KEYWORD_WEIGHT, LONG_URL_CHARS, MAX_EQUALS_SIGNS, NESTED_SUBDOMAIN_DOTS,
    NESTED_SUBDOMAIN_WEIGHT, OBFUSCATED_ENCODINGS, RAW_IP_WEIGHT,
};
use super::types::{HeuristicResult, RiskLevel, ScoreCard};
use crate::constants::{BAD_TLDS, SUSPICIOUS_KEYWORDS};
use crate::logic::features::extract::{is_ip_host, split_url, tld_of};

/// Score a URL with the advanced rule set
pub fn advanced_heuristic(url: &str) -> HeuristicResult {
    let url = url.to_lowercase();
    let host = split_url(&url).netloc;
    let raw_ip = is_ip_host(host);
    let mut card = ScoreCard::new();

    if raw_ip {
        card.add(RAW_IP_WEIGHT, "URL uses raw IP address");
    }

    let tld = tld_of(host);
    if BAD_TLDS.contains(&tld) {
        card.add(BAD_TLD_WEIGHT, format!("Suspicious TLD: .{}", tld));
    }

    for keyword in SUSPICIOUS_KEYWORDS {
        if url.contains(keyword) {
            card.add(KEYWORD_WEIGHT, format!("Keyword detected: {}", keyword));
        }
    }

    if url.matches('=').count() > MAX_EQUALS_SIGNS {
        card.add(ADVANCED_PARAMS_WEIGHT, "Too many URL parameters");
    }

    if url.chars().count() > LONG_URL_CHARS {
        card.add(ADVANCED_LONG_URL_WEIGHT, format!("URL too long (>{} characters)", LONG_URL_CHARS));
    }

    if OBFUSCATED_ENCODINGS.iter().any(|enc| url.contains(enc)) {
        card.add(ENCODING_WEIGHT, "URL encoding obfuscation detected");
    }

    // Dots of a dotted-quad host are octet separators, not subdomains
    if !raw_ip && host.matches('.').count() >= NESTED_SUBDOMAIN_DOTS {
        card.add(NESTED_SUBDOMAIN_WEIGHT, "Multiple nested subdomains");
    }

    let result = card.finish(RiskLevel::for_advanced);
    log::debug!(
        "advanced heuristic: {} -> {} ({}, {} reasons)",
        url,
        result.score,
        result.classification,
        result.reasons.len()
    );
    result
}
