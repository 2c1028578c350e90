//! URL Feature Extraction
//!
//! Pure functions: no I/O, no randomness, never fails. Anything URL-shaped
//! (and anything that is not) yields a best-effort `FeatureRecord`.

use std::collections::{HashMap, HashSet};

use once_cell::sync::Lazy;
use regex::Regex;

use super::record::FeatureRecord;
use crate::constants::{SPECIAL_CHARS, SUSPICIOUS_KEYWORDS};

/// Exact dotted quad, digit count only (no octet range check)
static IP_PATTERN: Lazy<Option<Regex>> = Lazy::new(|| {
    match Regex::new(r"^\d{1,3}(?:\.\d{1,3}){3}$") {
        Ok(re) => Some(re),
        Err(e) => {
            log::error!("IP pattern failed to compile, has_ip disabled: {}", e);
            None
        }
    }
});

// ============================================================================
// URL SPLITTING
// ============================================================================

/// Components of a split URL, borrowed from the input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UrlParts<'a> {
    pub scheme: &'a str,
    pub netloc: &'a str,
    pub path: &'a str,
    pub query: &'a str,
    pub fragment: &'a str,
}

fn is_scheme(candidate: &str) -> bool {
    let mut chars = candidate.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

/// Split a URL into `scheme://netloc/path?query#fragment`.
///
/// Generic splitting, no validation: missing parts come back empty.
pub fn split_url(url: &str) -> UrlParts<'_> {
    let (scheme, rest) = match url.find(':') {
        Some(i) if is_scheme(&url[..i]) => (&url[..i], &url[i + 1..]),
        _ => ("", url),
    };

    let (netloc, rest) = match rest.strip_prefix("//") {
        Some(after) => {
            let end = after
                .find(|c: char| matches!(c, '/' | '?' | '#'))
                .unwrap_or(after.len());
            (&after[..end], &after[end..])
        }
        None => ("", rest),
    };

    let (rest, fragment) = rest.split_once('#').unwrap_or((rest, ""));
    let (path, query) = rest.split_once('?').unwrap_or((rest, ""));

    UrlParts { scheme, netloc, path, query, fragment }
}

// ============================================================================
// PRIMITIVES
// ============================================================================

/// Shannon entropy (base 2) over the characters of `text`
pub fn shannon_entropy(text: &str) -> f64 {
    let mut counts: HashMap<char, usize> = HashMap::new();
    let mut total = 0usize;
    for c in text.chars() {
        *counts.entry(c).or_insert(0) += 1;
        total += 1;
    }

    if total == 0 {
        return 0.0;
    }

    let length = total as f64;
    counts
        .values()
        .map(|&count| {
            let p = count as f64 / length;
            -p * p.log2()
        })
        .sum()
}

/// True when the host is exactly four dot-separated 1–3 digit groups
pub fn is_ip_host(netloc: &str) -> bool {
    IP_PATTERN.as_ref().is_some_and(|re| re.is_match(netloc))
}

/// Substring after the last "." of the network location, empty when there is none
pub fn tld_of(netloc: &str) -> &str {
    netloc.rsplit_once('.').map(|(_, tld)| tld).unwrap_or("")
}

/// Distinct query keys; bare keys count, repeats and empty keys do not
pub fn count_query_keys(query: &str) -> usize {
    url::form_urlencoded::parse(query.as_bytes())
        .map(|(key, _)| key)
        .filter(|key| !key.is_empty())
        .collect::<HashSet<_>>()
        .len()
}

/// Number of suspicious keywords contained in `lowered`
pub fn count_keywords(lowered: &str) -> usize {
    SUSPICIOUS_KEYWORDS
        .iter()
        .filter(|keyword| lowered.contains(*keyword))
        .count()
}

// ============================================================================
// EXTRACTION
// ============================================================================

/// Extract the feature record for one URL
pub fn extract_features(url: &str) -> FeatureRecord {
    let lowered = url.to_lowercase();
    let parts = split_url(&lowered);
    let domain = parts.netloc;

    FeatureRecord {
        url: url.to_string(),
        domain: domain.to_string(),
        tld: tld_of(domain).to_string(),
        has_ip: is_ip_host(domain) as u8,
        num_subdomains: domain.matches('.').count(),
        url_length: url.chars().count(),
        num_params: count_query_keys(parts.query),
        contains_keywords: count_keywords(&lowered),
        entropy: shannon_entropy(url),
        path_length: parts.path.split('/').filter(|s| !s.is_empty()).count(),
        special_chars: url.chars().filter(|c| SPECIAL_CHARS.contains(c)).count(),
        is_https: (parts.scheme == "https") as u8,
    }
}

// ============================================================================
// TESTS
// ============================================================================
