//! Heuristic Rules & Weights
//!
//! Constants only. Rule evaluation lives in `simple` and `advanced`.

// ============================================================================
// SCORE BOUNDS & THRESHOLDS
// ============================================================================

/// Scores are clamped to this ceiling
pub const MAX_SCORE: u8 = 100;

/// Simple variant: suspicious when score is strictly above this
pub const SIMPLE_SUSPICIOUS_ABOVE: u8 = 50;

/// Advanced variant: suspicious when score is at or above this
pub const ADVANCED_SUSPICIOUS_FROM: u8 = 50;

/// URLs longer than this many characters are penalized
pub const LONG_URL_CHARS: usize = 120;

/// More "=" than this counts as parameter stuffing
pub const MAX_EQUALS_SIGNS: usize = 3;

// ============================================================================
// SIMPLE VARIANT
// ============================================================================

/// Literal substrings, matched anywhere in the lower-cased URL;
/// each hit adds `SIMPLE_PATTERN_WEIGHT`
pub const SIMPLE_PATTERNS: &[&str] = &[
    ".ru", ".cn", "login-", "verify-", "secure-", "paypal-", "bank", "free-", "-gift", "-bonus",
];

pub const SIMPLE_PATTERN_WEIGHT: u32 = 10;
pub const SIMPLE_LONG_URL_WEIGHT: u32 = 20;
pub const SIMPLE_PARAMS_WEIGHT: u32 = 15;

// ============================================================================
// ADVANCED VARIANT
// ============================================================================

pub const RAW_IP_WEIGHT: u32 = 35;
pub const BAD_TLD_WEIGHT: u32 = 20;
pub const KEYWORD_WEIGHT: u32 = 10;
pub const ADVANCED_PARAMS_WEIGHT: u32 = 15;
pub const ADVANCED_LONG_URL_WEIGHT: u32 = 15;
pub const ENCODING_WEIGHT: u32 = 10;
pub const NESTED_SUBDOMAIN_WEIGHT: u32 = 15;

/// Percent-encoded "/" and "=" used to hide path and query structure
pub const OBFUSCATED_ENCODINGS: &[&str] = &["%2f", "%3d"];

/// "." count in the host at which subdomain nesting is penalized
pub const NESTED_SUBDOMAIN_DOTS: usize = 3;
