//! Central Configuration Constants
//!
//! Single source of truth for scoring defaults.
//! Keyword and TLD lists are shared by the feature extractor and the heuristics.

/// Keywords commonly found in phishing URLs
pub const SUSPICIOUS_KEYWORDS: &[&str] = &[
    "login", "verify", "secure", "update", "account",
    "paypal", "bank", "confirm", "free", "gift", "bonus",
];

/// TLDs with a high share of abusive registrations
pub const BAD_TLDS: &[&str] = &["ru", "cn", "tk", "ml", "ga", "cf", "gq"];

/// Characters counted by the `special_chars` feature
pub const SPECIAL_CHARS: &[char] = &['@', '%', '='];

/// Default model artifact location (relative to the working directory)
pub const DEFAULT_MODEL_PATH: &str = "ml/model.onnx";

/// Default model name reported when a model is loaded
pub const DEFAULT_MODEL_NAME: &str = "url_malware_classifier";

/// App version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// App name
pub const APP_NAME: &str = "URL Risk Scanner";

// ============================================
// Helper functions to read from env with fallback
// ============================================

/// Get model artifact path from environment or use default
pub fn get_model_path() -> String {
    std::env::var("URLRISK_MODEL_PATH")
        .unwrap_or_else(|_| DEFAULT_MODEL_PATH.to_string())
}
