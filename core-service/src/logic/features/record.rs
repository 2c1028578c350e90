//! Feature Record & Feature Row
//!
//! `FeatureRecord` is the full named summary of one URL (text + numeric fields).
//! `FeatureRow` is its numeric projection in `FEATURE_LAYOUT` order, the only
//! shape a model ever sees.

use serde::{Deserialize, Serialize};
use super::layout::{feature_index, FEATURE_COUNT, FEATURE_LAYOUT};

// ============================================================================
// FEATURE RECORD
// ============================================================================

/// Named features derived from a single URL
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureRecord {
    pub url: String,
    pub domain: String,
    pub tld: String,
    pub has_ip: u8,
    pub num_subdomains: usize,
    pub url_length: usize,
    pub num_params: usize,
    pub contains_keywords: usize,
    pub entropy: f64,
    pub path_length: usize,
    pub special_chars: usize,
    pub is_https: u8,
}

impl FeatureRecord {
    /// Look up a numeric field by name. Text fields and unknown names yield `None`.
    pub fn numeric(&self, name: &str) -> Option<f64> {
        let value = match name {
            "has_ip" => self.has_ip as f64,
            "num_subdomains" => self.num_subdomains as f64,
            "url_length" => self.url_length as f64,
            "num_params" => self.num_params as f64,
            "contains_keywords" => self.contains_keywords as f64,
            "entropy" => self.entropy,
            "path_length" => self.path_length as f64,
            "special_chars" => self.special_chars as f64,
            "is_https" => self.is_https as f64,
            _ => return None,
        };
        Some(value)
    }

    /// Project to the numeric model row, dropping `url`, `domain` and `tld`.
    pub fn to_row(&self) -> FeatureRow {
        let mut row = FeatureRow::new();
        for name in FEATURE_LAYOUT {
            if let Some(value) = self.numeric(name) {
                row.set_by_name(name, value as f32);
            }
        }
        row
    }
}

// ============================================================================
// FEATURE ROW
// ============================================================================

/// Numeric values in `FEATURE_LAYOUT` order
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FeatureRow {
    pub values: [f32; FEATURE_COUNT],
}

impl FeatureRow {
    /// Zeroed row
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_by_name(&self, name: &str) -> Option<f32> {
        feature_index(name).map(|i| self.values[i])
    }

    /// Set feature by name, returns false for names outside the layout
    pub fn set_by_name(&mut self, name: &str, value: f32) -> bool {
        match feature_index(name) {
            Some(index) => {
                self.values[index] = value;
                true
            }
            None => false,
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> FeatureRecord {
        FeatureRecord {
            url: "http://a.example.com/x".to_string(),
            domain: "a.example.com".to_string(),
            tld: "com".to_string(),
            has_ip: 0,
            num_subdomains: 2,
            url_length: 22,
            num_params: 0,
            contains_keywords: 0,
            entropy: 3.5,
            path_length: 1,
            special_chars: 0,
            is_https: 0,
        }
    }

    #[test]
    fn test_numeric_lookup() {
        let record = sample_record();
        assert_eq!(record.numeric("num_subdomains"), Some(2.0));
        assert_eq!(record.numeric("entropy"), Some(3.5));
        assert_eq!(record.numeric("url"), None);
        assert_eq!(record.numeric("tld"), None);
    }

    #[test]
    fn test_projection_follows_layout() {
        let row = sample_record().to_row();
        assert_eq!(row.get_by_name("num_subdomains"), Some(2.0));
        assert_eq!(row.get_by_name("url_length"), Some(22.0));
        assert_eq!(row.get_by_name("path_length"), Some(1.0));
        assert_eq!(row.get_by_name("domain"), None);
        assert_eq!(row.get_by_name("has_ip"), Some(0.0));
    }

    #[test]
    fn test_set_by_name_rejects_unknown() {
        let mut row = FeatureRow::new();
        assert!(row.set_by_name("is_https", 1.0));
        assert!(!row.set_by_name("tld", 1.0));
        assert_eq!(row.get_by_name("is_https"), Some(1.0));
    }
}
