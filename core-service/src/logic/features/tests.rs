//! Cross-module tests: extraction feeding the numeric projection.

use super::{extract_features, FeatureRow, FEATURE_LAYOUT};

#[test]
fn test_extracted_row_matches_record_by_name() {
    let record = extract_features("http://192.168.0.10/secure/update?a=1&b=2&a=3");
    let row = record.to_row();

    for name in FEATURE_LAYOUT {
        let expected = record.numeric(name).map(|v| v as f32);
        assert_eq!(row.get_by_name(name), expected, "column {}", name);
    }
}

#[test]
fn test_row_values_for_ip_url() {
    let row = extract_features("http://192.168.0.10/secure/update?a=1&b=2&a=3").to_row();

    assert_eq!(row.get_by_name("has_ip"), Some(1.0));
    assert_eq!(row.get_by_name("num_params"), Some(2.0));
    assert_eq!(row.get_by_name("contains_keywords"), Some(2.0));
    assert_eq!(row.get_by_name("path_length"), Some(2.0));
    assert_eq!(row.get_by_name("special_chars"), Some(3.0));
    assert_eq!(row.get_by_name("is_https"), Some(0.0));
}

#[test]
fn test_extraction_is_deterministic() {
    let url = "https://free-gift.example.tk/bonus?x=%2f";
    let a = extract_features(url);
    let b = extract_features(url);
    assert_eq!(a, b);
    assert_eq!(a.to_row(), b.to_row());
}

#[test]
fn test_empty_url_row_is_zeroed() {
    let row = extract_features("").to_row();
    assert_eq!(row, FeatureRow::new());
}
