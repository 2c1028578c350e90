//! Features Module - URL Feature Extraction Engine
//!
//! Turns a raw URL string into a `FeatureRecord`, and a record into the
//! numeric `FeatureRow` a model consumes.
//!
//! - `layout` - numeric column order, version and layout hash
//! - `record` - `FeatureRecord` and `FeatureRow`
//! - `extract` - URL splitting and feature derivation

pub mod layout;
pub mod record;
pub mod extract;

#[cfg(test)]
mod tests;

// Re-export common types
pub use layout::{layout_hash, validate_layout, FEATURE_COUNT, FEATURE_LAYOUT, FEATURE_VERSION, LayoutMismatchError};
pub use record::{FeatureRecord, FeatureRow};
pub use extract::{extract_features, shannon_entropy, split_url, UrlParts};
