use serde::{Deserialize, Serialize};
use crate::logic::features::{FeatureRecord, FEATURE_VERSION};
use crate::logic::features::layout::layout_hash;

/// One labeled input row: `{"url": "...", "label": 0|1}`
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct LabeledUrl {
    #[serde(default)]
    pub url: Option<String>,
    pub label: i64,
}

/// One exported training row
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DatasetRecord {
    // Feature contract
    pub feature_version: u8,
    pub layout_hash: u32,

    #[serde(flatten)]
    pub features: FeatureRecord,

    /// 0 = benign, 1 = malicious
    pub label: u8,
}

impl DatasetRecord {
    pub fn new(features: FeatureRecord, label: u8) -> Self {
        Self {
            feature_version: FEATURE_VERSION,
            layout_hash: layout_hash(),
            features,
            label,
        }
    }
}
