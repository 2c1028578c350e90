//! Linear (Logistic) Model Backend
//!
//! A JSON artifact with one weight per named feature column:
//!
//! ```json
//! {
//!   "name": "url_lr",
//!   "weights": { "has_ip": 2.1, "entropy": 0.4 },
//!   "bias": -3.0,
//!   "threshold": 0.5
//! }
//! ```
//!
//! An optional `"layout": { "feature_version", "layout_hash" }` records the
//! dataset layout the weights were fitted on.
//! Columns not listed weigh zero. Unknown column names and a `layout` other
//! than the current one are rejected at load.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::inference::{check_declared_layout, ArtifactLayout, ModelError, ModelMetadata, UrlModel};
use crate::constants::DEFAULT_MODEL_NAME;
use crate::logic::features::layout::feature_index;
use crate::logic::features::{FeatureRow, FEATURE_COUNT};

fn default_threshold() -> f64 {
    0.5
}

/// On-disk shape of a linear model
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinearModelSpec {
    #[serde(default)]
    pub name: Option<String>,
    pub weights: BTreeMap<String, f64>,
    pub bias: f64,
    /// Positive-class probability at or above which the label is 1
    #[serde(default = "default_threshold")]
    pub threshold: f64,
    #[serde(default)]
    pub layout: Option<ArtifactLayout>,
}

pub struct LinearModel {
    weights: [f64; FEATURE_COUNT],
    bias: f64,
    threshold: f64,
    metadata: ModelMetadata,
}

impl LinearModel {
    pub fn load(path: &Path) -> Result<Self, ModelError> {
        let text = fs::read_to_string(path)?;
        let spec: LinearModelSpec = serde_json::from_str(&text)?;
        Self::from_spec(spec, &path.display().to_string())
    }

    pub fn from_spec(spec: LinearModelSpec, model_path: &str) -> Result<Self, ModelError> {
        check_declared_layout(spec.layout, model_path)?;

        if !(0.0..=1.0).contains(&spec.threshold) {
            return Err(ModelError::Load(format!("threshold {} outside [0, 1]", spec.threshold)));
        }

        let mut weights = [0.0; FEATURE_COUNT];
        for (column, weight) in &spec.weights {
            let index = feature_index(column)
                .ok_or_else(|| ModelError::Load(format!("unknown feature column: {}", column)))?;
            weights[index] = *weight;
        }

        let name = spec.name.unwrap_or_else(|| DEFAULT_MODEL_NAME.to_string());
        Ok(Self {
            weights,
            bias: spec.bias,
            threshold: spec.threshold,
            metadata: ModelMetadata::new(name, "linear", model_path).with_layout(spec.layout),
        })
    }

    fn positive_probability(&self, row: &FeatureRow) -> f64 {
        let z = self
            .weights
            .iter()
            .zip(row.values.iter())
            .fold(self.bias, |acc, (w, x)| acc + w * f64::from(*x));
        1.0 / (1.0 + (-z).exp())
    }
}

impl UrlModel for LinearModel {
    fn metadata(&self) -> &ModelMetadata {
        &self.metadata
    }

    fn predict(&self, row: &FeatureRow) -> Result<i64, ModelError> {
        let p = self.positive_probability(row);
        Ok(if p >= self.threshold { 1 } else { 0 })
    }

    fn predict_proba(&self, row: &FeatureRow) -> Result<Vec<f32>, ModelError> {
        let p = self.positive_probability(row);
        Ok(vec![(1.0 - p) as f32, p as f32])
    }
}
