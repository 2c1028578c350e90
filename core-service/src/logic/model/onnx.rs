//! ONNX Runtime Backend
//!
//! Runs classifiers exported from the training pipeline (e.g. a random forest
//! converted with `zipmap` disabled). Expected graph:
//! - input 0: `[1, FEATURE_COUNT]` f32 in `FEATURE_LAYOUT` order
//! - output 0: int64 label
//! - output 1: `[1, n_classes]` f32 probabilities
//!
//! The training layout comes from a `<stem>.layout.json` sidecar when present.

use std::path::Path;

use ndarray::Array2;
use parking_lot::Mutex;
use ort::session::{Session, builder::GraphOptimizationLevel};
use ort::value::Value;

use super::inference::{check_declared_layout, ArtifactLayout, ModelError, ModelMetadata, UrlModel};
use crate::constants::DEFAULT_MODEL_NAME;
use crate::logic::features::{FeatureRow, FEATURE_COUNT};

pub struct OnnxModel {
    /// `run` needs exclusive access to the session
    session: Mutex<Session>,
    label_output: String,
    proba_output: String,
    metadata: ModelMetadata,
}

impl OnnxModel {
    /// Load ONNX model from file
    pub fn load(path: &Path) -> Result<Self, ModelError> {
        if !path.exists() {
            return Err(ModelError::NotFound(path.display().to_string()));
        }

        let layout = ArtifactLayout::read_sidecar(path)?;
        let model_path = path.display().to_string();
        check_declared_layout(layout, &model_path)?;

        let session = Session::builder()
            .map_err(|e| ModelError::Load(format!("Failed to create session builder: {}", e)))?
            .with_optimization_level(GraphOptimizationLevel::Level3)
            .map_err(|e| ModelError::Load(format!("Failed to set optimization: {}", e)))?
            .commit_from_file(path)
            .map_err(|e| ModelError::Load(format!("Failed to load model: {}", e)))?;

        let metadata = ModelMetadata::new(DEFAULT_MODEL_NAME, "onnx", model_path).with_layout(layout);
        Self::from_session(session, metadata)
    }

    fn from_session(session: Session, metadata: ModelMetadata) -> Result<Self, ModelError> {
        let outputs: Vec<String> = session.outputs.iter().map(|o| o.name.clone()).collect();
        let (label_output, proba_output) = match outputs.as_slice() {
            [label, proba, ..] => (label.clone(), proba.clone()),
            _ => {
                return Err(ModelError::Load(format!(
                    "expected label and probability outputs, found {}",
                    outputs.len()
                )))
            }
        };

        log::debug!("ONNX outputs: label={}, probabilities={}", label_output, proba_output);

        Ok(Self {
            session: Mutex::new(session),
            label_output,
            proba_output,
            metadata,
        })
    }

    fn run(&self, row: &FeatureRow) -> Result<(i64, Vec<f32>), ModelError> {
        let input_array = Array2::<f32>::from_shape_vec((1, FEATURE_COUNT), row.values.to_vec())
            .map_err(|e| ModelError::Inference(format!("Array error: {}", e)))?;

        let input_tensor = Value::from_array(input_array)
            .map_err(|e| ModelError::Inference(format!("Tensor error: {}", e)))?;

        let mut session = self.session.lock();
        let outputs = session
            .run(ort::inputs![input_tensor])
            .map_err(|e| ModelError::Inference(e.to_string()))?;

        let label_value = outputs
            .get(&self.label_output)
            .ok_or_else(|| ModelError::InvalidOutput(format!("missing output {}", self.label_output)))?;
        let (_, labels) = label_value
            .try_extract_tensor::<i64>()
            .map_err(|e| ModelError::InvalidOutput(format!("label: {}", e)))?;
        let label = labels
            .first()
            .copied()
            .ok_or_else(|| ModelError::InvalidOutput("empty label tensor".to_string()))?;

        let proba_value = outputs
            .get(&self.proba_output)
            .ok_or_else(|| ModelError::InvalidOutput(format!("missing output {}", self.proba_output)))?;
        let (_, probabilities) = proba_value
            .try_extract_tensor::<f32>()
            .map_err(|e| ModelError::InvalidOutput(format!("probabilities: {}", e)))?;

        Ok((label, probabilities.to_vec()))
    }
}

impl UrlModel for OnnxModel {
    fn metadata(&self) -> &ModelMetadata {
        &self.metadata
    }

    fn predict(&self, row: &FeatureRow) -> Result<i64, ModelError> {
        self.run(row).map(|(label, _)| label)
    }

    fn predict_proba(&self, row: &FeatureRow) -> Result<Vec<f32>, ModelError> {
        self.run(row).map(|(_, probabilities)| probabilities)
    }

    fn predict_with_proba(&self, row: &FeatureRow) -> Result<(i64, Vec<f32>), ModelError> {
        self.run(row)
    }
}
