//! Inference Contract
//!
//! What the scoring pipeline needs from a trained classifier:
//! a label for a row, and per-class probabilities for the same row.
//! Backends (`onnx`, `linear`) implement `UrlModel`; `load_model` picks one
//! by artifact extension.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::logic::features::{validate_layout, FeatureRow, LayoutMismatchError};

// ============================================================================
// ERROR HANDLING
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("Model not found: {0}")]
    NotFound(String),

    #[error("Unsupported model format: {0}")]
    UnsupportedFormat(String),

    #[error("Failed to load model: {0}")]
    Load(String),

    #[error("Inference failed: {0}")]
    Inference(String),

    #[error("Unexpected model output: {0}")]
    InvalidOutput(String),

    #[error(transparent)]
    Layout(#[from] LayoutMismatchError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Invalid model file: {0}")]
    Json(#[from] serde_json::Error),
}

// ============================================================================
// ARTIFACT LAYOUT
// ============================================================================

/// Feature layout an artifact declares it was trained on.
///
/// Copied from the `feature_version` / `layout_hash` columns of the exported
/// dataset. Linear models embed it under `"layout"`; ONNX models ship it as a
/// `<stem>.layout.json` sidecar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtifactLayout {
    pub feature_version: u8,
    pub layout_hash: u32,
}

impl ArtifactLayout {
    pub fn check(&self) -> Result<(), LayoutMismatchError> {
        validate_layout(self.feature_version, self.layout_hash)
    }

    /// Read `<stem>.layout.json` next to `model_path`, if there is one
    pub fn read_sidecar(model_path: &Path) -> Result<Option<Self>, ModelError> {
        let sidecar = model_path.with_extension("layout.json");
        if !sidecar.exists() {
            return Ok(None);
        }
        let text = fs::read_to_string(&sidecar)?;
        Ok(Some(serde_json::from_str(&text)?))
    }
}

/// Reject an artifact built on another layout; warn when it declares none
pub(crate) fn check_declared_layout(
    layout: Option<ArtifactLayout>,
    model_path: &str,
) -> Result<(), ModelError> {
    match layout {
        Some(layout) => Ok(layout.check()?),
        None => {
            log::warn!("{} declares no feature layout, assuming the current one", model_path);
            Ok(())
        }
    }
}

// ============================================================================
// MODEL METADATA
// ============================================================================

/// Describes a loaded model
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelMetadata {
    pub name: String,
    /// "onnx" or "linear"
    pub backend: String,
    pub model_path: String,
    /// Layout declared by the artifact, already checked against this build
    pub layout: Option<ArtifactLayout>,
    pub loaded_at: chrono::DateTime<chrono::Utc>,
}

impl ModelMetadata {
    pub fn new(name: impl Into<String>, backend: &str, model_path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            backend: backend.to_string(),
            model_path: model_path.into(),
            layout: None,
            loaded_at: chrono::Utc::now(),
        }
    }

    pub fn with_layout(mut self, layout: Option<ArtifactLayout>) -> Self {
        self.layout = layout;
        self
    }
}

// ============================================================================
// MODEL TRAIT
// ============================================================================

/// A trained binary classifier over `FeatureRow`s.
///
/// Implementations are immutable once loaded and shared across requests.
pub trait UrlModel: Send + Sync {
    fn metadata(&self) -> &ModelMetadata;

    /// Predicted class label (expected 0 = benign, 1 = malicious)
    fn predict(&self, row: &FeatureRow) -> Result<i64, ModelError>;

    /// Probability per class, indexed by label
    fn predict_proba(&self, row: &FeatureRow) -> Result<Vec<f32>, ModelError>;

    /// Both outputs at once; backends that compute them together override this.
    fn predict_with_proba(&self, row: &FeatureRow) -> Result<(i64, Vec<f32>), ModelError> {
        Ok((self.predict(row)?, self.predict_proba(row)?))
    }
}

// ============================================================================
// LOADING
// ============================================================================

/// Load a model artifact, choosing the backend by file extension.
pub fn load_model(path: impl AsRef<Path>) -> Result<Arc<dyn UrlModel>, ModelError> {
    let path = path.as_ref();
    log::info!("Loading model from: {}", path.display());

    if !path.exists() {
        return Err(ModelError::NotFound(path.display().to_string()));
    }

    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();

    let model: Arc<dyn UrlModel> = match extension.as_str() {
        "json" => Arc::new(super::linear::LinearModel::load(path)?),
        #[cfg(feature = "onnx")]
        "onnx" => Arc::new(super::onnx::OnnxModel::load(path)?),
        #[cfg(not(feature = "onnx"))]
        "onnx" => {
            return Err(ModelError::UnsupportedFormat(
                "onnx (built without the `onnx` feature)".to_string(),
            ))
        }
        other => return Err(ModelError::UnsupportedFormat(format!(".{}", other))),
    };

    let meta = model.metadata();
    log::info!("Model loaded: {} ({} backend)", meta.name, meta.backend);
    Ok(model)
}

// ============================================================================
// TESTS
// ============================================================================
