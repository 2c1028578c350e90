//! Classifier Adapter
//!
//! URL → features → numeric row → injected model → `ClassifierResult`.
//! Never fails: a missing model or any model fault becomes a degraded result
//! (label -1, probability 0.0) next to the still-valid heuristic results.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::inference::{ModelError, UrlModel};
use crate::logic::features::extract_features;

/// Label reported when no prediction could be made
pub const UNAVAILABLE_LABEL: i8 = -1;

/// Classification text when no model is loaded
pub const MODEL_UNAVAILABLE: &str = "model unavailable";

// ============================================================================
// OUTCOME
// ============================================================================

/// Normalized model answer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prediction {
    /// 0 = benign, 1 = malicious
    pub label: u8,
    /// Probability of the malicious class, in [0, 1]
    pub probability: f64,
}

/// What the adapter produced for one URL
#[derive(Debug, Clone, PartialEq)]
pub enum ClassifierOutcome {
    Scored(Prediction),
    /// No model was injected
    Unavailable,
    /// The model was present but could not score this URL
    Failed(String),
}

// ============================================================================
// RESULT
// ============================================================================

/// Flat, serializable classifier verdict
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifierResult {
    /// 0, 1, or -1 when unavailable
    pub label: i8,
    pub probability: f64,
    pub classification: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ClassifierResult {
    pub fn is_degraded(&self) -> bool {
        self.label == UNAVAILABLE_LABEL
    }
}

impl From<ClassifierOutcome> for ClassifierResult {
    fn from(outcome: ClassifierOutcome) -> Self {
        match outcome {
            ClassifierOutcome::Scored(p) => Self {
                label: p.label as i8,
                probability: p.probability,
                classification: if p.label == 1 { "malicious" } else { "safe" }.to_string(),
                error: None,
            },
            ClassifierOutcome::Unavailable => Self {
                label: UNAVAILABLE_LABEL,
                probability: 0.0,
                classification: MODEL_UNAVAILABLE.to_string(),
                error: Some("no trained model loaded".to_string()),
            },
            ClassifierOutcome::Failed(reason) => Self {
                label: UNAVAILABLE_LABEL,
                probability: 0.0,
                classification: format!("ML error: {}", reason),
                error: Some(reason),
            },
        }
    }
}

// ============================================================================
// ADAPTER
// ============================================================================

/// Holds the (optional) model loaded once at start-up
#[derive(Clone, Default)]
pub struct ClassifierAdapter {
    model: Option<Arc<dyn UrlModel>>,
}

impl ClassifierAdapter {
    pub fn new(model: Option<Arc<dyn UrlModel>>) -> Self {
        Self { model }
    }

    pub fn with_model(model: Arc<dyn UrlModel>) -> Self {
        Self::new(Some(model))
    }

    /// Adapter that always answers "model unavailable"
    pub fn unavailable() -> Self {
        Self::new(None)
    }

    pub fn model(&self) -> Option<&Arc<dyn UrlModel>> {
        self.model.as_ref()
    }

    /// Score one URL, folding every fault into the outcome
    pub fn evaluate(&self, url: &str) -> ClassifierOutcome {
        let Some(model) = self.model.as_deref() else {
            return ClassifierOutcome::Unavailable;
        };

        match predict(model, url) {
            Ok(prediction) => ClassifierOutcome::Scored(prediction),
            Err(e) => {
                log::warn!("Classifier failed for {}: {}", url, e);
                ClassifierOutcome::Failed(e.to_string())
            }
        }
    }

    pub fn classify(&self, url: &str) -> ClassifierResult {
        self.evaluate(url).into()
    }
}

impl std::fmt::Debug for ClassifierAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClassifierAdapter")
            .field("model", &self.model.as_ref().map(|m| m.metadata().name.clone()))
            .finish()
    }
}

fn predict(model: &dyn UrlModel, url: &str) -> Result<Prediction, ModelError> {
    let row = extract_features(url).to_row();

    let (label, probabilities) = model.predict_with_proba(&row)?;

    let label = match label {
        0 => 0u8,
        1 => 1u8,
        other => return Err(ModelError::InvalidOutput(format!("non-binary label {}", other))),
    };

    let positive = probabilities
        .get(1)
        .copied()
        .ok_or_else(|| {
            ModelError::InvalidOutput(format!(
                "expected 2 class probabilities, got {}",
                probabilities.len()
            ))
        })?;

    if !positive.is_finite() {
        return Err(ModelError::InvalidOutput(format!("probability {}", positive)));
    }

    Ok(Prediction {
        label,
        probability: f64::from(positive).clamp(0.0, 1.0),
    })
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::features::FeatureRow;
    use crate::logic::model::inference::ModelMetadata;

    /// Returns fixed outputs regardless of input
    struct FixedModel {
        label: i64,
        probabilities: Vec<f32>,
        metadata: ModelMetadata,
    }

    impl FixedModel {
        fn arc(label: i64, probabilities: Vec<f32>) -> Arc<dyn UrlModel> {
            Arc::new(Self {
                label,
                probabilities,
                metadata: ModelMetadata::new("fixed", "test", "<memory>"),
            })
        }
    }

    impl UrlModel for FixedModel {
        fn metadata(&self) -> &ModelMetadata {
            &self.metadata
        }
        fn predict(&self, _row: &FeatureRow) -> Result<i64, ModelError> {
            Ok(self.label)
        }
        fn predict_proba(&self, _row: &FeatureRow) -> Result<Vec<f32>, ModelError> {
            Ok(self.probabilities.clone())
        }
    }

    struct BrokenModel(ModelMetadata);

    impl UrlModel for BrokenModel {
        fn metadata(&self) -> &ModelMetadata {
            &self.0
        }
        fn predict(&self, _row: &FeatureRow) -> Result<i64, ModelError> {
            Err(ModelError::Inference("shape mismatch".to_string()))
        }
        fn predict_proba(&self, _row: &FeatureRow) -> Result<Vec<f32>, ModelError> {
            Err(ModelError::Inference("shape mismatch".to_string()))
        }
    }

    #[test]
    fn test_no_model_is_unavailable() {
        let adapter = ClassifierAdapter::unavailable();
        for url in ["http://example.com", "", "::::"] {
            let result = adapter.classify(url);
            assert_eq!(result.label, -1);
            assert_eq!(result.probability, 0.0);
            assert!(result.classification.contains("unavailable"));
            assert!(result.error.is_some());
            assert!(result.is_degraded());
        }
    }

    #[test]
    fn test_malicious_prediction() {
        let adapter = ClassifierAdapter::with_model(FixedModel::arc(1, vec![0.1, 0.9]));
        let result = adapter.classify("http://evil.example.tk/login");
        assert_eq!(result.label, 1);
        assert!((result.probability - 0.9).abs() < 1e-6);
        assert_eq!(result.classification, "malicious");
        assert_eq!(result.error, None);
    }

    #[test]
    fn test_safe_prediction() {
        let adapter = ClassifierAdapter::with_model(FixedModel::arc(0, vec![0.8, 0.2]));
        let result = adapter.classify("https://example.com");
        assert_eq!(result.label, 0);
        assert_eq!(result.classification, "safe");
    }

    #[test]
    fn test_model_error_is_degraded() {
        let model: Arc<dyn UrlModel> =
            Arc::new(BrokenModel(ModelMetadata::new("broken", "test", "<memory>")));
        let result = ClassifierAdapter::with_model(model).classify("https://example.com");
        assert_eq!(result.label, -1);
        assert_eq!(result.probability, 0.0);
        assert!(result.classification.starts_with("ML error: "));
        assert!(result.classification.contains("shape mismatch"));
    }

    #[test]
    fn test_non_binary_label_is_degraded() {
        let adapter = ClassifierAdapter::with_model(FixedModel::arc(2, vec![0.1, 0.1, 0.8]));
        let outcome = adapter.evaluate("https://example.com");
        assert!(matches!(outcome, ClassifierOutcome::Failed(ref r) if r.contains("non-binary label 2")));
    }

    #[test]
    fn test_single_probability_is_degraded() {
        let adapter = ClassifierAdapter::with_model(FixedModel::arc(1, vec![1.0]));
        assert!(adapter.classify("https://example.com").is_degraded());
    }

    #[test]
    fn test_nan_probability_is_degraded() {
        let adapter = ClassifierAdapter::with_model(FixedModel::arc(1, vec![0.0, f32::NAN]));
        assert!(adapter.classify("https://example.com").is_degraded());
    }

    #[test]
    fn test_probability_clamped() {
        let adapter = ClassifierAdapter::with_model(FixedModel::arc(1, vec![-0.2, 1.2]));
        let result = adapter.classify("https://example.com");
        assert_eq!(result.probability, 1.0);
    }

    #[test]
    fn test_serialization_omits_missing_error() {
        let adapter = ClassifierAdapter::with_model(FixedModel::arc(0, vec![1.0, 0.0]));
        let json = serde_json::to_value(adapter.classify("https://example.com")).unwrap();
        assert!(json.get("error").is_none());
        assert_eq!(json["label"], 0);
    }
}
