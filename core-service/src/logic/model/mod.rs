//! Model Module - Classifier Contract & Backends
//!
//! Separates inference from feature extraction so models can be swapped
//! without touching the pipeline.
//!
//! - `inference` - `UrlModel` trait, `ModelError`, `load_model`
//! - `linear` - JSON logistic model
//! - `onnx` - ONNX Runtime session (feature `onnx`)
//! - `adapter` - `ClassifierAdapter`, the never-failing pipeline entry

pub mod inference;
pub mod linear;
#[cfg(feature = "onnx")]
pub mod onnx;
pub mod adapter;

// Re-export common types
pub use inference::{load_model, ArtifactLayout, ModelError, ModelMetadata, UrlModel};
pub use linear::{LinearModel, LinearModelSpec};
#[cfg(feature = "onnx")]
pub use onnx::OnnxModel;
pub use adapter::{ClassifierAdapter, ClassifierOutcome, ClassifierResult, Prediction};
