//! URL Risk Scanner - Core Scoring Pipeline
//!
//! Scores a URL with two rule-based heuristics and a pluggable trained
//! classifier, and reports all three side by side.
//!
//! ```no_run
//! use urlrisk_core::{load_model, ClassifierAdapter, RiskScorer};
//!
//! let model = load_model("ml/model.onnx").ok();
//! let scorer = RiskScorer::new(ClassifierAdapter::new(model));
//! let report = scorer.score("http://192.168.1.1/login?x=1&y=2&z=3&w=4");
//! println!("{}", serde_json::to_string_pretty(&report).unwrap());
//! ```

pub mod constants;
pub mod logic;

pub use logic::features::{extract_features, FeatureRecord, FeatureRow};
pub use logic::heuristics::{advanced_heuristic, simple_heuristic, HeuristicResult, RiskLevel};
pub use logic::model::{
    load_model, ClassifierAdapter, ClassifierOutcome, ClassifierResult, ModelError, UrlModel,
};
pub use logic::risk::{RiskFilters, RiskReport, RiskScorer};
pub use logic::dataset::{export_dataset, DatasetError, ExportSummary};
