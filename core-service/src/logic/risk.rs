//! Risk Aggregator
//!
//! Runs every strategy for one URL and reports them side by side.
//! There is no combined verdict: each filter stands on its own and a degraded
//! classifier never affects the heuristic results.

use serde::{Deserialize, Serialize};

use super::heuristics::{advanced_heuristic, simple_heuristic, HeuristicResult};
use super::model::{ClassifierAdapter, ClassifierResult};

/// Results keyed by strategy name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskFilters {
    pub simple_heuristic: HeuristicResult,
    pub advanced_heuristic: HeuristicResult,
    pub machine_learning: ClassifierResult,
}

/// Report for one scored URL
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskReport {
    pub url: String,
    pub filters: RiskFilters,
}

/// Stateless scorer; cheap to clone and share across threads
#[derive(Debug, Clone, Default)]
pub struct RiskScorer {
    classifier: ClassifierAdapter,
}

impl RiskScorer {
    pub fn new(classifier: ClassifierAdapter) -> Self {
        Self { classifier }
    }

    pub fn classifier(&self) -> &ClassifierAdapter {
        &self.classifier
    }

    pub fn score(&self, url: &str) -> RiskReport {
        let report = RiskReport {
            url: url.to_string(),
            filters: RiskFilters {
                simple_heuristic: simple_heuristic(url),
                advanced_heuristic: advanced_heuristic(url),
                machine_learning: self.classifier.classify(url),
            },
        };

        log::info!(
            "Scored {}: simple={} advanced={} ml={}",
            report.url,
            report.filters.simple_heuristic.score,
            report.filters.advanced_heuristic.score,
            report.filters.machine_learning.classification
        );
        report
    }

    /// Independent repeated scoring, in input order
    pub fn score_batch<S: AsRef<str>>(&self, urls: &[S]) -> Vec<RiskReport> {
        urls.iter().map(|url| self.score(url.as_ref())).collect()
    }
}
