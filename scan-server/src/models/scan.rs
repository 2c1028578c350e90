//! Scan request/response models

use serde::{Deserialize, Serialize};
use validator::Validate;

use urlrisk_core::{ClassifierResult, HeuristicResult, RiskLevel, RiskReport};

use crate::{AppError, AppResult};

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ScanUrlRequest {
    #[validate(url)]
    pub url: String,
}

impl ScanUrlRequest {
    /// Syntax check plus http(s) scheme; returns the lower-cased URL
    pub fn into_checked_url(self) -> AppResult<String> {
        self.validate()?;

        let lowered = self.url.trim().to_lowercase();
        if !(lowered.starts_with("http://") || lowered.starts_with("https://")) {
            return Err(AppError::ValidationError(format!(
                "url must use http or https: {}",
                self.url
            )));
        }
        Ok(lowered)
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct BatchScanRequest {
    #[validate(length(min = 1))]
    pub urls: Vec<String>,
}

// ============================================================================
// URL SCAN RESPONSE
// ============================================================================

/// Report as the web client reads it: `risk_percent`/`result` for the simple
/// filter, `risk` for the advanced one, `prediction` for the classifier.
#[derive(Debug, Serialize, Deserialize)]
pub struct ScanUrlResponse {
    pub url: String,
    pub filters: ScanFilters,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ScanFilters {
    pub simple_heuristic: SimpleFilter,
    pub advanced_heuristic: AdvancedFilter,
    pub machine_learning: MachineLearningFilter,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SimpleFilter {
    pub risk_percent: u8,
    pub result: RiskLevel,
    pub reasons: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AdvancedFilter {
    pub risk: u8,
    pub classification: RiskLevel,
    pub reasons: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MachineLearningFilter {
    /// 0, 1, or -1 when no prediction was made
    pub prediction: i8,
    pub probability: f64,
    pub classification: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl From<HeuristicResult> for SimpleFilter {
    fn from(r: HeuristicResult) -> Self {
        Self {
            risk_percent: r.score,
            result: r.classification,
            reasons: r.reasons,
        }
    }
}

impl From<HeuristicResult> for AdvancedFilter {
    fn from(r: HeuristicResult) -> Self {
        Self {
            risk: r.score,
            classification: r.classification,
            reasons: r.reasons,
        }
    }
}

impl From<ClassifierResult> for MachineLearningFilter {
    fn from(r: ClassifierResult) -> Self {
        Self {
            prediction: r.label,
            probability: r.probability,
            classification: r.classification,
            error: r.error,
        }
    }
}

impl From<RiskReport> for ScanUrlResponse {
    fn from(report: RiskReport) -> Self {
        let filters = report.filters;
        Self {
            url: report.url,
            filters: ScanFilters {
                simple_heuristic: filters.simple_heuristic.into(),
                advanced_heuristic: filters.advanced_heuristic.into(),
                machine_learning: filters.machine_learning.into(),
            },
        }
    }
}

// ============================================================================
// OTHER SCANS
// ============================================================================

#[derive(Debug, Serialize, Deserialize)]
pub struct EmailScanResponse {
    pub url: String,
    pub risk_percent: u8,
    pub result: RiskLevel,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct FileScanResponse {
    pub filename: Option<String>,
    pub status: String,
}
