//! Scan handlers

use axum::{
    extract::{Multipart, State},
    Json,
};

use urlrisk_core::simple_heuristic;

use crate::models::{
    BatchScanRequest, EmailScanResponse, FileScanResponse, ScanUrlRequest, ScanUrlResponse,
};
use crate::{AppError, AppResult, AppState};

/// Score one URL with every filter
pub async fn scan_url(
    State(state): State<AppState>,
    Json(req): Json<ScanUrlRequest>,
) -> AppResult<Json<ScanUrlResponse>> {
    let url = req.into_checked_url()?;
    let scorer = state.scorer.clone();

    let report = tokio::task::spawn_blocking(move || scorer.score(&url)).await?;
    Ok(Json(report.into()))
}

/// Score several URLs; one invalid URL rejects the whole batch
pub async fn scan_url_batch(
    State(state): State<AppState>,
    Json(req): Json<BatchScanRequest>,
) -> AppResult<Json<Vec<ScanUrlResponse>>> {
    validator::Validate::validate(&req)?;

    if req.urls.len() > state.config.max_batch_size {
        return Err(AppError::PayloadTooLarge(format!(
            "at most {} urls per batch",
            state.config.max_batch_size
        )));
    }

    let urls = req
        .urls
        .into_iter()
        .map(|url| ScanUrlRequest { url }.into_checked_url())
        .collect::<AppResult<Vec<_>>>()?;

    let scorer = state.scorer.clone();
    let reports = tokio::task::spawn_blocking(move || scorer.score_batch(&urls)).await?;
    tracing::debug!("Scored batch of {}", reports.len());

    Ok(Json(reports.into_iter().map(ScanUrlResponse::from).collect()))
}

/// Links found in an email body get the simple heuristic only
pub async fn scan_email(Json(req): Json<ScanUrlRequest>) -> AppResult<Json<EmailScanResponse>> {
    let url = req.into_checked_url()?;
    let result = simple_heuristic(&url);

    Ok(Json(EmailScanResponse {
        url,
        risk_percent: result.score,
        result: result.classification,
    }))
}

/// File scanning is not implemented; the upload is acknowledged only
pub async fn scan_file(mut multipart: Multipart) -> AppResult<Json<FileScanResponse>> {
    let mut filename = None;
    while let Some(field) = multipart.next_field().await? {
        if let Some(name) = field.file_name() {
            filename = Some(name.to_string());
            break;
        }
    }

    if filename.is_none() {
        return Err(AppError::ValidationError("missing file field".to_string()));
    }

    Ok(Json(FileScanResponse {
        filename,
        status: "pending scan".to_string(),
    }))
}
