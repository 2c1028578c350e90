use std::collections::BTreeMap;
use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use urlrisk_core::logic::model::{LinearModel, LinearModelSpec};
use urlrisk_core::{ClassifierAdapter, RiskScorer, UrlModel};

use crate::config::Config;
use crate::{create_router, AppState};

fn app_with(classifier: ClassifierAdapter, config: Config) -> Router {
    create_router(AppState {
        scorer: RiskScorer::new(classifier),
        config,
    })
}

fn app() -> Router {
    app_with(ClassifierAdapter::unavailable(), Config::default())
}

fn ip_model() -> Arc<dyn UrlModel> {
    let spec = LinearModelSpec {
        name: Some("ip_only".to_string()),
        weights: BTreeMap::from([("has_ip".to_string(), 10.0)]),
        bias: -5.0,
        threshold: 0.5,
        layout: None,
    };
    Arc::new(LinearModel::from_spec(spec, "<memory>").unwrap())
}

async fn send(app: Router, req: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(req).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_root_and_health() {
    let req = Request::builder().uri("/").body(Body::empty()).unwrap();
    let (status, body) = send(app(), req).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["message"].as_str().unwrap().contains("URL Risk Scanner"));

    let req = Request::builder().uri("/health").body(Body::empty()).unwrap();
    let (status, body) = send(app(), req).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["model_loaded"], false);
}

#[tokio::test]
async fn test_health_reports_loaded_model() {
    let app = app_with(ClassifierAdapter::with_model(ip_model()), Config::default());
    let req = Request::builder().uri("/health").body(Body::empty()).unwrap();
    let (_, body) = send(app, req).await;
    assert_eq!(body["model_loaded"], true);
    assert_eq!(body["model"]["name"], "ip_only");
}

#[tokio::test]
async fn test_scan_url_without_model() {
    let req = post_json("/scan/url", json!({ "url": "http://192.168.1.1/login?x=1&y=2&z=3&w=4" }));
    let (status, body) = send(app(), req).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["url"], "http://192.168.1.1/login?x=1&y=2&z=3&w=4");
    assert_eq!(body["filters"]["advanced_heuristic"]["risk"], 60);
    assert_eq!(body["filters"]["advanced_heuristic"]["classification"], "suspicious");
    assert_eq!(body["filters"]["simple_heuristic"]["result"], "probably safe");
    assert_eq!(body["filters"]["machine_learning"]["prediction"], -1);
}

#[tokio::test]
async fn test_scan_url_with_model() {
    let app = app_with(ClassifierAdapter::with_model(ip_model()), Config::default());
    let req = post_json("/scan/url", json!({ "url": "http://10.0.0.1/" }));
    let (status, body) = send(app, req).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["filters"]["machine_learning"]["prediction"], 1);
    assert_eq!(body["filters"]["machine_learning"]["classification"], "malicious");
}

#[tokio::test]
async fn test_web_client_contract() {
    // Path and field names the web UI uses
    let req = post_json("/scan/url/", json!({ "url": "http://192.168.1.1/login?x=1&y=2&z=3&w=4" }));
    let (status, body) = send(app(), req).await;
    assert_eq!(status, StatusCode::OK);

    let filters = &body["filters"];
    assert_eq!(filters["simple_heuristic"]["risk_percent"], 15);
    assert_eq!(filters["simple_heuristic"]["result"], "probably safe");
    assert_eq!(filters["advanced_heuristic"]["risk"], 60);
    assert_eq!(filters["advanced_heuristic"]["reasons"].as_array().unwrap().len(), 3);
    assert_eq!(filters["machine_learning"]["prediction"], -1);
    assert_eq!(filters["machine_learning"]["probability"], 0.0);
    assert!(filters["machine_learning"]["error"].is_string());
    assert!(filters["machine_learning"].get("label").is_none());
    assert!(filters["simple_heuristic"].get("score").is_none());

    let req = post_json("/scan/email/", json!({ "url": "http://secure-account.example.ru/" }));
    let (status, body) = send(app(), req).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["risk_percent"], 20);
}

#[tokio::test]
async fn test_scan_url_is_lowercased() {
    let req = post_json("/scan/url", json!({ "url": "HTTPS://Example.COM/Path" }));
    let (status, body) = send(app(), req).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["url"], "https://example.com/path");
}

#[tokio::test]
async fn test_invalid_url_rejected() {
    for url in ["not a url", "ftp://example.com/file", ""] {
        let (status, body) = send(app(), post_json("/scan/url", json!({ "url": url }))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{}", url);
        assert_eq!(body["status"], 400);
        assert!(body["error"].is_string());
    }
}

#[tokio::test]
async fn test_batch_preserves_order() {
    let req = post_json(
        "/scan/url/batch",
        json!({ "urls": ["http://a.example", "http://b.example.ru"] }),
    );
    let (status, body) = send(app(), req).await;

    assert_eq!(status, StatusCode::OK);
    let reports = body.as_array().unwrap();
    assert_eq!(reports.len(), 2);
    assert_eq!(reports[1]["url"], "http://b.example.ru");
    assert_eq!(reports[1]["filters"]["simple_heuristic"]["risk_percent"], 10);
}

#[tokio::test]
async fn test_batch_rejects_any_invalid_url() {
    let req = post_json("/scan/url/batch", json!({ "urls": ["http://a.example", "nope"] }));
    let (status, _) = send(app(), req).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let req = post_json("/scan/url/batch", json!({ "urls": [] }));
    let (status, _) = send(app(), req).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_batch_size_limit() {
    let config = Config {
        max_batch_size: 2,
        ..Config::default()
    };
    let app = app_with(ClassifierAdapter::unavailable(), config);
    let req = post_json(
        "/scan/url/batch",
        json!({ "urls": ["http://a.example", "http://b.example", "http://c.example"] }),
    );
    let (status, body) = send(app, req).await;
    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(body["status"], 413);
}

#[tokio::test]
async fn test_scan_email_uses_simple_heuristic() {
    let req = post_json("/scan/email", json!({ "url": "http://secure-account.example.ru/" }));
    let (status, body) = send(app(), req).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["url"], "http://secure-account.example.ru/");
    assert_eq!(body["risk_percent"], 20);
    assert_eq!(body["result"], "probably safe");
}

#[tokio::test]
async fn test_scan_file_is_pending() {
    let boundary = "XBOUNDARYX";
    let payload = format!(
        "--{b}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"invoice.pdf\"\r\n\
         Content-Type: application/pdf\r\n\r\n%PDF-1.4\r\n--{b}--\r\n",
        b = boundary
    );
    let req = Request::builder()
        .method("POST")
        .uri("/scan/file")
        .header(header::CONTENT_TYPE, format!("multipart/form-data; boundary={}", boundary))
        .body(Body::from(payload))
        .unwrap();

    let (status, body) = send(app(), req).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["filename"], "invoice.pdf");
    assert_eq!(body["status"], "pending scan");
}
