mod common;

use common::TestApp;
use data_service::services::init_metrics;
use reqwest::Client;
use std::sync::Once;

// Initialize metrics once for all tests
static INIT_METRICS: Once = Once::new();

fn ensure_metrics_initialized() {
    INIT_METRICS.call_once(|| {
        init_metrics();
    });
}

#[tokio::test]
async fn index_returns_greeting_with_timestamp() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    let response = client
        .get(&app.address)
        .send()
        .await
        .expect("Failed to execute request");

    assert!(response.status().is_success());

    let body = response.text().await.expect("Failed to get response body");
    assert!(body.starts_with("Welcome to the data service!"));

    let timestamp = body
        .rsplit("The current time is: ")
        .next()
        .expect("Greeting missing timestamp");
    chrono::DateTime::parse_from_rfc3339(timestamp.trim())
        .expect("Greeting timestamp is not RFC 3339");

    app.cleanup().await;
}

#[tokio::test]
async fn health_check_works() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    let response = client
        .get(format!("{}/health", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    assert!(response.status().is_success());

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "data-service");

    app.cleanup().await;
}

#[tokio::test]
async fn readiness_check_works() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    let response = client
        .get(format!("{}/ready", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    assert!(response.status().is_success());

    app.cleanup().await;
}

#[tokio::test]
async fn metrics_endpoint_returns_prometheus_format() {
    ensure_metrics_initialized();
    let app = TestApp::spawn().await;
    let client = Client::new();

    let response = client
        .get(format!("{}/metrics", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    assert!(response.status().is_success());

    let content_type = response
        .headers()
        .get("content-type")
        .expect("Missing content-type header")
        .to_str()
        .expect("Invalid content-type");

    assert!(content_type.starts_with("text/plain"));

    app.cleanup().await;
}
