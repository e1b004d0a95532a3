mod common;

use common::TestApp;
use notification_service::models::NotificationResponse;
use notification_service::services::{init_metrics, NotificationSource};
use reqwest::Client;
use std::sync::Arc;

struct WarmingUpSource;

impl NotificationSource for WarmingUpSource {
    fn user_notifications(&self, user_id: &str) -> NotificationResponse {
        NotificationResponse::new(user_id.to_string(), Vec::new())
    }

    fn is_ready(&self) -> bool {
        false
    }
}

#[tokio::test]
async fn health_check_works() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    let response = client
        .get(&format!("{}/health", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    assert!(response.status().is_success());

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "notification-service");
}

#[tokio::test]
async fn readiness_check_works() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    let response = client
        .get(&format!("{}/ready", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    assert!(response.status().is_success());
}

#[tokio::test]
async fn readiness_reflects_notification_source() {
    let app = TestApp::spawn_with_source(Arc::new(WarmingUpSource)).await;
    let client = Client::new();

    let response = client
        .get(&format!("{}/ready", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 503);
    let error: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(error["error"], "Service unavailable");

    // The feed itself is served by whatever source was injected.
    let body: serde_json::Value = client
        .get(app.notifications_url("user123"))
        .send()
        .await
        .expect("Failed to execute request")
        .json()
        .await
        .expect("Failed to parse JSON");
    assert_eq!(body["userId"], "user123");
    assert_eq!(body["totalCount"], 0);
}

#[tokio::test]
async fn metrics_endpoint_returns_prometheus_format() {
    init_metrics().expect("Failed to initialize metrics");
    let app = TestApp::spawn().await;
    let client = Client::new();

    client
        .get(app.notifications_url("user123"))
        .send()
        .await
        .expect("Failed to execute request");

    let response = client
        .get(&format!("{}/metrics", app.address))
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

    let body = response.text().await.expect("Failed to get response body");
    assert!(
        body.contains("notifications_generated_total"),
        "Unexpected metrics output: {}",
        body
    );
}
