use notification_service::config::{CorsConfig, NotificationConfig, ObservabilityConfig};
use notification_service::services::{NotificationSource, SampleNotificationGenerator};
use notification_service::startup::Application;
use service_core::config::Config as CoreConfig;
use std::sync::Arc;

pub struct TestApp {
    pub address: String,
}

pub fn test_config() -> NotificationConfig {
    // Use random port for testing (port 0)
    NotificationConfig {
        common: CoreConfig { port: 0 },
        observability: ObservabilityConfig {
            service_name: "notification-service".to_string(),
            log_level: "info".to_string(),
            otlp_endpoint: None,
        },
        cors: CorsConfig {
            allowed_origins: Vec::new(),
        },
    }
}

impl TestApp {
    pub async fn spawn() -> Self {
        Self::spawn_with_source(Arc::new(SampleNotificationGenerator::new())).await
    }

    pub async fn spawn_with_source(source: Arc<dyn NotificationSource>) -> Self {
        let app = Application::build_with_source(test_config(), source)
            .await
            .expect("Failed to build test application");

        let port = app.port();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for the server to be ready by polling the health endpoint
        let client = reqwest::Client::new();
        let health_url = format!("{}/health", address);
        for _ in 0..50 {
            if client.get(&health_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
        }

        TestApp { address }
    }

    pub fn notifications_url(&self, user_id: &str) -> String {
        format!("{}/api/v1/notifications/{}", self.address, user_id)
    }
}
