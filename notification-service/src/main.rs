use notification_service::config::NotificationConfig;
use notification_service::services::init_metrics;
use notification_service::startup::Application;
use service_core::observability::init_tracing;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let config = NotificationConfig::load()
        .map_err(|e| std::io::Error::other(format!("Configuration error: {}", e)))?;

    init_tracing(
        &config.observability.service_name,
        &config.observability.log_level,
        config.observability.otlp_endpoint.as_deref(),
    );

    init_metrics().map_err(|e| {
        tracing::error!("Failed to initialize metrics: {}", e);
        std::io::Error::other(format!("Metrics error: {}", e))
    })?;

    let application = Application::build(config).await.map_err(|e| {
        tracing::error!("Failed to build application: {}", e);
        std::io::Error::other(format!("Startup error: {}", e))
    })?;

    application.run_until_stopped().await?;

    tracing::info!("Notification service stopped");
    Ok(())
}
