//! Metrics collection for notification-service.
//!
//! HTTP request metrics come from the shared middleware; this module owns the
//! Prometheus recorder and the feed counters.

use metrics::counter;
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use service_core::error::AppError;
use std::sync::{Mutex, OnceLock};

use crate::models::Notification;

pub static METRICS_HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();
static INSTALL_LOCK: Mutex<()> = Mutex::new(());

/// Install the global Prometheus recorder. Once installed, later calls are
/// no-ops; a failed install leaves nothing behind so the error is reported again.
pub fn init_metrics() -> Result<(), AppError> {
    let _guard = INSTALL_LOCK
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());

    if METRICS_HANDLE.get().is_some() {
        return Ok(());
    }

    let recorder = PrometheusBuilder::new().build_recorder();
    let handle = recorder.handle();
    ::metrics::set_global_recorder(recorder).map_err(|e| {
        AppError::InternalError(anyhow::anyhow!(
            "failed to install Prometheus recorder: {}",
            e
        ))
    })?;

    let _ = METRICS_HANDLE.set(handle);
    Ok(())
}

/// Get metrics output in Prometheus text format.
pub fn get_metrics() -> String {
    METRICS_HANDLE
        .get()
        .map(|handle| handle.render())
        .unwrap_or_else(|| "# Metrics recorder not initialized\n".to_string())
}

/// Count served notifications by type.
pub fn record_notifications(notifications: &[Notification]) {
    for notification in notifications {
        counter!(
            "notifications_generated_total",
            "type" => notification.notification_type.to_string()
        )
        .increment(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Nothing else in the unit-test binary installs a recorder; installation that
    // succeeds is exercised by the HTTP tests in tests/health_check.rs.
    #[test]
    fn test_failed_install_is_not_cached() {
        let occupied = ::metrics::set_global_recorder(PrometheusBuilder::new().build_recorder());
        assert!(occupied.is_ok(), "global recorder already taken");

        assert!(init_metrics().is_err());
        assert!(METRICS_HANDLE.get().is_none());
        assert!(init_metrics().is_err());
        assert_eq!(get_metrics(), "# Metrics recorder not initialized\n");
    }
}
