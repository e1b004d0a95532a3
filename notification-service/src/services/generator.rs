//! Notification sources.
//!
//! The handler depends on [`NotificationSource`] only. The shipped source is a
//! fixture generator that fabricates the same three-item feed for every user,
//! stamped relative to the current local time.

use chrono::{Duration, Local, NaiveDateTime};

use crate::models::{Notification, NotificationResponse};

pub trait NotificationSource: Send + Sync {
    /// Build the notification feed for `user_id`. Infallible; `user_id` is echoed as-is.
    fn user_notifications(&self, user_id: &str) -> NotificationResponse;

    fn is_ready(&self) -> bool {
        true
    }
}

/// Fixture feed: one route recommendation, one traffic alert, one preference update.
#[derive(Debug, Clone, Default)]
pub struct SampleNotificationGenerator;

impl SampleNotificationGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Generate the feed as if the clock read `now`.
    pub fn generate_at(&self, user_id: &str, now: NaiveDateTime) -> NotificationResponse {
        let notifications = vec![
            Notification::new_route_recommendation(
                "Highway 101",
                15,
                "downtown",
                now - Duration::minutes(10),
            ),
            Notification::new_alert(
                "Heavy traffic detected on your usual route",
                "Main Street",
                "heavy_traffic",
                now - Duration::minutes(5),
            ),
            Notification::new_update(
                "Your route preferences have been updated based on recent travel patterns",
                "route_preferences",
                now - Duration::hours(1),
            ),
        ];

        NotificationResponse::new(user_id.to_string(), notifications)
    }
}

impl NotificationSource for SampleNotificationGenerator {
    fn user_notifications(&self, user_id: &str) -> NotificationResponse {
        tracing::debug!(user_id = %user_id, "Generating sample notifications");
        self.generate_at(user_id, Local::now().naive_local())
    }
}
