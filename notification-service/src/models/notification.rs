use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NotificationType {
    RouteRecommendation,
    Alert,
    Update,
    /// Reserved; nothing produces it yet.
    System,
}

impl std::fmt::Display for NotificationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NotificationType::RouteRecommendation => write!(f, "ROUTE_RECOMMENDATION"),
            NotificationType::Alert => write!(f, "ALERT"),
            NotificationType::Update => write!(f, "UPDATE"),
            NotificationType::System => write!(f, "SYSTEM"),
        }
    }
}

/// Ordered from least to most pressing.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum Priority {
    Low,
    Medium,
    High,
    /// Reserved; nothing produces it yet.
    Urgent,
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Priority::Low => write!(f, "LOW"),
            Priority::Medium => write!(f, "MEDIUM"),
            Priority::High => write!(f, "HIGH"),
            Priority::Urgent => write!(f, "URGENT"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RouteMetadata {
    pub route_name: String,
    pub time_saved_minutes: u32,
    pub destination: String,
    pub alternative_available: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AlertMetadata {
    pub location: String,
    pub alert_type: String,
    pub severity: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateMetadata {
    pub update_type: String,
    pub source: String,
}

/// Type-specific details, serialized as a flat JSON object.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum NotificationMetadata {
    Route(RouteMetadata),
    Alert(AlertMetadata),
    Update(UpdateMetadata),
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Notification {
    pub id: String,
    #[serde(rename = "type")]
    pub notification_type: NotificationType,
    pub message: String,
    pub priority: Priority,
    pub timestamp: NaiveDateTime,
    pub metadata: NotificationMetadata,
    pub read: bool,
}

impl Notification {
    pub fn new_route_recommendation(
        route_name: &str,
        time_saved_minutes: u32,
        destination: &str,
        timestamp: NaiveDateTime,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            notification_type: NotificationType::RouteRecommendation,
            message: format!(
                "Recommended route to {}: Via {} saves {} minutes",
                destination, route_name, time_saved_minutes
            ),
            priority: Priority::Medium,
            timestamp,
            metadata: NotificationMetadata::Route(RouteMetadata {
                route_name: route_name.to_string(),
                time_saved_minutes,
                destination: destination.to_string(),
                alternative_available: true,
            }),
            read: false,
        }
    }

    pub fn new_alert(
        message: &str,
        location: &str,
        alert_type: &str,
        timestamp: NaiveDateTime,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            notification_type: NotificationType::Alert,
            message: message.to_string(),
            priority: Priority::High,
            timestamp,
            metadata: NotificationMetadata::Alert(AlertMetadata {
                location: location.to_string(),
                alert_type: alert_type.to_string(),
                severity: "high".to_string(),
            }),
            read: false,
        }
    }

    pub fn new_update(message: &str, update_type: &str, timestamp: NaiveDateTime) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            notification_type: NotificationType::Update,
            message: message.to_string(),
            priority: Priority::Low,
            timestamp,
            metadata: NotificationMetadata::Update(UpdateMetadata {
                update_type: update_type.to_string(),
                source: "recommendation_engine".to_string(),
            }),
            read: true,
        }
    }
}

/// Feed returned for one user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NotificationResponse {
    pub user_id: String,
    pub notifications: Vec<Notification>,
    pub total_count: usize,
}

impl NotificationResponse {
    pub fn new(user_id: String, notifications: Vec<Notification>) -> Self {
        let total_count = notifications.len();
        Self {
            user_id,
            notifications,
            total_count,
        }
    }
}
