pub mod notification;

pub use notification::{
    AlertMetadata, Notification, NotificationMetadata, NotificationResponse, NotificationType,
    Priority, RouteMetadata, UpdateMetadata,
};
