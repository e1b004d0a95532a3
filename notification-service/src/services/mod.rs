pub mod generator;
pub mod metrics;

pub use generator::{NotificationSource, SampleNotificationGenerator};
pub use self::metrics::{get_metrics, init_metrics, record_notifications};
