//! notification-service: per-user notification feed over HTTP.
pub mod config;
pub mod handlers;
pub mod models;
pub mod services;
pub mod startup;
