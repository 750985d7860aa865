pub mod app;
pub mod metrics;
pub mod plans;
pub mod purchase;
pub mod stats;
pub mod subscriptions;
