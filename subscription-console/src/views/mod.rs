//! Presentation helpers: formatting, view-models, toasts and htmx headers.

pub mod format;
pub mod htmx;
pub mod plans;
pub mod purchase;
pub mod stats;
pub mod subscriptions;
pub mod toast;

pub use toast::ToastTemplate;
