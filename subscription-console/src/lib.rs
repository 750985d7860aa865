pub mod config;
pub mod error;
pub mod forms;
pub mod handlers;
pub mod models;
pub mod services;
pub mod startup;
pub mod views;

use config::UiSettings;
use services::SubscriptionClient;
use std::sync::Arc;

/// Shared state: the upstream client and display settings.
#[derive(Clone)]
pub struct AppState {
    pub api: Arc<SubscriptionClient>,
    pub ui: Arc<UiSettings>,
}

impl AppState {
    pub fn new(api: SubscriptionClient, ui: UiSettings) -> Self {
        Self {
            api: Arc::new(api),
            ui: Arc::new(ui),
        }
    }

    pub fn currency(&self) -> &str {
        &self.ui.currency_symbol
    }
}
