use console_core::observability::{init_tracing, metrics::init_metrics};
use dotenvy::dotenv;
use subscription_console::config::get_configuration;
use subscription_console::services::SubscriptionClient;
use subscription_console::startup::build_router;
use subscription_console::AppState;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let configuration = get_configuration().map_err(|e| {
        eprintln!("Failed to read configuration: {}", e);
        anyhow::anyhow!("Configuration error: {}", e)
    })?;

    init_tracing(
        "subscription-console",
        &configuration.telemetry.log_level,
        configuration.telemetry.otlp_endpoint.as_deref(),
    )?;
    init_metrics();

    let api = SubscriptionClient::new(configuration.subscription_api.clone());
    info!(upstream = %api.base_url(), "Subscription API configured");

    let state = AppState::new(api, configuration.ui.clone());
    let app = build_router(state, &configuration.server.static_dir);

    let address = format!(
        "{}:{}",
        configuration.server.host, configuration.server.port
    );
    let listener = tokio::net::TcpListener::bind(&address).await.map_err(|e| {
        tracing::error!("Failed to bind TCP listener to {}: {}", address, e);
        anyhow::anyhow!("Failed to bind to address {}: {}", address, e)
    })?;

    info!("Starting subscription-console on {}", address);
    axum::serve(listener, app).await.map_err(|e| {
        tracing::error!("Server error: {}", e);
        anyhow::anyhow!("Server error: {}", e)
    })?;

    Ok(())
}
