use secrecy::Secret;
use serde::Deserialize;

#[derive(Deserialize, Clone)]
pub struct Settings {
    pub server: ServerSettings,
    pub subscription_api: SubscriptionApiSettings,
    #[serde(default)]
    pub ui: UiSettings,
    #[serde(default)]
    pub telemetry: TelemetrySettings,
}

#[derive(Deserialize, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    /// Directory served under `/static`.
    #[serde(default = "default_static_dir")]
    pub static_dir: String,
}

fn default_static_dir() -> String {
    "subscription-console/static".to_string()
}

#[derive(Deserialize, Clone)]
pub struct SubscriptionApiSettings {
    /// Base URL of the subscription API (e.g., http://one-api:3000).
    pub url: String,
    /// Admin access token, sent as a bearer token on every call.
    #[serde(default)]
    pub access_token: Option<Secret<String>>,
}

#[derive(Deserialize, Clone, Debug)]
pub struct UiSettings {
    #[serde(default = "default_items_per_page")]
    pub items_per_page: u32,
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            items_per_page: default_items_per_page(),
            currency_symbol: default_currency_symbol(),
        }
    }
}

fn default_items_per_page() -> u32 {
    10
}

fn default_currency_symbol() -> String {
    "¥".to_string()
}

#[derive(Deserialize, Clone, Debug)]
pub struct TelemetrySettings {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// OTLP gRPC endpoint; span export is disabled when unset.
    #[serde(default)]
    pub otlp_endpoint: Option<String>,
}

impl Default for TelemetrySettings {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            otlp_endpoint: None,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let base_path = std::env::current_dir()
        .map_err(|e| config::ConfigError::Message(format!("cannot read current dir: {}", e)))?;

    // Works from the workspace root and from inside the crate directory.
    let configuration_directory = if base_path.ends_with("subscription-console") {
        base_path.join("config")
    } else {
        base_path.join("subscription-console").join("config")
    };

    let settings = config::Config::builder()
        .add_source(config::File::from(configuration_directory.join("base.yaml")).required(true))
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    settings.try_deserialize::<Settings>()
}
