use anyhow::Result;
use common::{DATA_PATH, PREDICT_PATH};
use config::{Config, Environment, File};
use serde::Deserialize;

pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:5000";

/// Client configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the prediction backend, without a trailing slash
    pub api_base_url: String,
    pub predict_path: String,
    pub data_path: String,
}

/// Load configuration from `.env`, an optional config file and `BILLCAST_*`
/// environment variables, later sources winning.
pub fn load_config(config_file: &str) -> Result<ClientConfig> {
    dotenvy::dotenv().ok();

    let settings = Config::builder()
        .set_default("api_base_url", DEFAULT_API_BASE_URL)?
        .set_default("predict_path", PREDICT_PATH)?
        .set_default("data_path", DATA_PATH)?
        .add_source(File::with_name(config_file).required(false))
        .add_source(Environment::with_prefix("BILLCAST"))
        .build()?;

    let mut config: ClientConfig = settings.try_deserialize()?;
    config.api_base_url = config.api_base_url.trim_end_matches('/').to_string();
    tracing::debug!("Loaded configuration: {:?}", config);
    Ok(config)
}
