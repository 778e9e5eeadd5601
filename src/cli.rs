use anyhow::Result;
use clap::{Parser, Subcommand};

pub mod commands;

use crate::client::ApiClient;
use crate::config::load_config;
use commands::{PredictArgs, history, predict};

#[derive(Parser)]
#[command(name = "billcast")]
#[command(about = "Electricity bill planner: usage history and appliance what-if predictions")]
#[command(version)]
pub struct Cli {
    /// Configuration file, without extension (toml, yaml or json)
    #[arg(short, long, global = true, default_value = "billcast")]
    pub config: String,

    /// Backend base URL, overrides the configuration
    ///
    /// Format: SCHEME://HOST:PORT (e.g., http://127.0.0.1:5000)
    #[arg(long, global = true, env = "BILLCAST_API_URL")]
    pub api_url: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the monthly usage history and the current total
    History,
    /// Predict the monthly bill with additional appliances
    ///
    /// Examples:
    ///   billcast predict --existing-kwh 120 --rate 8 --appliance Heater:2000:2
    ///   billcast predict --appliance Fan:75:5:30 --appliance Lamp:9:6
    Predict(PredictArgs),
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        let mut config = load_config(&self.config)?;
        if let Some(api_url) = self.api_url {
            config.api_base_url = api_url.trim_end_matches('/').to_string();
        }
        tracing::info!("Using backend at {}", config.api_base_url);

        let client = ApiClient::from_config(&config)?;
        let report = match self.command {
            Commands::History => history(&client).await?,
            Commands::Predict(args) => predict(&client, &args).await?,
        };
        print!("{}", report);
        Ok(())
    }
}
