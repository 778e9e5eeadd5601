//! HTTP client for the prediction backend.

use common::{DATA_PATH, MonthlyDataResponse, PREDICT_PATH, PredictionRequest, PredictionResponse};
use planner::TransportError;

use crate::config::ClientConfig;
use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{debug, error, instrument, warn};

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Non-success status with a body that is not a backend response
    #[error("HTTP error: {0}")]
    Status(StatusCode),

    #[error("Failed to parse response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl From<ClientError> for TransportError {
    fn from(error: ClientError) -> Self {
        TransportError::new(error.to_string())
    }
}

/// Async client for the prediction and monthly data endpoints.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    predict_path: String,
    data_path: String,
    http: reqwest::Client,
}

impl ApiClient {
    /// Client for `base_url` with the default `/api/predict` and `/api/data` paths.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder().build()?;
        Ok(Self {
            base_url: base_url.into(),
            predict_path: PREDICT_PATH.to_string(),
            data_path: DATA_PATH.to_string(),
            http,
        })
    }

    pub fn from_config(config: &ClientConfig) -> Result<Self, ClientError> {
        Ok(Self::new(&config.api_base_url)?.with_paths(&config.predict_path, &config.data_path))
    }

    pub fn with_paths(mut self, predict_path: impl Into<String>, data_path: impl Into<String>) -> Self {
        self.predict_path = predict_path.into();
        self.data_path = data_path.into();
        self
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// The backend answers its own failures with a 4xx and a JSON body, so
    /// the body is decoded whatever the status.
    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
        let status = response.status();
        if !status.is_success() {
            warn!("Non-OK response: {}", status);
        }

        let bytes = response.bytes().await?;
        match serde_json::from_slice(&bytes) {
            Ok(body) => Ok(body),
            Err(_) if !status.is_success() => {
                error!("Undecodable body with status {}", status);
                Err(ClientError::Status(status))
            }
            Err(e) => {
                error!("Failed to parse response: {}", e);
                Err(ClientError::Decode(e))
            }
        }
    }

    #[instrument(skip(self))]
    pub async fn monthly_data(&self) -> Result<MonthlyDataResponse, ClientError> {
        let url = self.url(&self.data_path);
        debug!("GET request to: {}", url);
        let response = self.http.get(&url).send().await?;
        Self::decode(response).await
    }

    #[instrument(skip(self, request), fields(appliances = request.appliances.len()))]
    pub async fn predict(&self, request: &PredictionRequest) -> Result<PredictionResponse, ClientError> {
        let url = self.url(&self.predict_path);
        debug!("POST request to: {}", url);
        let response = self.http.post(&url).json(request).send().await?;
        Self::decode(response).await
    }
}
