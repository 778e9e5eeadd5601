use common::{PredictionRequest, PredictionResponse, PREDICT_PATH};
use crate::api_client;

/// Ask the backend for a bill prediction
pub async fn predict(request: &PredictionRequest) -> Result<PredictionResponse, String> {
    log::trace!(
        "Requesting prediction for {} appliances",
        request.appliances.len()
    );
    let result = api_client::post::<PredictionResponse, _>(PREDICT_PATH, request).await;
    match &result {
        Ok(response) => log::info!("Prediction answered with status {:?}", response.status),
        Err(e) => log::error!("Failed to fetch prediction: {}", e),
    }
    result
}
