use common::{MonthlyDataResponse, DATA_PATH};
use crate::api_client;

/// Fetch the monthly usage history
pub async fn get_monthly_data() -> Result<MonthlyDataResponse, String> {
    log::trace!("Fetching monthly usage history");
    let result = api_client::get::<MonthlyDataResponse>(DATA_PATH).await;
    match &result {
        Ok(response) => log::info!("Fetched {} months of history", response.data.len()),
        Err(e) => log::error!("Failed to fetch monthly history: {}", e),
    }
    result
}
