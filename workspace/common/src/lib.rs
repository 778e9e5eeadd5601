//! Common transport-layer types shared between the browser and terminal clients.
//! These structs mirror the prediction backend's request/response payloads
//! so both front ends deserialize API responses without duplicating shapes.

mod history;
mod prediction;

pub use history::{MonthlyDataResponse, MonthlyRecord};
pub use prediction::{ApplianceEntry, ApplianceImpact, PredictionRequest, PredictionResponse};

use serde::{Deserialize, Serialize};

/// Path of the prediction endpoint, relative to the API base URL.
pub const PREDICT_PATH: &str = "/api/predict";

/// Path of the historical monthly data endpoint.
pub const DATA_PATH: &str = "/api/data";

/// Status flag carried by every backend response.
///
/// The backend only ever promises `"ok"`; anything else is a failure and is
/// kept verbatim so it can be logged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ApiStatus {
    Ok,
    Other(String),
}

impl ApiStatus {
    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Ok)
    }
}

impl Default for ApiStatus {
    /// A response without a status field is not a success.
    fn default() -> Self {
        Self::Other(String::new())
    }
}

impl From<String> for ApiStatus {
    fn from(value: String) -> Self {
        if value == "ok" {
            Self::Ok
        } else {
            Self::Other(value)
        }
    }
}

impl From<ApiStatus> for String {
    fn from(value: ApiStatus) -> Self {
        match value {
            ApiStatus::Ok => "ok".to_string(),
            ApiStatus::Other(other) => other,
        }
    }
}
