use serde::{Deserialize, Serialize};

use crate::ApiStatus;

/// One appliance as sent to the prediction endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApplianceEntry {
    pub name: String,
    pub power_w: f64,
    pub hours_per_day: f64,
    pub days: i64,
}

/// Request body for `POST /api/predict`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PredictionRequest {
    /// Current monthly usage in kWh
    pub existing_kwh: f64,
    /// Price per kWh
    pub rate: f64,
    pub appliances: Vec<ApplianceEntry>,
    pub days_in_month: i64,
}

/// Per-appliance share of the predicted bill.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApplianceImpact {
    pub name: String,
    pub kwh: f64,
    pub cost: f64,
}

/// Response body of `POST /api/predict`.
///
/// Numeric fields are only present when `status` is `"ok"`; failures carry a
/// `message` instead.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct PredictionResponse {
    #[serde(default)]
    pub status: ApiStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub predicted_total_kwh: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub predicted_bill: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra_kwh: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra_cost: Option<f64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub appliance_impacts: Vec<ApplianceImpact>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_wire_shape() {
        let request = PredictionRequest {
            existing_kwh: 120.0,
            rate: 8.0,
            appliances: vec![ApplianceEntry {
                name: "Heater".to_string(),
                power_w: 2000.0,
                hours_per_day: 2.0,
                days: 30,
            }],
            days_in_month: 30,
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            json!({
                "existing_kwh": 120.0,
                "rate": 8.0,
                "appliances": [
                    {"name": "Heater", "power_w": 2000.0, "hours_per_day": 2.0, "days": 30}
                ],
                "days_in_month": 30
            })
        );
    }

    #[test]
    fn test_ok_response_from_backend() {
        let body = json!({
            "status": "ok",
            "predicted_total_kwh": 131.25,
            "predicted_bill": 1050.0,
            "extra_kwh": 11.25,
            "extra_cost": 90.0,
            "appliance_impacts": [{"name": "Fan", "kwh": 11.25, "cost": 90.0}]
        });

        let response: PredictionResponse = serde_json::from_value(body).unwrap();
        assert!(response.status.is_ok());
        assert_eq!(response.predicted_total_kwh, Some(131.25));
        assert_eq!(response.extra_kwh, Some(11.25));
        assert_eq!(response.appliance_impacts.len(), 1);
        assert_eq!(response.appliance_impacts[0].name, "Fan");
        assert!(response.message.is_none());
    }

    #[test]
    fn test_error_response_has_only_message() {
        let body = json!({"status": "error", "message": "bad input"});

        let response: PredictionResponse = serde_json::from_value(body).unwrap();
        assert!(!response.status.is_ok());
        assert_eq!(response.message.as_deref(), Some("bad input"));
        assert!(response.predicted_total_kwh.is_none());
        assert!(response.appliance_impacts.is_empty());
    }
}
