use serde::{Deserialize, Serialize};

use crate::ApiStatus;

/// Aggregated usage for one month, split by sub-meter zone.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MonthlyRecord {
    pub month: String,
    pub total_kwh_est: f64,
    #[serde(rename = "zone_A_kwh")]
    pub zone_a_kwh: f64,
    #[serde(rename = "zone_B_kwh")]
    pub zone_b_kwh: f64,
    #[serde(rename = "zone_C_kwh")]
    pub zone_c_kwh: f64,
}

/// Response body of `GET /api/data`, ordered oldest month first.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct MonthlyDataResponse {
    #[serde(default)]
    pub status: ApiStatus,
    #[serde(default)]
    pub data: Vec<MonthlyRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_zone_fields_keep_backend_names() {
        let record = MonthlyRecord {
            month: "2010-01".to_string(),
            total_kwh_est: 100.0,
            zone_a_kwh: 40.0,
            zone_b_kwh: 30.0,
            zone_c_kwh: 30.0,
        };

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["zone_A_kwh"], 40.0);
        assert_eq!(value["zone_B_kwh"], 30.0);
        assert_eq!(value["zone_C_kwh"], 30.0);
    }

    #[test]
    fn test_extra_csv_columns_are_ignored() {
        let body = json!({
            "status": "ok",
            "data": [{
                "dt": "2010-01-31",
                "month": "2010-01",
                "total_kwh_est": 100.0,
                "zone_A_kwh": 40.0,
                "zone_B_kwh": 30.0,
                "zone_C_kwh": 30.0
            }]
        });

        let response: MonthlyDataResponse = serde_json::from_value(body).unwrap();
        assert!(response.status.is_ok());
        assert_eq!(response.data[0].month, "2010-01");
    }

    #[test]
    fn test_missing_csv_error() {
        let body = json!({"status": "error", "message": "monthly CSV missing"});

        let response: MonthlyDataResponse = serde_json::from_value(body).unwrap();
        assert!(!response.status.is_ok());
        assert!(response.data.is_empty());
        assert_eq!(response.message.as_deref(), Some("monthly CSV missing"));
    }
}
