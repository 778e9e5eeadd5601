//! Prediction request/response handling.
//!
//! Each trigger is stamped with a [`RequestToken`]. Only the completion of the
//! most recently issued request is applied; anything older that finishes
//! late is dropped, so overlapping requests cannot overwrite a newer answer.

use common::{ApplianceImpact, PredictionRequest, PredictionResponse};
use tracing::{debug, info, warn};

use crate::appliances::ApplianceList;
use crate::error::{PlannerError, Result, TransportError};
use crate::form::BillingInputs;
use crate::number::format_number;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestToken(u64);

/// A request that has been built but not yet answered.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingPrediction {
    pub token: RequestToken,
    pub request: PredictionRequest,
}

/// Successful prediction, ready for display.
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionSummary {
    pub predicted_total_kwh: f64,
    pub predicted_bill: f64,
    pub extra_cost: f64,
    pub impacts: Vec<ApplianceImpact>,
}

impl PredictionSummary {
    fn from_response(response: PredictionResponse) -> Result<Self> {
        Ok(Self {
            predicted_total_kwh: response
                .predicted_total_kwh
                .ok_or(PlannerError::IncompleteResponse("predicted_total_kwh"))?,
            predicted_bill: response
                .predicted_bill
                .ok_or(PlannerError::IncompleteResponse("predicted_bill"))?,
            extra_cost: response
                .extra_cost
                .ok_or(PlannerError::IncompleteResponse("extra_cost"))?,
            impacts: response.appliance_impacts,
        })
    }
}

/// What the prediction output area shows.
#[derive(Debug, Clone, PartialEq)]
pub enum PredictionView {
    Summary(PredictionSummary),
    /// Full error line, e.g. `"Error: bad input"`
    Failure(String),
}

impl PredictionView {
    fn failure(detail: impl std::fmt::Display) -> Self {
        Self::Failure(format!("Error: {}", detail))
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// Plain-text rendering of the output area.
    pub fn to_text(&self) -> String {
        match self {
            Self::Failure(text) => text.clone(),
            Self::Summary(summary) => {
                let mut text = format!(
                    "Predicted total kWh: {} kWh\nPredicted bill: ₹{}\nExtra cost from appliances: ₹{}",
                    format_number(summary.predicted_total_kwh),
                    format_number(summary.predicted_bill),
                    format_number(summary.extra_cost)
                );
                if !summary.impacts.is_empty() {
                    text.push_str("\nAppliance impacts:");
                    for impact in &summary.impacts {
                        text.push_str(&format!(
                            "\n- {}: {} kWh → ₹{}",
                            impact.name,
                            format_number(impact.kwh),
                            format_number(impact.cost)
                        ));
                    }
                }
                text
            }
        }
    }
}

/// Issues prediction requests and keeps the latest view.
#[derive(Debug, Default)]
pub struct PredictionController {
    issued: u64,
    view: Option<PredictionView>,
}

impl PredictionController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a request from the current inputs and a snapshot of the list.
    pub fn begin(&mut self, inputs: &BillingInputs, appliances: &ApplianceList) -> PendingPrediction {
        self.issued += 1;
        let token = RequestToken(self.issued);
        debug!(
            "Issuing prediction request {:?} with {} appliances",
            token,
            appliances.len()
        );

        PendingPrediction {
            token,
            request: PredictionRequest {
                existing_kwh: inputs.existing_kwh,
                rate: inputs.rate,
                appliances: appliances.to_wire(),
                days_in_month: inputs.days_in_month,
            },
        }
    }

    fn is_latest(&self, token: RequestToken) -> bool {
        token.0 == self.issued
    }

    /// Applies the outcome of the request stamped with `token`.
    ///
    /// Returns the new view, or `None` when a newer request has been issued
    /// since and this outcome was dropped.
    pub fn complete(
        &mut self,
        token: RequestToken,
        outcome: std::result::Result<PredictionResponse, TransportError>,
    ) -> Option<&PredictionView> {
        if !self.is_latest(token) {
            debug!(
                "Dropping stale prediction {:?}, latest is {}",
                token, self.issued
            );
            return None;
        }

        let view = match outcome {
            Ok(response) if response.status.is_ok() => {
                match PredictionSummary::from_response(response) {
                    Ok(summary) => {
                        info!(
                            "Prediction {:?}: {} kWh, bill {}",
                            token, summary.predicted_total_kwh, summary.predicted_bill
                        );
                        PredictionView::Summary(summary)
                    }
                    Err(e) => {
                        warn!("Prediction {:?} rejected: {}", token, e);
                        PredictionView::failure(e)
                    }
                }
            }
            Ok(response) => {
                let message = response
                    .message
                    .unwrap_or_else(|| "unknown error".to_string());
                warn!("Backend refused prediction {:?}: {}", token, message);
                PredictionView::failure(message)
            }
            Err(e) => {
                warn!("Prediction {:?} failed in transport: {}", token, e);
                PredictionView::failure(e)
            }
        };

        self.view = Some(view);
        self.view.as_ref()
    }

    pub fn view(&self) -> Option<&PredictionView> {
        self.view.as_ref()
    }
}
