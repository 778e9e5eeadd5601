use common::{ApplianceEntry, MonthlyDataResponse, PredictionResponse};
use tracing::{debug, info, instrument, warn};

use crate::appliances::{ApplianceLine, ApplianceList, EntryId};
use crate::charts::{ComparisonChart, UsageHistoryChart};
use crate::error::{PlannerError, Result, TransportError};
use crate::form::{ApplianceDraft, BillingForm};
use crate::prediction::{PendingPrediction, PredictionController, PredictionView, RequestToken};

/// All client state of one planner page.
///
/// Front ends own one `Planner`, feed it user actions and decoded responses,
/// and redraw from its projections after every call that takes `&mut self`.
#[derive(Debug, Default)]
pub struct Planner {
    appliances: ApplianceList,
    prediction: PredictionController,
    history: Option<UsageHistoryChart>,
    comparison: Option<ComparisonChart>,
}

impl Planner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_appliance(&mut self, draft: &ApplianceDraft) -> EntryId {
        self.appliances.add(draft.to_entry())
    }

    pub fn remove_appliance(&mut self, id: EntryId) -> Option<ApplianceEntry> {
        self.appliances.remove(id)
    }

    pub fn appliances(&self) -> &ApplianceList {
        &self.appliances
    }

    pub fn appliance_lines(&self) -> Vec<ApplianceLine> {
        self.appliances.render()
    }

    /// Reads the billing form and snapshots the appliance list into a request.
    pub fn begin_prediction(&mut self, form: &BillingForm) -> PendingPrediction {
        let inputs = form.to_inputs();
        self.prediction.begin(&inputs, &self.appliances)
    }

    /// Applies a prediction outcome and, on success, moves the comparison
    /// chart's second bar to the predicted total.
    ///
    /// Returns `None` when the outcome belongs to a superseded request.
    #[instrument(skip(self, outcome))]
    pub fn finish_prediction(
        &mut self,
        token: RequestToken,
        outcome: std::result::Result<PredictionResponse, TransportError>,
    ) -> Option<&PredictionView> {
        let predicted = match self.prediction.complete(token, outcome)? {
            PredictionView::Summary(summary) => Some(summary.predicted_total_kwh),
            PredictionView::Failure(_) => None,
        };

        match (predicted, self.comparison.as_mut()) {
            (Some(total), Some(chart)) => chart.show_prediction(total),
            (Some(_), None) => debug!("No comparison chart yet, skipping bar update"),
            _ => {}
        }

        self.prediction.view()
    }

    pub fn prediction(&self) -> Option<&PredictionView> {
        self.prediction.view()
    }

    /// Builds both charts from the startup history fetch.
    ///
    /// A failed fetch leaves the charts as they were and is returned as an
    /// error; callers decide whether to show it.
    #[instrument(skip(self, outcome))]
    pub fn load_history(
        &mut self,
        outcome: std::result::Result<MonthlyDataResponse, TransportError>,
    ) -> Result<()> {
        let response = outcome?;
        if !response.status.is_ok() {
            let reason = response
                .message
                .unwrap_or_else(|| String::from(response.status));
            warn!("History not loaded: {}", reason);
            return Err(PlannerError::History(reason));
        }

        info!("Loaded {} months of history", response.data.len());
        self.history = Some(UsageHistoryChart::from_records(&response.data));
        self.comparison = ComparisonChart::from_records(&response.data);
        Ok(())
    }

    pub fn history_chart(&self) -> Option<&UsageHistoryChart> {
        self.history.as_ref()
    }

    pub fn comparison_chart(&self) -> Option<&ComparisonChart> {
        self.comparison.as_ref()
    }
}
