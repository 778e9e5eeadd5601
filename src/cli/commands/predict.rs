use anyhow::Result;
use clap::Args;
use planner::{ApplianceDraft, BillingForm, Planner, TransportError};
use tracing::{debug, info, trace, warn};

use crate::client::ApiClient;
use crate::render;

/// Inputs of the prediction form. Values are kept as typed and coerced the
/// same way the browser form is.
#[derive(Args, Debug, Clone, Default)]
pub struct PredictArgs {
    /// Current monthly usage in kWh (default 0)
    #[arg(short, long, default_value = "")]
    pub existing_kwh: String,

    /// Price per kWh (default 8)
    #[arg(short, long, default_value = "")]
    pub rate: String,

    /// Days in the billing month, also the default appliance days (default 30)
    #[arg(short, long, default_value = "")]
    pub days: String,

    /// Appliance as NAME:POWER_W:HOURS_PER_DAY[:DAYS], repeatable
    #[arg(short, long = "appliance")]
    pub appliances: Vec<String>,
}

/// Splits `NAME:POWER_W:HOURS_PER_DAY[:DAYS]`; missing parts stay empty and
/// fall back to their defaults, `DAYS` falls back to the month's days.
pub fn parse_appliance(value: &str, month_days: &str) -> ApplianceDraft {
    let mut parts = value.splitn(4, ':');
    let name = parts.next().unwrap_or_default();
    let power_w = parts.next().unwrap_or_default();
    let hours_per_day = parts.next().unwrap_or_default();
    let days = parts.next().unwrap_or(month_days);
    ApplianceDraft::new(name, power_w, hours_per_day, days)
}

/// Runs startup load, adds the appliances and issues one prediction.
pub async fn predict(client: &ApiClient, args: &PredictArgs) -> Result<String> {
    trace!("Entering predict command");
    let mut planner = Planner::new();

    // Same startup flow as the page: failures stay silent
    let history = client.monthly_data().await.map_err(TransportError::from);
    if let Err(e) = planner.load_history(history) {
        warn!("Comparison chart not initialized: {}", e);
    }

    for value in &args.appliances {
        let id = planner.add_appliance(&parse_appliance(value, &args.days));
        debug!("Added appliance #{} from {:?}", id, value);
    }

    let form = BillingForm::new(&args.existing_kwh, &args.rate, &args.days);
    let pending = planner.begin_prediction(&form);
    info!(
        "Predicting with {} appliances",
        pending.request.appliances.len()
    );
    let outcome = client
        .predict(&pending.request)
        .await
        .map_err(TransportError::from);

    let mut report = render::appliance_list(&planner.appliance_lines());
    report.push('\n');
    if let Some(view) = planner.finish_prediction(pending.token, outcome) {
        report.push_str(&view.to_text());
        report.push('\n');
    }
    if let Some(bars) = planner.comparison_chart() {
        report.push('\n');
        report.push_str(&render::comparison_bars(bars));
    }
    Ok(report)
}
