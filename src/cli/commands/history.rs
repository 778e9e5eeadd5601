use anyhow::Result;
use planner::{Planner, TransportError};
use tracing::{info, trace, warn};

use crate::client::ApiClient;
use crate::render;

/// Runs the startup history load and renders both charts as text.
///
/// A failed load renders nothing; the reason only goes to the log.
pub async fn history(client: &ApiClient) -> Result<String> {
    trace!("Entering history command");
    let mut planner = Planner::new();

    let outcome = client.monthly_data().await.map_err(TransportError::from);
    if let Err(e) = planner.load_history(outcome) {
        warn!("Usage history not available: {}", e);
        return Ok(String::new());
    }

    let mut report = String::new();
    if let Some(chart) = planner.history_chart() {
        info!("Rendering {} months of history", chart.labels.len());
        report.push_str(&render::history_table(chart));
    }
    if let Some(bars) = planner.comparison_chart() {
        report.push('\n');
        report.push_str(&render::comparison_bars(bars));
    }
    Ok(report)
}
