//! Plain-text projections of the planner state for the terminal.

use planner::{ApplianceLine, ComparisonChart, UsageHistoryChart, format_number};

const BAR_WIDTH: f64 = 40.0;

pub fn appliance_list(lines: &[ApplianceLine]) -> String {
    if lines.is_empty() {
        return "No appliances\n".to_string();
    }
    lines
        .iter()
        .map(|line| format!("[{}] {}\n", line.id, line.text))
        .collect()
}

/// One row per month, one column per series.
pub fn history_table(chart: &UsageHistoryChart) -> String {
    let mut out = format!("{:<10}", "Month");
    for series in &chart.series {
        out.push_str(&format!("{:>12}", series.label));
    }
    out.push('\n');

    for (row, month) in chart.labels.iter().enumerate() {
        out.push_str(&format!("{:<10}", month));
        for series in &chart.series {
            out.push_str(&format!("{:>12.2}", series.values[row]));
        }
        out.push('\n');
    }
    out
}

/// Horizontal bars scaled to the larger of the two values.
pub fn comparison_bars(chart: &ComparisonChart) -> String {
    let values = chart.values();
    let max = values.iter().cloned().fold(0.0_f64, f64::max);

    ComparisonChart::LABELS
        .iter()
        .zip(values)
        .map(|(label, value)| {
            let width = if max > 0.0 {
                (value.max(0.0) / max * BAR_WIDTH).round() as usize
            } else {
                0
            };
            format!(
                "{:<20}{:<41}{} {}\n",
                label,
                "#".repeat(width),
                format_number(value),
                ComparisonChart::DATASET_LABEL
            )
        })
        .collect()
}
