//! Chart models built from the monthly history.
//!
//! These hold exactly what the renderer draws. The browser hands them to
//! Plotly; the terminal prints them.

use common::MonthlyRecord;

/// One named line of the history chart.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub label: &'static str,
    pub values: Vec<f64>,
}

/// Line chart of monthly usage per zone plus the total.
#[derive(Debug, Clone, PartialEq)]
pub struct UsageHistoryChart {
    pub labels: Vec<String>,
    pub series: Vec<Series>,
}

impl UsageHistoryChart {
    pub fn from_records(records: &[MonthlyRecord]) -> Self {
        let column = |f: fn(&MonthlyRecord) -> f64| records.iter().map(f).collect::<Vec<_>>();

        Self {
            labels: records.iter().map(|r| r.month.clone()).collect(),
            series: vec![
                Series {
                    label: "Zone A kWh",
                    values: column(|r| r.zone_a_kwh),
                },
                Series {
                    label: "Zone B kWh",
                    values: column(|r| r.zone_b_kwh),
                },
                Series {
                    label: "Zone C kWh",
                    values: column(|r| r.zone_c_kwh),
                },
                Series {
                    label: "Total kWh",
                    values: column(|r| r.total_kwh_est),
                },
            ],
        }
    }
}

/// Two-bar chart: current monthly total against the predicted one.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonChart {
    values: [f64; 2],
}

impl ComparisonChart {
    pub const LABELS: [&'static str; 2] = ["Current total", "With new appliance"];
    pub const DATASET_LABEL: &'static str = "kWh";

    /// Both bars start at the most recent month's total. `None` without data.
    pub fn from_records(records: &[MonthlyRecord]) -> Option<Self> {
        records.last().map(|latest| Self {
            values: [latest.total_kwh_est, latest.total_kwh_est],
        })
    }

    pub fn values(&self) -> [f64; 2] {
        self.values
    }

    pub fn current(&self) -> f64 {
        self.values[0]
    }

    pub fn predicted(&self) -> f64 {
        self.values[1]
    }

    /// Moves the second bar; the first one keeps its value.
    pub fn show_prediction(&mut self, predicted_total_kwh: f64) {
        self.values[1] = predicted_total_kwh;
    }
}
