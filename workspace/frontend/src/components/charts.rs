use planner::{ComparisonChart, UsageHistoryChart};
use serde::Serialize;
use serde_json::{json, Value};
use wasm_bindgen::prelude::*;
use yew::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = Plotly)]
    pub fn newPlot(div_id: &str, data: JsValue, layout: JsValue, config: JsValue);

    #[wasm_bindgen(js_namespace = Plotly)]
    pub fn react(div_id: &str, data: JsValue, layout: JsValue, config: JsValue);
}

/// One line trace per series, sharing the month labels.
pub fn history_traces(chart: &UsageHistoryChart) -> Value {
    Value::Array(
        chart
            .series
            .iter()
            .map(|series| {
                json!({
                    "x": chart.labels,
                    "y": series.values,
                    "type": "scatter",
                    "mode": "lines+markers",
                    "name": series.label
                })
            })
            .collect(),
    )
}

pub fn comparison_traces(values: [f64; 2]) -> Value {
    json!([{
        "x": ComparisonChart::LABELS,
        "y": values,
        "type": "bar",
        "name": ComparisonChart::DATASET_LABEL
    }])
}

fn layout() -> Value {
    json!({
        "margin": {"t": 10, "r": 10, "l": 50, "b": 30},
        "paper_bgcolor": "rgba(0,0,0,0)",
        "plot_bgcolor": "rgba(0,0,0,0)",
        "xaxis": {"showgrid": false},
        "yaxis": {"showgrid": true, "gridcolor": "#eee", "title": {"text": "kWh"}},
        "showlegend": true,
        "legend": {"orientation": "h", "y": -0.2}
    })
}

/// Hands traces to Plotly. `redraw` reuses the existing plot in `div_id`.
fn plot(div_id: &str, traces: &Value, redraw: bool) {
    // Plain JS objects, not ES maps, or Plotly ignores the keys
    let serializer = serde_wasm_bindgen::Serializer::json_compatible();
    let config = json!({"responsive": true, "displayModeBar": false});

    let converted = (
        traces.serialize(&serializer),
        layout().serialize(&serializer),
        config.serialize(&serializer),
    );
    match converted {
        (Ok(data), Ok(layout), Ok(config)) => {
            if redraw {
                react(div_id, data, layout, config);
            } else {
                newPlot(div_id, data, layout, config);
            }
        }
        _ => log::error!("Failed to convert chart {} for Plotly", div_id),
    }
}

#[derive(Properties, PartialEq)]
pub struct HistoryChartProps {
    pub chart: Option<UsageHistoryChart>,
}

#[function_component(HistoryChart)]
pub fn history_chart(props: &HistoryChartProps) -> Html {
    use_effect_with(props.chart.clone(), move |chart| {
        if let Some(chart) = chart {
            log::debug!("Drawing history chart with {} months", chart.labels.len());
            plot("lineChart", &history_traces(chart), false);
        }
        || ()
    });

    html! {
        <div id="lineChart" class="chart-container" style="height: 300px;"></div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ComparisonBarsProps {
    pub values: Option<[f64; 2]>,
}

#[function_component(ComparisonBars)]
pub fn comparison_bars(props: &ComparisonBarsProps) -> Html {
    let drawn = use_mut_ref(|| false);

    use_effect_with(props.values, move |values| {
        if let Some(values) = values {
            let redraw = *drawn.borrow();
            log::debug!("Drawing comparison bars {:?} (redraw: {})", values, redraw);
            plot("barChart", &comparison_traces(*values), redraw);
            *drawn.borrow_mut() = true;
        }
        || ()
    });

    html! {
        <div id="barChart" class="chart-container" style="height: 300px;"></div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::MonthlyRecord;

    #[test]
    fn test_history_traces_follow_series() {
        let chart = UsageHistoryChart::from_records(&[MonthlyRecord {
            month: "Jan".to_string(),
            total_kwh_est: 100.0,
            zone_a_kwh: 40.0,
            zone_b_kwh: 30.0,
            zone_c_kwh: 30.0,
        }]);

        let traces = history_traces(&chart);
        let traces = traces.as_array().unwrap();
        assert_eq!(traces.len(), 4);
        assert_eq!(traces[0]["name"], "Zone A kWh");
        assert_eq!(traces[3]["name"], "Total kWh");
        assert_eq!(traces[3]["y"], json!([100.0]));
        assert_eq!(traces[0]["x"], json!(["Jan"]));
    }

    #[test]
    fn test_comparison_trace() {
        let traces = comparison_traces([100.0, 131.25]);
        assert_eq!(traces[0]["type"], "bar");
        assert_eq!(traces[0]["x"], json!(["Current total", "With new appliance"]));
        assert_eq!(traces[0]["y"], json!([100.0, 131.25]));
    }
}
