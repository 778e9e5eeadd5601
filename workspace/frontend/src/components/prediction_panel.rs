use planner::{PredictionView, format_number};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PredictionPanelProps {
    pub view: Option<PredictionView>,
}

#[function_component(PredictionPanel)]
pub fn prediction_panel(props: &PredictionPanelProps) -> Html {
    let body = match &props.view {
        None => html! {},
        Some(PredictionView::Failure(text)) => html! { {text.clone()} },
        Some(PredictionView::Summary(summary)) => html! {
            <>
                {"Predicted total kWh: "}<b>{format_number(summary.predicted_total_kwh)}</b>{" kWh"}<br />
                {"Predicted bill: "}<b>{format!("₹{}", format_number(summary.predicted_bill))}</b><br />
                {"Extra cost from appliances: "}<b>{format!("₹{}", format_number(summary.extra_cost))}</b>
                {if summary.impacts.is_empty() {
                    html! {}
                } else {
                    html! {
                        <>
                            <br /><b>{"Appliance impacts:"}</b>
                            <ul>
                                { for summary.impacts.iter().map(|impact| html! {
                                    <li>{format!("{}: {} kWh → ₹{}", impact.name, format_number(impact.kwh), format_number(impact.cost))}</li>
                                }) }
                            </ul>
                        </>
                    }
                }}
            </>
        },
    };

    html! {
        <div id="prediction_text" class="mt-4">{body}</div>
    }
}
