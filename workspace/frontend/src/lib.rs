use planner::{ApplianceDraft, BillingForm, EntryId, Planner, TransportError};
use web_sys::HtmlInputElement;
use yew::prelude::*;

mod components;
pub mod api_client;
pub mod settings;

use components::appliance_list::ApplianceList;
use components::charts::{ComparisonBars, HistoryChart};
use components::prediction_panel::PredictionPanel;

fn input_value(node: &NodeRef) -> String {
    node.cast::<HtmlInputElement>()
        .map(|input| input.value())
        .unwrap_or_default()
}

#[function_component(App)]
pub fn app() -> Html {
    let planner = use_mut_ref(Planner::new);
    let update = use_force_update();

    let ap_name = use_node_ref();
    let ap_power = use_node_ref();
    let ap_hours = use_node_ref();
    let days = use_node_ref();
    let existing_kwh = use_node_ref();
    let rate = use_node_ref();

    // Startup history load, once
    {
        let planner = planner.clone();
        let update = update.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                let outcome = api_client::history::get_monthly_data()
                    .await
                    .map_err(TransportError::new);
                // Failures stay out of the page, charts simply never appear
                if let Err(e) = planner.borrow_mut().load_history(outcome) {
                    log::warn!("Charts not initialized: {}", e);
                }
                update.force_update();
            });
            || ()
        });
    }

    let on_add = {
        let planner = planner.clone();
        let update = update.clone();
        let (ap_name, ap_power, ap_hours, days) =
            (ap_name.clone(), ap_power.clone(), ap_hours.clone(), days.clone());
        Callback::from(move |_: MouseEvent| {
            let draft = ApplianceDraft::new(
                input_value(&ap_name),
                input_value(&ap_power),
                input_value(&ap_hours),
                input_value(&days),
            );
            let id = planner.borrow_mut().add_appliance(&draft);
            log::info!("Added appliance #{}", id);
            update.force_update();
        })
    };

    let on_remove = {
        let planner = planner.clone();
        let update = update.clone();
        Callback::from(move |id: EntryId| {
            planner.borrow_mut().remove_appliance(id);
            update.force_update();
        })
    };

    let on_predict = {
        let planner = planner.clone();
        let update = update.clone();
        let (existing_kwh, rate, days) = (existing_kwh.clone(), rate.clone(), days.clone());
        Callback::from(move |_: MouseEvent| {
            let form = BillingForm::new(
                input_value(&existing_kwh),
                input_value(&rate),
                input_value(&days),
            );
            let pending = planner.borrow_mut().begin_prediction(&form);

            let planner = planner.clone();
            let update = update.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let outcome = api_client::prediction::predict(&pending.request)
                    .await
                    .map_err(TransportError::new);
                if planner
                    .borrow_mut()
                    .finish_prediction(pending.token, outcome)
                    .is_none()
                {
                    log::debug!("Prediction superseded by a newer request");
                }
                update.force_update();
            });
        })
    };

    let state = planner.borrow();
    let lines = state.appliance_lines();
    let view = state.prediction().cloned();
    let history = state.history_chart().cloned();
    let bars = state.comparison_chart().map(|chart| chart.values());
    drop(state);

    html! {
        <main class="container mx-auto p-4 space-y-6">
            <h1 class="text-2xl font-bold">{"Electricity bill planner"}</h1>

            <section class="grid grid-cols-3 gap-4">
                <label class="form-control">
                    <span class="label-text">{"Existing usage (kWh)"}</span>
                    <input ref={existing_kwh} id="existing_kwh" type="number" class="input input-bordered" />
                </label>
                <label class="form-control">
                    <span class="label-text">{"Rate (₹/kWh)"}</span>
                    <input ref={rate} id="rate" type="number" class="input input-bordered" placeholder="8" />
                </label>
                <label class="form-control">
                    <span class="label-text">{"Days"}</span>
                    <input ref={days} id="days" type="number" class="input input-bordered" placeholder="30" />
                </label>
            </section>

            <section class="grid grid-cols-4 gap-4 items-end">
                <label class="form-control">
                    <span class="label-text">{"Appliance"}</span>
                    <input ref={ap_name} id="ap_name" type="text" class="input input-bordered" placeholder="Heater" />
                </label>
                <label class="form-control">
                    <span class="label-text">{"Power (W)"}</span>
                    <input ref={ap_power} id="ap_power" type="number" class="input input-bordered" />
                </label>
                <label class="form-control">
                    <span class="label-text">{"Hours per day"}</span>
                    <input ref={ap_hours} id="ap_hours" type="number" class="input input-bordered" />
                </label>
                <button id="add_appliance" class="btn" onclick={on_add}>{"Add appliance"}</button>
            </section>

            <ApplianceList {lines} {on_remove} />

            <button id="predict_btn" class="btn btn-primary" onclick={on_predict}>{"Predict bill"}</button>
            <PredictionPanel {view} />

            <section class="grid grid-cols-2 gap-4">
                <HistoryChart chart={history} />
                <ComparisonBars values={bars} />
            </section>
        </main>
    }
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn run_app() {
    // Initialize settings first
    settings::init_settings();

    // Initialize logger with settings
    let settings = settings::get_settings();
    wasm_logger::init(wasm_logger::Config::new(settings.log_level));

    log::info!("=== Bill planner frontend starting ===");
    log::info!("Application settings: {:?}", settings);
    log::debug!("Debug mode: {}", settings.debug_mode);

    log::trace!("Initializing Yew renderer");
    yew::Renderer::<App>::new().render();
    log::info!("Application initialized successfully");
}
