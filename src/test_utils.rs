#[cfg(test)]
pub mod test_utils {
    use axum::{
        Json, Router,
        extract::State,
        http::StatusCode,
        routing::{get, post},
    };
    use common::{
        ApiStatus, ApplianceImpact, MonthlyDataResponse, MonthlyRecord, PredictionRequest,
        PredictionResponse,
    };
    use serde_json::{Value, json};
    use std::sync::{Arc, Mutex};
    use tokio::net::TcpListener;
    use tracing::Level;
    use tracing_subscriber::FmtSubscriber;

    /// Prediction requests received by the stub, in arrival order
    pub type Received = Arc<Mutex<Vec<PredictionRequest>>>;

    /// Initialize tracing for tests with output to STDERR.
    ///
    /// The log level is determined by the RUST_LOG environment variable,
    /// defaulting to WARN if not set. Keep the guard alive for the test.
    pub fn init_test_tracing() -> tracing::subscriber::DefaultGuard {
        let log_level = std::env::var("RUST_LOG")
            .ok()
            .and_then(|level| match level.to_uppercase().as_str() {
                "ERROR" => Some(Level::ERROR),
                "WARN" => Some(Level::WARN),
                "INFO" => Some(Level::INFO),
                "DEBUG" => Some(Level::DEBUG),
                "TRACE" => Some(Level::TRACE),
                _ => None,
            })
            .unwrap_or(Level::WARN);

        let subscriber = FmtSubscriber::builder()
            .with_max_level(log_level)
            .with_writer(std::io::stderr)
            .finish();
        tracing::subscriber::set_default(subscriber)
    }

    /// Serve `router` on a random local port, returning its base URL
    pub async fn spawn_backend(router: Router) -> String {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind stub backend");
        let address = listener.local_addr().expect("Stub backend has no address");
        tokio::spawn(async move {
            axum::serve(listener, router)
                .await
                .expect("Stub backend crashed");
        });
        format!("http://{}", address)
    }

    pub fn sample_history() -> MonthlyDataResponse {
        MonthlyDataResponse {
            status: ApiStatus::Ok,
            data: vec![
                MonthlyRecord {
                    month: "2010-10".to_string(),
                    total_kwh_est: 90.0,
                    zone_a_kwh: 30.0,
                    zone_b_kwh: 20.0,
                    zone_c_kwh: 40.0,
                },
                MonthlyRecord {
                    month: "2010-11".to_string(),
                    total_kwh_est: 100.0,
                    zone_a_kwh: 40.0,
                    zone_b_kwh: 30.0,
                    zone_c_kwh: 30.0,
                },
            ],
            message: None,
        }
    }

    async fn healthy_data() -> Json<MonthlyDataResponse> {
        Json(sample_history())
    }

    /// Answers like the real backend: kWh = W * h * days / 1000
    async fn healthy_predict(
        State(received): State<Received>,
        Json(request): Json<PredictionRequest>,
    ) -> Json<PredictionResponse> {
        let impacts: Vec<ApplianceImpact> = request
            .appliances
            .iter()
            .map(|a| {
                let kwh = a.power_w * a.hours_per_day * a.days as f64 / 1000.0;
                ApplianceImpact {
                    name: a.name.clone(),
                    kwh,
                    cost: kwh * request.rate,
                }
            })
            .collect();
        let extra_kwh: f64 = impacts.iter().map(|i| i.kwh).sum();
        let total = request.existing_kwh + extra_kwh;

        received.lock().expect("poisoned").push(request.clone());

        Json(PredictionResponse {
            status: ApiStatus::Ok,
            predicted_total_kwh: Some(total),
            predicted_bill: Some(total * request.rate),
            extra_kwh: Some(extra_kwh),
            extra_cost: Some(extra_kwh * request.rate),
            appliance_impacts: impacts,
            message: None,
        })
    }

    /// Backend that serves history and predictions
    pub fn healthy_backend() -> (Router, Received) {
        let received = Received::default();
        let router = Router::new()
            .route("/api/data", get(healthy_data))
            .route("/api/predict", post(healthy_predict))
            .with_state(received.clone());
        (router, received)
    }

    /// Backend that reports failures in its JSON bodies
    pub fn refusing_backend() -> Router {
        Router::new()
            .route(
                "/api/data",
                get(|| async { Json(json!({"status": "error", "message": "monthly CSV missing"})) }),
            )
            .route(
                "/api/predict",
                post(|| async {
                    (
                        StatusCode::BAD_REQUEST,
                        Json(json!({"status": "error", "message": "bad input"})),
                    )
                }),
            )
    }

    /// Backend that answers with non-JSON bodies
    pub fn broken_backend() -> Router {
        Router::new()
            .route("/api/data", get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }))
            .route("/api/predict", post(|| async { (StatusCode::OK, "<html>not json</html>") }))
    }

    pub fn as_value(request: &PredictionRequest) -> Value {
        serde_json::to_value(request).expect("request serializes")
    }
}
