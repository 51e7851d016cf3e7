use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{HeaderName, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use tempcheck_core::error::AcquisitionError;
use tempcheck_core::sensors::{SensorSnapshot, SensorSource};
use tempcheck_core::thermal::{TemperatureMonitor, Thresholds};

use tempcheck_api::config::ServerConfig;
use tempcheck_api::routes;
use tempcheck_api::state::AppState;

/// Sensor source serving canned data, so integration tests never shell
/// out to the real `sensors` binary.
pub enum StubSensors {
    /// Acquisition succeeds with this JSON document.
    Snapshot(serde_json::Value),
    /// Acquisition fails the way a sensor-less host does.
    Fail,
}

#[async_trait]
impl SensorSource for StubSensors {
    async fn acquire(&self) -> Result<SensorSnapshot, AcquisitionError> {
        match self {
            Self::Snapshot(json) => {
                Ok(serde_json::from_value(json.clone()).expect("stub snapshot must be a JSON object"))
            }
            Self::Fail => Err(AcquisitionError::CommandFailed {
                exit_code: 1,
                stderr: "No sensors found!".into(),
            }),
        }
    }
}

/// Build a test `ServerConfig` with the default thresholds (70/80).
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        thresholds: Thresholds::default(),
        request_timeout_secs: 30,
    }
}

/// Build the full application router with all middleware layers, backed
/// by the given sensor source.
///
/// This mirrors the router construction in `main.rs` so integration
/// tests exercise the same middleware stack (request ID, timeout,
/// tracing, panic recovery) that production uses.
pub fn build_test_app(source: StubSensors) -> Router {
    let config = test_config();
    let monitor = Arc::new(TemperatureMonitor::new(config.thresholds, Arc::new(source)));
    let state = AppState::new(monitor, Arc::new(config));

    let request_id_header = HeaderName::from_static("x-request-id");

    routes::app_routes()
        .layer(CatchPanicLayer::new())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(30),
        ))
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(SetRequestIdLayer::new(request_id_header, MakeRequestUuid))
        .with_state(state)
}

/// Issue a GET request against the in-process router.
pub async fn get(app: Router, uri: &str) -> Response {
    app.oneshot(
        Request::builder()
            .uri(uri)
            .body(Body::empty())
            .expect("request must build"),
    )
    .await
    .expect("request must not fail at the transport level")
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body must collect")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body must be JSON")
}
