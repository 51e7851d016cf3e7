use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{routing::get, Json, Router};
use serde::Serialize;

use tempcheck_core::thermal::{TempStatus, Thresholds};
use tempcheck_core::types::Timestamp;

use crate::state::AppState;

/// JSON body of one temperature check.
#[derive(Debug, Serialize)]
pub struct TemperatureResponse {
    /// Reduced temperature in °C (0 when no reading could be obtained).
    pub temperature: f64,
    /// Evaluation status (OK / WARNING / CRITICAL / ERROR).
    pub status: TempStatus,
    /// Unit label for dashboards.
    pub unit: &'static str,
    /// The active classification thresholds.
    pub thresholds: Thresholds,
    /// When the reading was taken (ISO-8601, UTC).
    pub timestamp: Timestamp,
    /// Identity of the host whose sensors were read.
    pub hostname: String,
}

/// GET /temperature -- run one on-demand evaluation.
///
/// The HTTP status code carries the verdict for uptime monitors: 200 OK,
/// 418 WARNING, 503 CRITICAL, 500 ERROR. The handler is infallible --
/// sensor failures arrive as an `Error` reading and surface as a
/// well-formed 500 body, never as a dropped connection.
async fn check_temperature(State(state): State<AppState>) -> Response {
    let reading = state.monitor.evaluate().await;

    let status = StatusCode::from_u16(reading.status.http_status())
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    let body = TemperatureResponse {
        temperature: reading.temperature,
        status: reading.status,
        unit: "°C",
        thresholds: state.monitor.thresholds(),
        timestamp: reading.timestamp,
        hostname: state.hostname.clone(),
    };

    (status, Json(body)).into_response()
}

pub fn router() -> Router<AppState> {
    Router::new().route("/temperature", get(check_temperature))
}
