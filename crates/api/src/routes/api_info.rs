use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /api -- service self-description.
///
/// Documents the endpoints and the status-code contract so an operator
/// pointing an uptime monitor at the service does not need the README.
async fn api_info(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "service": "tempcheck",
        "version": env!("CARGO_PKG_VERSION"),
        "description": "Checks hardware temperature on each request - no background monitoring",
        "thresholds": state.monitor.thresholds(),
        "endpoints": [
            {
                "path": "/health",
                "method": "GET",
                "description": "Liveness probe - always returns 200",
            },
            {
                "path": "/temperature",
                "method": "GET",
                "description": "Check temperature (JSON response)",
                "responses": {
                    "200": "OK - Normal temperature",
                    "418": "WARNING - High temperature",
                    "503": "CRITICAL - Critical temperature",
                    "500": "ERROR - Sensor reading failed",
                },
            },
            {
                "path": "/api",
                "method": "GET",
                "description": "This document",
            },
        ],
        "usage": {
            "uptime_kuma": "Monitor /temperature every 60 seconds",
            "expected_status_codes": {
                "200": "Temperature OK",
                "418": "Temperature Warning (shows as degraded)",
                "503": "Temperature Critical (shows as down)",
                "500": "Sensor Error (shows as down)",
            },
        },
        "system": {
            "hostname": state.hostname,
        },
    }))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/api", get(api_info))
}
