pub mod api_info;
pub mod health;
pub mod temperature;

use axum::http::{StatusCode, Uri};
use axum::{Json, Router};
use serde_json::{json, Value};

use crate::state::AppState;

/// Build the application route tree.
///
/// ```text
/// /health        liveness probe (always 200)
/// /temperature   on-demand sensor evaluation (200/418/503/500)
/// /api           service self-description
/// *              JSON 404 naming the available endpoints
/// ```
pub fn app_routes() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .merge(temperature::router())
        .merge(api_info::router())
        .fallback(not_found)
}

/// Fallback for unknown routes.
async fn not_found(uri: Uri) -> (StatusCode, Json<Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "error": "Not Found",
            "path": uri.path(),
            "available_endpoints": ["/health", "/temperature", "/api"],
            "message": "Use /api for documentation",
        })),
    )
}
