use axum::{extract::State, response::Json, routing::get, Router};
use attractions_shared::{now_utc, ApiResponse};
use serde_json::json;
use crate::app_state::AppState;

pub async fn health_check(
    State(app_state): State<AppState>,
) -> Json<ApiResponse<serde_json::Value>> {
    let health_data = json!({
        "status": "healthy",
        "timestamp": now_utc().timestamp(),
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "start_time": app_state.start_time,
        "uptime_seconds": app_state.uptime_seconds()
    });

    Json(ApiResponse::success(health_data))
}

pub fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
