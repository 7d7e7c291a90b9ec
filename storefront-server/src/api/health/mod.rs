//! Health API module

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;

use crate::core::ServerState;
use crate::utils::AppResponse;

pub fn router() -> Router<ServerState> {
    Router::new().route("/api/health", get(health))
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct HealthStatus {
    status: &'static str,
    uptime_seconds: i64,
    environment: String,
}

/// GET /api/health - liveness probe
async fn health(State(state): State<ServerState>) -> Json<AppResponse<HealthStatus>> {
    AppResponse::ok(HealthStatus {
        status: "ok",
        uptime_seconds: state.uptime_seconds(),
        environment: state.config.environment.clone(),
    })
}
