use axum::extract::State;
use axum::Json;
use serde::Serialize;

// ───── Current Crate Imports ────────────────────────────────────────────── //

use crate::domain::Timestamp;
use crate::startup::AppState;

// ───── Body ─────────────────────────────────────────────────────────────── //

#[derive(Serialize, Debug)]
pub struct HealthResponse {
    status: &'static str,
    /// Seconds since the process started.
    uptime: f64,
    timestamp: Timestamp,
}

#[tracing::instrument(name = "Health check", skip(state))]
pub async fn health_check(
    State(state): State<AppState>,
) -> Json<HealthResponse> {
    let uptime = state.uptime.seconds();
    tracing::debug!(uptime, "Reporting uptime");
    Json(HealthResponse {
        status: "OK",
        uptime,
        timestamp: Timestamp::now(),
    })
}
