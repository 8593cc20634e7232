use axum::Json;
use serde::Serialize;

// ───── Current Crate Imports ────────────────────────────────────────────── //

use crate::domain::Timestamp;

// ───── Body ─────────────────────────────────────────────────────────────── //

pub const API_VERSION: &str = "1.0.0";

#[derive(Serialize, Debug)]
pub struct HomeResponse {
    message: &'static str,
    timestamp: Timestamp,
    version: &'static str,
}

#[tracing::instrument(name = "Serving the home greeting")]
pub async fn home() -> Json<HomeResponse> {
    Json(HomeResponse {
        message: "Hello World!",
        timestamp: Timestamp::now(),
        version: API_VERSION,
    })
}
