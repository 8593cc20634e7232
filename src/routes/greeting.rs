use axum::extract::Path;
use axum::Json;
use serde::Serialize;

// ───── Current Crate Imports ────────────────────────────────────────────── //

use crate::domain::Timestamp;

// ───── Body ─────────────────────────────────────────────────────────────── //

#[derive(Serialize, Debug)]
pub struct GreetingResponse {
    message: String,
    timestamp: Timestamp,
}

/// The router has already percent-decoded `name`; it is used as is.
#[tracing::instrument(name = "Greeting a caller by name")]
pub async fn greeting(Path(name): Path<String>) -> Json<GreetingResponse> {
    Json(GreetingResponse {
        message: format!("Hello, {}!", name),
        timestamp: Timestamp::now(),
    })
}
