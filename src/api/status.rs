use axum::extract::State;
use axum::Json;
use serde::Serialize;

use super::AppState;

#[derive(Serialize)]
pub struct StatusResponse {
    pub requests_served: u64,
    pub double_count: u64,
    pub triple_count: u64,
}

pub async fn status(State(state): State<AppState>) -> Json<StatusResponse> {
    let counter = *state
        .served
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());

    Json(StatusResponse {
        requests_served: counter.count(),
        double_count: counter.double_count(),
        triple_count: counter.triple_count(),
    })
}

pub async fn health() -> &'static str {
    "ok"
}
