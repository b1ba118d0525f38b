use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::Value;
use tracing::{info, warn};

use super::AppState;
use crate::error::AppError;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(missing_code))
        .route("/:code", get(latest_rates))
}

/// `GET /api/currency/:code` — forward the lookup to the upstream provider
/// and relay its `data` payload verbatim. The code is not validated beyond
/// being non-blank; unknown codes are the upstream's problem.
async fn latest_rates(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<Value>, AppError> {
    let code = code.trim();
    if code.is_empty() {
        return Err(AppError::BadRequest("currency code is required".to_string()));
    }

    let data = match state.rates.latest(code).await {
        Ok(data) => data,
        Err(e) => {
            warn!(code, error = %e, "currency lookup failed");
            return Err(e);
        }
    };

    state
        .served
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
        .increment();
    info!(code, "currency lookup served");

    Ok(Json(data))
}

// Matches `/api/currency` and `/api/currency/`: reject before any outbound
// call instead of surfacing a routing 404.
pub(super) async fn missing_code() -> AppError {
    AppError::BadRequest("currency code is required".to_string())
}
