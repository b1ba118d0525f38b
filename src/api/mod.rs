pub mod currency;
pub mod currencyapi_client;
pub mod status;

pub use currencyapi_client::CurrencyApiClient;

use std::sync::{Arc, Mutex};

use axum::routing::get;
use axum::Router;

use crate::counter::Counter;

/// Shared handler state. The rates client is built once from `Settings`;
/// `served` counts successful proxy lookups for the `/status` endpoint.
#[derive(Clone)]
pub struct AppState {
    pub rates: CurrencyApiClient,
    pub served: Arc<Mutex<Counter>>,
}

impl AppState {
    pub fn new(rates: CurrencyApiClient) -> Self {
        Self {
            rates,
            served: Arc::new(Mutex::new(Counter::new())),
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .nest("/api/currency", currency::routes())
        .route("/api/currency/", get(currency::missing_code))
        .route("/status", get(status::status))
        .route("/health", get(status::health))
        .with_state(state)
}
