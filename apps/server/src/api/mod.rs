//! HTTP routing for the gateway API.
//!
//! Each resource gets its own module with private handlers and a
//! `pub fn router()`; everything is composed here under `/api/v1`.

mod health;
mod prices;
mod symbols;

use std::sync::Arc;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::main_lib::AppState;

pub fn app_router(state: Arc<AppState>) -> Router {
    let api = Router::new()
        .merge(symbols::router())
        .merge(prices::router())
        .merge(health::router());

    Router::new()
        .nest("/api/v1", api)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
