use std::sync::Arc;

use crate::{error::ApiResult, main_lib::AppState};
use axum::{extract::State, routing::get, Json, Router};
use quotegate_market_data::Symbol;

/// List every symbol the upstream provider knows about, in provider order.
async fn get_all_symbols(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<Symbol>>> {
    tracing::info!("Received request for all symbols");
    let symbols = state.market_service.get_all_symbols().await?;
    Ok(Json(symbols))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/symbols", get(get_all_symbols))
}
