use std::sync::Arc;

use crate::{error::ApiResult, main_lib::AppState};
use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use quotegate_market_data::{HistoricalPrice, LastTradedPrice};

#[derive(serde::Deserialize)]
struct LastPricesQuery {
    /// Comma-separated list of symbols.
    symbols: Option<String>,
}

/// Get the last traded price for each of the symbols passed in.
///
/// Symbols the upstream does not recognize are omitted by the upstream, not
/// filtered here. An absent or empty `symbols` parameter yields `[]`.
async fn get_last_traded_prices(
    State(state): State<Arc<AppState>>,
    Query(query): Query<LastPricesQuery>,
) -> ApiResult<Json<Vec<LastTradedPrice>>> {
    let symbols: Vec<String> = query
        .symbols
        .as_deref()
        .unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect();
    tracing::info!(
        "Received last-traded-price request: symbols = {:?}",
        symbols
    );
    let prices = state.market_service.get_last_traded_prices(&symbols).await?;
    Ok(Json(prices))
}

#[derive(serde::Deserialize)]
struct HistoricalQuery {
    /// Specific date, honored only when the range is "date".
    date: Option<String>,
}

/// Get historical prices for one symbol over the given time range.
async fn get_historical_prices(
    State(state): State<Arc<AppState>>,
    Path((symbol, range)): Path<(String, String)>,
    Query(query): Query<HistoricalQuery>,
) -> ApiResult<Json<Vec<HistoricalPrice>>> {
    tracing::info!(
        "Received historical-price request: symbol = {} | range = {} | date = {:?}",
        symbol,
        range,
        query.date
    );
    let prices = state
        .market_service
        .get_historical_prices(&symbol, &range, query.date.as_deref())
        .await?;
    Ok(Json(prices))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/prices/last", get(get_last_traded_prices))
        .route(
            "/prices/historical/{symbol}/{range}",
            get(get_historical_prices),
        )
}
