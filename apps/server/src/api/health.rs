use std::sync::Arc;

use crate::main_lib::AppState;
use axum::{routing::get, Json, Router};

#[derive(serde::Serialize)]
#[serde(rename_all = "camelCase")]
struct HealthStatus {
    status: &'static str,
    name: &'static str,
    version: &'static str,
}

async fn get_health() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "ok",
        name: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
    })
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/health", get(get_health))
}
