use std::sync::Arc;

use crate::config::Config;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use quotegate_core::{MarketDataService, MarketDataServiceTrait};
use quotegate_market_data::{IexProvider, MarketDataProvider};

pub struct AppState {
    pub market_service: Arc<dyn MarketDataServiceTrait + Send + Sync>,
}

pub fn init_tracing() {
    let log_format = std::env::var("QG_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub fn build_state(config: &Config) -> Arc<AppState> {
    if config.iex_token.is_empty() {
        tracing::warn!("QG_IEX_TOKEN is not set; upstream calls will be rejected by the provider");
    }

    let provider: Arc<dyn MarketDataProvider> = match &config.iex_base_url {
        Some(base_url) => {
            tracing::info!("Using upstream base URL override: {}", base_url);
            Arc::new(IexProvider::with_base_url(
                config.iex_token.clone(),
                base_url.clone(),
            ))
        }
        None => Arc::new(IexProvider::new(config.iex_token.clone())),
    };

    let market_service = Arc::new(MarketDataService::new(provider));

    Arc::new(AppState { market_service })
}
