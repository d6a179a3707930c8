//! Orchestrating service between the HTTP surface and the upstream provider.

use std::sync::Arc;

use async_trait::async_trait;
use log::info;

use quotegate_market_data::{HistoricalPrice, LastTradedPrice, MarketDataProvider, Symbol};

use crate::errors::{Error, Result};

/// Range token that selects the date-specific historical endpoint variant.
pub const SPECIFIC_DATE_RANGE: &str = "date";

/// Trait for market data service operations
#[async_trait]
pub trait MarketDataServiceTrait: Send + Sync {
    /// Get all symbols known to the provider, in provider order.
    async fn get_all_symbols(&self) -> Result<Vec<Symbol>>;

    /// Get the last traded price for each symbol that is passed in.
    ///
    /// An empty list is a valid no-op: the result is empty and the provider
    /// is never called.
    async fn get_last_traded_prices(&self, symbols: &[String]) -> Result<Vec<LastTradedPrice>>;

    /// Get historical prices for one symbol over the requested window.
    ///
    /// `date` is only honored when `range` is the literal
    /// [`SPECIFIC_DATE_RANGE`] token; for any other range it is dropped.
    async fn get_historical_prices(
        &self,
        symbol: &str,
        range: &str,
        date: Option<&str>,
    ) -> Result<Vec<HistoricalPrice>>;
}

/// A layer for the parameter branching required when retrieving data from the
/// upstream provider. Everything it returns comes back from the provider
/// unchanged.
pub struct MarketDataService {
    provider: Arc<dyn MarketDataProvider>,
}

impl MarketDataService {
    /// Create a new service around an injected provider handle.
    pub fn new(provider: Arc<dyn MarketDataProvider>) -> Self {
        Self { provider }
    }
}

#[async_trait]
impl MarketDataServiceTrait for MarketDataService {
    async fn get_all_symbols(&self) -> Result<Vec<Symbol>> {
        Ok(self.provider.fetch_all_symbols().await?)
    }

    async fn get_last_traded_prices(&self, symbols: &[String]) -> Result<Vec<LastTradedPrice>> {
        // A zero-symbol call is undefined upstream; answer it locally.
        if symbols.is_empty() {
            return Ok(Vec::new());
        }
        Ok(self.provider.fetch_last_traded_prices(symbols).await?)
    }

    async fn get_historical_prices(
        &self,
        symbol: &str,
        range: &str,
        date: Option<&str>,
    ) -> Result<Vec<HistoricalPrice>> {
        if range == SPECIFIC_DATE_RANGE {
            let date = date.ok_or_else(|| {
                Error::Validation(format!(
                    "query parameter 'date' is required when range is '{}'",
                    SPECIFIC_DATE_RANGE
                ))
            })?;
            info!(
                "Fetching historical prices from {}: symbol = {} | date = {}",
                self.provider.id(),
                symbol,
                date
            );
            Ok(self
                .provider
                .fetch_historical_prices_for_date(symbol, date)
                .await?)
        } else {
            // Any supplied date is dropped for relative ranges.
            info!(
                "Fetching historical prices from {}: symbol = {} | range = {}",
                self.provider.id(),
                symbol,
                range
            );
            Ok(self.provider.fetch_historical_prices(symbol, range).await?)
        }
    }
}
