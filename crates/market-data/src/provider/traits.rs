//! Market data provider trait definitions.

use async_trait::async_trait;

use crate::errors::MarketDataError;
use crate::models::{HistoricalPrice, LastTradedPrice, Symbol};

/// Trait for the upstream market data provider.
///
/// This is the minimum surface the service layer consumes. Implementations
/// carry only read-only configuration (HTTP client, base URL, credentials),
/// so a single instance is safely shared across concurrent requests.
///
/// Every operation is one stateless request/response turn against the
/// provider; errors come back unmodified, with no retry or fallback.
#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Unique identifier for this provider.
    ///
    /// Should be a constant string like "IEX_CLOUD". Used for logging and
    /// error attribution.
    fn id(&self) -> &'static str;

    /// Fetch every symbol the provider knows about.
    ///
    /// Returns the listing in the order the provider sent it.
    async fn fetch_all_symbols(&self) -> Result<Vec<Symbol>, MarketDataError>;

    /// Fetch the last traded price for each of the given symbols.
    ///
    /// The whole list goes out as one batched call. Symbols the provider
    /// does not recognize are simply absent from the result; callers must
    /// not pass an empty list (the service layer short-circuits that case
    /// before it reaches a provider).
    async fn fetch_last_traded_prices(
        &self,
        symbols: &[String],
    ) -> Result<Vec<LastTradedPrice>, MarketDataError>;

    /// Fetch historical prices for a symbol over a relative range token
    /// (e.g. "1m", "5d", "ytd").
    async fn fetch_historical_prices(
        &self,
        symbol: &str,
        range: &str,
    ) -> Result<Vec<HistoricalPrice>, MarketDataError>;

    /// Fetch historical prices for a symbol on one specific date.
    ///
    /// Used when the caller requested the "date" range variant; `date` is
    /// forwarded to the provider in whatever format the caller supplied.
    async fn fetch_historical_prices_for_date(
        &self,
        symbol: &str,
        date: &str,
    ) -> Result<Vec<HistoricalPrice>, MarketDataError>;
}
