//! IEX Cloud provider implementation.
//!
//! Fetches symbol listings and prices from the IEX Cloud REST API with
//! token query-parameter authentication.
//!
//! # API Endpoints
//!
//! - Symbol listing: `https://cloud.iexapis.com/v1/ref-data/symbols`
//! - Last traded prices: `https://cloud.iexapis.com/v1/tops/last?symbols={a,b,c}`
//! - Historical range: `https://cloud.iexapis.com/v1/stock/{symbol}/chart/{range}`
//! - Historical date: `https://cloud.iexapis.com/v1/stock/{symbol}/chart/date/{date}?chartByDay=true`
//!
//! All endpoints return JSON arrays which deserialize directly into the
//! crate's transfer models.

use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde::de::DeserializeOwned;

use std::time::Duration;

use crate::errors::MarketDataError;
use crate::models::{HistoricalPrice, LastTradedPrice, Symbol};
use crate::provider::MarketDataProvider;

const BASE_URL: &str = "https://cloud.iexapis.com/v1";
const PROVIDER_ID: &str = "IEX_CLOUD";

/// Default HTTP request timeout
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// IEX Cloud provider for symbol listings and price data.
///
/// # Example
///
/// ```ignore
/// let provider = IexProvider::new("your-api-token".to_string());
/// let symbols = provider.fetch_all_symbols().await?;
/// ```
pub struct IexProvider {
    client: Client,
    base_url: String,
    token: String,
}

impl IexProvider {
    /// Create a new IEX Cloud provider with the given API token.
    pub fn new(token: String) -> Self {
        Self::with_base_url(token, BASE_URL.to_string())
    }

    /// Create a provider against a non-default base URL (sandbox, test server).
    pub fn with_base_url(token: String, base_url: String) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
        }
    }

    fn symbols_url(&self) -> String {
        format!("{}/ref-data/symbols?token={}", self.base_url, self.token)
    }

    fn last_traded_url(&self, symbols: &[String]) -> String {
        let joined = symbols
            .iter()
            .map(|s| urlencoding::encode(s))
            .collect::<Vec<_>>()
            .join(",");
        format!(
            "{}/tops/last?symbols={}&token={}",
            self.base_url, joined, self.token
        )
    }

    fn chart_range_url(&self, symbol: &str, range: &str) -> String {
        format!(
            "{}/stock/{}/chart/{}?token={}",
            self.base_url,
            urlencoding::encode(symbol),
            urlencoding::encode(range),
            self.token
        )
    }

    // chartByDay collapses the single-date response to daily bars, the same
    // row shape the range variant returns.
    fn chart_date_url(&self, symbol: &str, date: &str) -> String {
        format!(
            "{}/stock/{}/chart/date/{}?chartByDay=true&token={}",
            self.base_url,
            urlencoding::encode(symbol),
            urlencoding::encode(date),
            self.token
        )
    }

    /// Fetch a URL and deserialize the JSON body.
    ///
    /// `path` is the URL without the token, safe to log.
    async fn fetch<T: DeserializeOwned>(
        &self,
        url: &str,
        path: &str,
    ) -> Result<T, MarketDataError> {
        debug!("Requesting {} from {}", path, PROVIDER_ID);

        let response = self.client.get(url).send().await.map_err(|e| {
            if e.is_timeout() {
                MarketDataError::Timeout {
                    provider: PROVIDER_ID.to_string(),
                }
            } else {
                MarketDataError::Network(e)
            }
        })?;

        if response.status() == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(MarketDataError::RateLimited {
                provider: PROVIDER_ID.to_string(),
            });
        }

        if !response.status().is_success() {
            return Err(MarketDataError::ProviderError {
                provider: PROVIDER_ID.to_string(),
                message: format!("HTTP error: {}", response.status()),
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| {
            MarketDataError::InvalidResponse(format!("failed to parse {}: {}", path, e))
        })
    }
}

#[async_trait]
impl MarketDataProvider for IexProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn fetch_all_symbols(&self) -> Result<Vec<Symbol>, MarketDataError> {
        self.fetch(&self.symbols_url(), "/ref-data/symbols").await
    }

    async fn fetch_last_traded_prices(
        &self,
        symbols: &[String],
    ) -> Result<Vec<LastTradedPrice>, MarketDataError> {
        self.fetch(&self.last_traded_url(symbols), "/tops/last")
            .await
    }

    async fn fetch_historical_prices(
        &self,
        symbol: &str,
        range: &str,
    ) -> Result<Vec<HistoricalPrice>, MarketDataError> {
        let path = format!("/stock/{}/chart/{}", symbol, range);
        self.fetch(&self.chart_range_url(symbol, range), &path).await
    }

    async fn fetch_historical_prices_for_date(
        &self,
        symbol: &str,
        date: &str,
    ) -> Result<Vec<HistoricalPrice>, MarketDataError> {
        let path = format!("/stock/{}/chart/date/{}", symbol, date);
        self.fetch(&self.chart_date_url(symbol, date), &path).await
    }
}
