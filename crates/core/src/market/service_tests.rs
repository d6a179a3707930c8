//! Tests for MarketDataService contracts and edge cases.
//!
//! # Critical Contract Points
//!
//! 1. Empty symbol lists short-circuit locally: zero provider calls
//! 2. Non-empty symbol lists go out as ONE batched provider call
//! 3. The "date" range routes to the date endpoint variant with the date;
//!    every other range routes to the range variant and drops the date
//! 4. Provider data and provider errors pass through unmodified
//! 5. Idempotence: no hidden state accumulates between calls

#[cfg(test)]
mod tests {
    use crate::errors::Error;
    use crate::market::service::{
        MarketDataService, MarketDataServiceTrait, SPECIFIC_DATE_RANGE,
    };
    use async_trait::async_trait;
    use quotegate_market_data::{
        HistoricalPrice, LastTradedPrice, MarketDataError, MarketDataProvider, Symbol,
    };
    use serde_json::json;
    use std::sync::{Arc, Mutex};

    // =========================================================================
    // Mock MarketDataProvider
    // =========================================================================

    #[derive(Clone, Debug, PartialEq)]
    enum RecordedCall {
        AllSymbols,
        LastTradedPrices(Vec<String>),
        HistoricalRange { symbol: String, range: String },
        HistoricalDate { symbol: String, date: String },
    }

    #[derive(Default)]
    struct MockProvider {
        calls: Arc<Mutex<Vec<RecordedCall>>>,
        symbols: Vec<Symbol>,
        last_prices: Vec<LastTradedPrice>,
        historical: Vec<HistoricalPrice>,
        fail: bool,
    }

    impl MockProvider {
        fn new() -> Self {
            Self::default()
        }

        fn failing() -> Self {
            Self {
                fail: true,
                ..Self::default()
            }
        }

        fn recorded(&self) -> Vec<RecordedCall> {
            self.calls.lock().unwrap().clone()
        }

        fn upstream_error(&self) -> Result<(), MarketDataError> {
            if self.fail {
                Err(MarketDataError::ProviderError {
                    provider: "MOCK".to_string(),
                    message: "HTTP error: 500 Internal Server Error".to_string(),
                })
            } else {
                Ok(())
            }
        }
    }

    #[async_trait]
    impl MarketDataProvider for MockProvider {
        fn id(&self) -> &'static str {
            "MOCK"
        }

        async fn fetch_all_symbols(&self) -> Result<Vec<Symbol>, MarketDataError> {
            self.calls.lock().unwrap().push(RecordedCall::AllSymbols);
            self.upstream_error()?;
            Ok(self.symbols.clone())
        }

        async fn fetch_last_traded_prices(
            &self,
            symbols: &[String],
        ) -> Result<Vec<LastTradedPrice>, MarketDataError> {
            self.calls
                .lock()
                .unwrap()
                .push(RecordedCall::LastTradedPrices(symbols.to_vec()));
            self.upstream_error()?;
            Ok(self.last_prices.clone())
        }

        async fn fetch_historical_prices(
            &self,
            symbol: &str,
            range: &str,
        ) -> Result<Vec<HistoricalPrice>, MarketDataError> {
            self.calls.lock().unwrap().push(RecordedCall::HistoricalRange {
                symbol: symbol.to_string(),
                range: range.to_string(),
            });
            self.upstream_error()?;
            Ok(self.historical.clone())
        }

        async fn fetch_historical_prices_for_date(
            &self,
            symbol: &str,
            date: &str,
        ) -> Result<Vec<HistoricalPrice>, MarketDataError> {
            self.calls.lock().unwrap().push(RecordedCall::HistoricalDate {
                symbol: symbol.to_string(),
                date: date.to_string(),
            });
            self.upstream_error()?;
            Ok(self.historical.clone())
        }
    }

    fn symbols_fixture() -> Vec<Symbol> {
        serde_json::from_value(json!([
            {"symbol": "AAPL"},
            {"symbol": "MSFT"}
        ]))
        .unwrap()
    }

    fn last_prices_fixture() -> Vec<LastTradedPrice> {
        serde_json::from_value(json!([
            {"symbol": "AAPL", "price": 186.22, "size": 100, "time": 1480446905681_i64},
            {"symbol": "MSFT", "price": 59.24, "size": 200, "time": 1480446908666_i64}
        ]))
        .unwrap()
    }

    fn historical_fixture() -> Vec<HistoricalPrice> {
        serde_json::from_value(json!([
            {"date": "2020-01-02", "close": 300.35, "volume": 33870100},
            {"date": "2020-01-03", "close": 297.43, "volume": 36580700}
        ]))
        .unwrap()
    }

    fn service_with(provider: Arc<MockProvider>) -> MarketDataService {
        MarketDataService::new(provider)
    }

    // =========================================================================
    // get_all_symbols
    // =========================================================================

    #[tokio::test]
    async fn test_get_all_symbols_passes_provider_data_through() {
        let provider = Arc::new(MockProvider {
            symbols: symbols_fixture(),
            ..MockProvider::new()
        });
        let service = service_with(provider.clone());

        let result = service.get_all_symbols().await.unwrap();

        assert_eq!(result.len(), 2);
        assert_eq!(result[0].symbol, "AAPL");
        assert_eq!(result[1].symbol, "MSFT");
        assert_eq!(provider.recorded(), vec![RecordedCall::AllSymbols]);
        // Relayed untouched: re-serializing yields the upstream payload
        assert_eq!(
            serde_json::to_value(&result).unwrap(),
            json!([{"symbol": "AAPL"}, {"symbol": "MSFT"}])
        );
    }

    // =========================================================================
    // get_last_traded_prices
    // =========================================================================

    #[tokio::test]
    async fn test_empty_symbol_list_returns_empty_without_provider_call() {
        let provider = Arc::new(MockProvider::new());
        let service = service_with(provider.clone());

        let result = service.get_last_traded_prices(&[]).await.unwrap();

        assert!(result.is_empty());
        assert!(provider.recorded().is_empty());
    }

    #[tokio::test]
    async fn test_symbol_list_goes_out_as_one_batched_call() {
        let provider = Arc::new(MockProvider {
            last_prices: last_prices_fixture(),
            ..MockProvider::new()
        });
        let service = service_with(provider.clone());
        let symbols = vec!["AAPL".to_string(), "MSFT".to_string()];

        let result = service.get_last_traded_prices(&symbols).await.unwrap();

        assert_eq!(result.len(), 2);
        assert_eq!(
            provider.recorded(),
            vec![RecordedCall::LastTradedPrices(symbols)]
        );
    }

    #[tokio::test]
    async fn test_larger_symbol_list_is_never_split() {
        let provider = Arc::new(MockProvider::new());
        let service = service_with(provider.clone());
        let symbols: Vec<String> = (0..25).map(|i| format!("SYM{}", i)).collect();

        service.get_last_traded_prices(&symbols).await.unwrap();

        let calls = provider.recorded();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0], RecordedCall::LastTradedPrices(symbols));
    }

    // =========================================================================
    // get_historical_prices
    // =========================================================================

    #[tokio::test]
    async fn test_date_range_routes_to_date_variant_with_date() {
        let provider = Arc::new(MockProvider {
            historical: historical_fixture(),
            ..MockProvider::new()
        });
        let service = service_with(provider.clone());

        let result = service
            .get_historical_prices("AAPL", SPECIFIC_DATE_RANGE, Some("20200101"))
            .await
            .unwrap();

        assert_eq!(result.len(), 2);
        assert_eq!(
            provider.recorded(),
            vec![RecordedCall::HistoricalDate {
                symbol: "AAPL".to_string(),
                date: "20200101".to_string(),
            }]
        );
    }

    #[tokio::test]
    async fn test_relative_range_drops_supplied_date() {
        let provider = Arc::new(MockProvider::new());
        let service = service_with(provider.clone());

        service
            .get_historical_prices("AAPL", "1m", Some("20200101"))
            .await
            .unwrap();

        assert_eq!(
            provider.recorded(),
            vec![RecordedCall::HistoricalRange {
                symbol: "AAPL".to_string(),
                range: "1m".to_string(),
            }]
        );
    }

    #[tokio::test]
    async fn test_relative_range_without_date() {
        let provider = Arc::new(MockProvider::new());
        let service = service_with(provider.clone());

        service
            .get_historical_prices("MSFT", "ytd", None)
            .await
            .unwrap();

        assert_eq!(
            provider.recorded(),
            vec![RecordedCall::HistoricalRange {
                symbol: "MSFT".to_string(),
                range: "ytd".to_string(),
            }]
        );
    }

    #[tokio::test]
    async fn test_date_range_without_date_is_rejected_before_provider() {
        let provider = Arc::new(MockProvider::new());
        let service = service_with(provider.clone());

        let result = service
            .get_historical_prices("AAPL", SPECIFIC_DATE_RANGE, None)
            .await;

        assert!(matches!(result, Err(Error::Validation(_))));
        assert!(provider.recorded().is_empty());
    }

    // =========================================================================
    // Failure propagation and idempotence
    // =========================================================================

    #[tokio::test]
    async fn test_provider_failure_propagates_unconverted() {
        let provider = Arc::new(MockProvider::failing());
        let service = service_with(provider.clone());

        let result = service
            .get_last_traded_prices(&["AAPL".to_string()])
            .await;

        match result {
            Err(Error::MarketData(MarketDataError::ProviderError { provider, message })) => {
                assert_eq!(provider, "MOCK");
                assert!(message.contains("500"));
            }
            other => panic!("expected provider error to pass through, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_provider_failure_is_never_an_empty_success() {
        let provider = Arc::new(MockProvider::failing());
        let service = service_with(provider);

        assert!(service.get_all_symbols().await.is_err());
        assert!(service
            .get_historical_prices("AAPL", "1m", None)
            .await
            .is_err());
    }

    #[tokio::test]
    async fn test_repeated_calls_are_idempotent() {
        let provider = Arc::new(MockProvider {
            last_prices: last_prices_fixture(),
            ..MockProvider::new()
        });
        let service = service_with(provider.clone());
        let symbols = vec!["AAPL".to_string(), "MSFT".to_string()];

        let first = service.get_last_traded_prices(&symbols).await.unwrap();
        let second = service.get_last_traded_prices(&symbols).await.unwrap();

        assert_eq!(
            serde_json::to_value(&first).unwrap(),
            serde_json::to_value(&second).unwrap()
        );
        // Two identical calls, two identical recordings, nothing accumulated
        assert_eq!(
            provider.recorded(),
            vec![
                RecordedCall::LastTradedPrices(symbols.clone()),
                RecordedCall::LastTradedPrices(symbols),
            ]
        );
    }
}
