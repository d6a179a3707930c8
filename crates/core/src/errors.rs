//! Core error types for the quotegate service layer.

use thiserror::Error;

use quotegate_market_data::MarketDataError;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the service layer.
///
/// Upstream failures are wrapped, never translated: the source error stays
/// attached and is surfaced to the caller of the failing request.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Market data operation failed: {0}")]
    MarketData(#[from] MarketDataError),

    #[error("Input validation failed: {0}")]
    Validation(String),
}
