//! Quotegate Core - service layer for the market data gateway.
//!
//! This crate holds the only decision logic in the system: given plain
//! request parameters, it picks how to call the upstream provider (empty-input
//! short-circuiting, date-range branching, symbol-list batching) and relays
//! the provider's data unchanged. It is transport-agnostic; the HTTP surface
//! lives in the server app.

pub mod errors;
pub mod market;

// Re-export common types
pub use market::{MarketDataService, MarketDataServiceTrait, SPECIFIC_DATE_RANGE};

// Re-export error types
pub use errors::Error;
pub use errors::Result;
