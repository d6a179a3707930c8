//! Market data provider implementations.
//!
//! The [`MarketDataProvider`] trait is the seam between the service layer and
//! the upstream HTTP API; [`iex`] holds the IEX Cloud implementation.

pub mod iex;
mod traits;

pub use traits::MarketDataProvider;
