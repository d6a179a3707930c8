//! Quotegate Market Data Crate
//!
//! This crate covers the upstream side of the gateway: the wire models the
//! provider returns and the HTTP client used to reach it.
//!
//! # Overview
//!
//! - [`Symbol`], [`LastTradedPrice`], [`HistoricalPrice`] - provider-sourced
//!   transfer entities, relayed without mutation
//! - [`MarketDataProvider`] - the trait the service layer consumes; the
//!   concrete provider is injected at construction time
//! - [`IexProvider`] - IEX Cloud implementation over reqwest
//!
//! # Architecture
//!
//! ```text
//! +------------------+
//! |  Service layer   |  (quotegate-core)
//! +------------------+
//!          |
//!          v
//! +------------------+
//! |MarketDataProvider|  (trait seam)
//! +------------------+
//!          |
//!          v
//! +------------------+
//! |   IexProvider    |  (HTTP, token auth)
//! +------------------+
//! ```
//!
//! Responses are deserialized into the typed fields below; anything else the
//! provider includes is carried through a flattened map so payloads survive
//! the round trip verbatim.

pub mod errors;
pub mod models;
pub mod provider;

// Re-export all public types from models
pub use models::{HistoricalPrice, LastTradedPrice, Symbol};

// Re-export provider types
pub use provider::iex::IexProvider;
pub use provider::MarketDataProvider;

// Re-export error types
pub use errors::MarketDataError;
