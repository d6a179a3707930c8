//! Market data models
//!
//! This module contains the transfer entities the provider returns:
//! - `symbol` - Instrument listing data (Symbol)
//! - `last_price` - Most recent trade per symbol (LastTradedPrice)
//! - `historical_price` - One price observation per (symbol, window) (HistoricalPrice)
//!
//! All three are read-only pass-through types: constructed from a provider
//! response, serialized back out, and discarded with the request. Fields the
//! provider sends that are not modeled here ride along in a flattened map.

mod historical_price;
mod last_price;
mod symbol;

pub use historical_price::HistoricalPrice;
pub use last_price::LastTradedPrice;
pub use symbol::Symbol;
