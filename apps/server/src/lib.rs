//! Quotegate server - HTTP facade over the upstream market data provider.
//!
//! The boundary layer only: extracts path/query parameters, delegates to the
//! service layer in `quotegate-core`, serializes results as JSON.

pub mod api;
pub mod config;
pub mod error;
pub mod main_lib;

pub use config::Config;
pub use main_lib::{build_state, init_tracing, AppState};
