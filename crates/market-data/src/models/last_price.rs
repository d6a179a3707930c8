use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The most recent trade the provider has seen for one symbol.
///
/// The provider reports `time` as epoch milliseconds; it is relayed as-is
/// rather than parsed into a timestamp, so the payload shape is preserved.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LastTradedPrice {
    /// Ticker the trade belongs to
    pub symbol: String,

    /// Trade price
    pub price: Decimal,

    /// Trade size in shares
    pub size: u64,

    /// Trade time, epoch milliseconds
    pub time: i64,

    /// Provider fields not modeled above, relayed verbatim
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}
