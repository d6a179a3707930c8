use serde::{Deserialize, Serialize};

/// A tradable instrument known to the provider.
///
/// Sourced from the reference-data listing. Only the identity fields are
/// typed; exchange metadata and anything else the provider includes is
/// carried through `extra` untouched.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Symbol {
    /// Ticker recognized by the provider
    pub symbol: String,

    /// Company or instrument name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Exchange code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exchange: Option<String>,

    /// Listing region
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,

    /// Trading currency
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,

    /// Whether the symbol is enabled for trading
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_enabled: Option<bool>,

    /// Provider fields not modeled above, relayed verbatim
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}
