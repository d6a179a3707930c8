//! Server configuration loaded from the environment.

/// Runtime configuration for the gateway.
///
/// Everything here is read once at startup; there is no reload path.
#[derive(Clone, Debug)]
pub struct Config {
    /// Address the HTTP server binds to.
    pub listen_addr: String,
    /// API token sent to the upstream provider on every call.
    pub iex_token: String,
    /// Override for the upstream base URL (sandbox, test server).
    pub iex_base_url: Option<String>,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            listen_addr: std::env::var("QG_LISTEN_ADDR")
                .unwrap_or_else(|_| "0.0.0.0:8080".to_string()),
            iex_token: std::env::var("QG_IEX_TOKEN").unwrap_or_default(),
            iex_base_url: std::env::var("QG_IEX_BASE_URL")
                .ok()
                .map(|v| v.trim().trim_end_matches('/').to_string())
                .filter(|v| !v.is_empty()),
        }
    }
}
