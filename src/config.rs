//! Configuration loading for price-compare-mcp
//!
//! Everything comes from the environment, read once at startup:
//! - AUTH_TOKEN: shared secret the validate tool checks callers against
//! - MY_NUMBER: operator identifier returned on successful validation
//! - SERPER_API_KEY: shopping search provider key
//! - PORT: HTTP port for health endpoints and the MCP mount (default 8080)
//! - MCP_TRANSPORT: set to "stdio" to serve over stdio instead of HTTP
//!
//! Nothing else in the crate touches the environment; every component takes
//! the values it needs from this struct.

/// Default HTTP port
const DEFAULT_PORT: u16 = 8080;

/// Main configuration structure
#[derive(Debug, Clone)]
pub struct Config {
    /// Shared secret for the validate tool; `None` means validation always fails
    pub auth_token: Option<String>,
    /// Operator identifier returned by a successful validate call
    pub owner_number: Option<String>,
    /// Serper API key; `None` disables the search capability
    pub serper_api_key: Option<String>,
    /// HTTP port to bind
    pub port: u16,
    /// Serve MCP over stdio instead of HTTP
    pub stdio_transport: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            auth_token: None,
            owner_number: None,
            serper_api_key: None,
            port: DEFAULT_PORT,
            stdio_transport: false,
        }
    }
}

impl Config {
    /// Load configuration from the environment
    pub fn from_env() -> Self {
        let port = match std::env::var("PORT") {
            Ok(raw) => raw.parse().unwrap_or_else(|_| {
                tracing::warn!("invalid PORT value '{}', using {}", raw, DEFAULT_PORT);
                DEFAULT_PORT
            }),
            Err(_) => DEFAULT_PORT,
        };

        let stdio_transport = std::env::var("MCP_TRANSPORT")
            .map(|v| v.eq_ignore_ascii_case("stdio"))
            .unwrap_or(false);

        Self {
            auth_token: read_non_empty("AUTH_TOKEN"),
            owner_number: read_non_empty("MY_NUMBER"),
            serper_api_key: read_non_empty("SERPER_API_KEY"),
            port,
            stdio_transport,
        }
    }

    /// Whether the validate tool can succeed at all
    pub fn auth_configured(&self) -> bool {
        self.auth_token.is_some() && self.owner_number.is_some()
    }
}

/// Read an environment variable, treating empty or whitespace values as unset
fn read_non_empty(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
