//! Client configuration.
//!
//! The gateway is constructed from an explicit `Config` rather than reading
//! globals at call time. `Config::from_env()` covers the common case: it
//! loads a `.env` file if one is present and reads `BAZAAR_API_URL`, falling
//! back to the local development endpoint.

/// Environment variable holding the backend base URL
const ENV_BASE_URL: &str = "BAZAAR_API_URL";

/// Default base URL for local development
const DEFAULT_BASE_URL: &str = "http://localhost:8080/api";

#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: String,
}

impl Config {
    /// Create a config pointing at an explicit base URL.
    /// A trailing slash is stripped so path joining stays predictable.
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url }
    }

    /// Load configuration from the environment.
    ///
    /// Reads `.env` if present (silently ignored when missing), then
    /// `BAZAAR_API_URL`, defaulting to the local development endpoint.
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv();
        let base_url =
            std::env::var(ENV_BASE_URL).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::new(base_url)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
