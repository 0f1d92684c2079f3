use std::time::Duration;

/// Production endpoint of the Open Data Uganda API.
pub const DEFAULT_BASE_URL: &str = "https://api.opendataug.com/v1";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Connection settings for a [`Client`](crate::Client).
#[derive(Debug, Clone)]
pub struct Config {
    /// Root URL of the remote API. Request paths are appended to this
    /// verbatim, so it must not carry a trailing slash.
    pub base_url: String,
    /// Key sent in the `x-api-key` header on every request.
    pub api_key: String,
    /// Upper bound on a single request, connect time included.
    pub timeout: Duration,
}

impl Config {
    /// Settings for the production endpoint with the given API key.
    pub fn new(api_key: &str) -> Self {
        Config {
            api_key: api_key.to_string(),
            ..Config::default()
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: String::new(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}
