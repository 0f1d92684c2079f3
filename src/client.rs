use reqwest::Method;
use serde::de::DeserializeOwned;

use crate::config::Config;
use crate::error::{Error, Result};

/// Handle to the Open Data Uganda API.
///
/// Owns the configuration and a reused connection pool. Accessors take
/// `&self` and the client holds no per-call state, so a single instance
/// can serve several threads at once; each call blocks until the
/// response arrives or the configured timeout elapses.
#[derive(Clone)]
pub struct Client {
    config: Config,
    http: reqwest::blocking::Client,
}

impl Client {
    /// Creates a client for the production endpoint.
    pub fn new(api_key: &str) -> Self {
        Client::with_config(Config::new(api_key))
    }

    /// Creates a client from explicit settings.
    pub fn with_config(config: Config) -> Self {
        Client {
            config,
            http: reqwest::blocking::Client::new(),
        }
    }

    /// Sends a request and decodes the JSON body into `T`.
    pub(crate) fn request<T: DeserializeOwned>(&self, method: Method, path: &str) -> Result<T> {
        let body = self.send(method, path)?.text()?;
        Ok(serde_json::from_str(&body)?)
    }

    /// The exchange shared by every accessor: builds the URL, attaches
    /// the fixed headers and maps any non-200 answer to [`Error::Status`].
    /// The path is appended to the base URL verbatim, so identifiers must
    /// already be URL-safe. The response is dropped on every exit path,
    /// which returns the connection to the pool.
    pub(crate) fn send(&self, method: Method, path: &str) -> Result<reqwest::blocking::Response> {
        let url = format!("{}{}", self.config.base_url, path);
        tracing::debug!(%method, %url, "dispatching API request");

        let response = self
            .http
            .request(method, url.as_str())
            .header("x-api-key", &self.config.api_key)
            .header("Content-Type", "application/json")
            .timeout(self.config.timeout)
            .send()?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            tracing::debug!(status = status.as_u16(), %url, "API returned an error status");
            return Err(Error::Status(status));
        }

        Ok(response)
    }
}
