use thiserror::Error;

/// The kinds of failure a [`Client`](crate::Client) call can surface.
///
/// Errors propagate to the caller unchanged; the client never retries,
/// logs-and-continues, or returns partial results.
#[derive(Debug, Error)]
pub enum Error {
    /// Request construction or network I/O failed, timeouts included.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The API answered with a status other than 200 OK. The response
    /// body is not inspected on this path.
    #[error("API request failed with status code: {}", .0.as_u16())]
    Status(reqwest::StatusCode),

    /// The response body was not valid JSON for the expected envelope.
    #[error("failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn status_error_names_the_numeric_code() {
        let err = Error::Status(reqwest::StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_string(), "API request failed with status code: 500");
    }

    #[test]
    fn decode_error_wraps_serde() {
        let cause = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = Error::from(cause);
        assert!(matches!(err, Error::Decode(_)));
    }
}
