use serde::Deserialize;

/// Response wrapper used by every endpoint of the API.
///
/// `data` holds the payload, either a single record or an array of them,
/// and is required: a 200 body without it fails decoding. The service
/// reports failures through the HTTP status, so `error` is informational
/// only and `meta` is decoded but never consumed by the accessors.
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    pub data: T,
    pub meta: Option<Meta>,
    pub error: Option<String>,
}

/// Pagination details attached to list responses.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Meta {
    pub current_page: u32,
    pub last_page: u32,
    pub per_page: u32,
    pub total: u32,
}
