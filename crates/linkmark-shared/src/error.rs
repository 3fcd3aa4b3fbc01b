use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The failure payload recorded in per-operation error buckets.
///
/// Every failed request collapses to this shape regardless of cause: a
/// transport failure carries no status, an HTTP error carries the status
/// code and whatever detail the backend supplied.
#[derive(Error, Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[error("{message}")]
pub struct ApiFailure {
    /// HTTP status code, if the request reached the server.
    pub status: Option<u16>,
    pub message: String,
}

impl ApiFailure {
    /// A failure that never produced an HTTP response.
    pub fn transport(message: impl Into<String>) -> Self {
        Self {
            status: None,
            message: message.into(),
        }
    }

    /// A non-2xx HTTP response.
    pub fn http(status: u16, message: impl Into<String>) -> Self {
        Self {
            status: Some(status),
            message: message.into(),
        }
    }
}
