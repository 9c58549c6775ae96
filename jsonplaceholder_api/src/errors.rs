//! Error types for the API client.

/// Errors that can occur when making API requests.
///
/// Each variant renders a distinct message so callers can tell a rejected
/// request, an expired timeout and a broken connection apart.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Input was rejected before any request was sent.
    #[error("Validation Error: {0}")]
    Validation(String),
    /// The API answered with an error-class status.
    #[error("API Error: {message} (Status: {status})")]
    Api {
        status: u16,
        message: String,
        body: String,
    },
    /// No response arrived within the configured timeout.
    #[error("Network Error: No response received within {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },
    /// Anything else: connection failures, malformed URLs, undecodable bodies.
    #[error("Request Error: {0}")]
    Request(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
    /// HTTP status of an [`Error::Api`] rejection.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub(crate) fn request<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Error::Request(Box::new(err))
    }
}
