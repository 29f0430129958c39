//! Error types for the prediction request path.

use thiserror::Error;

/// Fixed user-facing text for failures with no service-supplied message.
pub const FALLBACK_ERROR_MESSAGE: &str = "An error occurred while making the prediction";

/// Errors that can occur while submitting a prediction request.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum PredictError {
    /// The service answered with a non-2xx status.
    #[error("service returned status {status}")]
    Service {
        /// HTTP status code.
        status: u16,
        /// Error text from the response body's `error` field, when present.
        message: Option<String>,
    },

    /// A 2xx response whose body does not match the contract.
    #[error("malformed response body: {0}")]
    MalformedResponse(String),

    /// Network-level failure: no response, refused connection, or timeout.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

impl PredictError {
    /// User-facing message for the Failed state, displayed verbatim.
    ///
    /// Service-supplied error text wins; every other failure collapses to
    /// [`FALLBACK_ERROR_MESSAGE`].
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Service {
                message: Some(text),
                ..
            } => text.clone(),
            _ => FALLBACK_ERROR_MESSAGE.to_string(),
        }
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, PredictError>;
