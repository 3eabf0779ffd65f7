//! Transport-level errors for the service seam.

use thiserror::Error;

/// Errors raised while reaching the provider or decoding its responses.
///
/// Service-level failures reported inside an otherwise successful response
/// (`ret_code != 0`) are not transport errors; they surface through
/// [`crate::service::ApiOutput`] and the client's error type.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum ServiceError {
    /// The request never produced a usable response.
    #[error("transport error: {message}")]
    Transport {
        /// Description of the underlying failure.
        message: String,
    },
    /// The response body could not be decoded into the expected shape.
    #[error("malformed response: {message}")]
    Decode {
        /// Description of the decoding failure.
        message: String,
    },
}

impl ServiceError {
    /// Builds a transport error from any displayable cause.
    pub fn transport(cause: impl std::fmt::Display) -> Self {
        Self::Transport {
            message: cause.to_string(),
        }
    }

    /// Builds a decode error from any displayable cause.
    pub fn decode(cause: impl std::fmt::Display) -> Self {
        Self::Decode {
            message: cause.to_string(),
        }
    }
}
