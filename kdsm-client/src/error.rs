//! KDSM client error types.

use thiserror::Error;

/// Result type for KDSM API operations.
pub type KdsmResult<T> = Result<T, KdsmError>;

/// Errors that can occur when calling the KDSM API.
#[derive(Debug, Error)]
pub enum KdsmError {
    /// The server answered with `success: false`. Displays exactly the
    /// server-supplied message.
    #[error("{0}")]
    Api(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid response body (HTTP {status}): {source}")]
    InvalidResponse {
        status: u16,
        #[source]
        source: serde_json::Error,
    },

    #[error("response reported success but carried no data (HTTP {status})")]
    MissingData { status: u16 },
}

impl KdsmError {
    /// True for application errors reported through the response envelope.
    pub fn is_api(&self) -> bool {
        matches!(self, KdsmError::Api(_))
    }

    /// True when the exchange failed below the envelope: network errors,
    /// unreadable bodies or envelopes that break their own contract.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            KdsmError::Http(_) | KdsmError::InvalidResponse { .. } | KdsmError::MissingData { .. }
        )
    }
}
