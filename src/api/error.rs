//! Error types for the CoinLore REST API client.

use thiserror::Error;

/// Status used for failures that never produced an upstream status
/// (transport, decode, empty global data).
pub const INTERNAL_ERROR_STATUS: u16 = 500;

/// Error returned by every [`CoinloreClient`](crate::api::CoinloreClient) operation.
///
/// Each variant carries an HTTP-style status, see [`ClientError::status`].
/// Callers branch on it to tell a missing coin (404) from an upstream or
/// transport failure (500).
#[derive(Debug, Error)]
pub enum ClientError {
    /// Connection refused, DNS failure, timeout, or body read failure
    #[error("failed to make request: {0}")]
    Transport(#[source] reqwest::Error),

    /// Upstream answered with something other than 200
    #[error("unexpected status code: {status}")]
    UnexpectedStatus { status: u16, body: String },

    /// Body was not valid JSON or did not match the expected shape
    #[error("failed to decode response: {0}")]
    Deserialize(#[source] serde_json::Error),

    /// The ticker endpoint returned an empty array
    #[error("coin with ID {id} not found")]
    NotFound { id: i64 },

    /// The global endpoint returned an empty array
    #[error("no global data found")]
    NoGlobalData,

    /// Invalid client configuration
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type alias for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

impl ClientError {
    /// HTTP-style status code for this error.
    pub fn status(&self) -> u16 {
        match self {
            ClientError::UnexpectedStatus { status, .. } => *status,
            ClientError::NotFound { .. } => 404,
            ClientError::InvalidParameter(_) => 400,
            ClientError::Transport(_) | ClientError::Deserialize(_) | ClientError::NoGlobalData => {
                INTERNAL_ERROR_STATUS
            }
        }
    }

    /// Human-readable message, identical to the `Display` output.
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// True when the status is 404, whether from an empty ticker result or
    /// from the upstream itself.
    pub fn is_not_found(&self) -> bool {
        self.status() == 404
    }

    /// True for 5xx statuses.
    pub fn is_server_error(&self) -> bool {
        self.status() >= 500
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode_error() -> serde_json::Error {
        serde_json::from_str::<Vec<u8>>("invalid json").unwrap_err()
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(ClientError::NotFound { id: 90 }.status(), 404);
        assert_eq!(ClientError::NoGlobalData.status(), 500);
        assert_eq!(ClientError::Deserialize(decode_error()).status(), 500);
        assert_eq!(ClientError::InvalidParameter("x".into()).status(), 400);
        assert_eq!(
            ClientError::UnexpectedStatus {
                status: 418,
                body: String::new()
            }
            .status(),
            418
        );
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            ClientError::NotFound { id: 905454 }.to_string(),
            "coin with ID 905454 not found"
        );
        assert_eq!(ClientError::NoGlobalData.to_string(), "no global data found");
        assert_eq!(
            ClientError::UnexpectedStatus {
                status: 503,
                body: "down".into()
            }
            .message(),
            "unexpected status code: 503"
        );
        assert!(ClientError::Deserialize(decode_error())
            .to_string()
            .starts_with("failed to decode response: "));
    }

    #[test]
    fn test_classification() {
        assert!(ClientError::NotFound { id: 1 }.is_not_found());
        assert!(!ClientError::NotFound { id: 1 }.is_server_error());
        assert!(ClientError::NoGlobalData.is_server_error());
        assert!(!ClientError::NoGlobalData.is_not_found());

        let upstream_404 = ClientError::UnexpectedStatus {
            status: 404,
            body: "not found".into(),
        };
        assert!(upstream_404.is_not_found());
    }
}
