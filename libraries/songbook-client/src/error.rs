//! Error types for the Songbook client.

use serde::{Deserialize, Serialize};
use songbook_core::{SongbookError, NETWORK_ERROR_MESSAGE};
use thiserror::Error;

/// Errors that can occur when talking to the playlist API.
#[derive(Error, Debug)]
pub enum ServerClientError {
    /// Request could not be sent or the response could not be read
    #[error("Network error")]
    Network(#[source] reqwest::Error),

    /// Response body was not the JSON we asked for
    #[error("Network error")]
    ParseError(String),

    /// Server returned a non-success status
    #[error("Server error ({status}): {message}")]
    ServerError { status: u16, message: String },

    /// Body decoded but does not have the shape the endpoint promises
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Invalid base or request URL
    #[error("Invalid server URL: {0}")]
    InvalidUrl(String),

    /// Thumbnail file not found
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// IO error reading a thumbnail
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, ServerClientError>;

/// The `{ "message": ... }` shape describing a failed call.
///
/// Transport and decoding failures always project to
/// `{ "message": "Network error" }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub message: String,
}

impl ServerClientError {
    /// Whether the failure happened below HTTP (connect, timeout, decode)
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Network(_) | Self::ParseError(_))
    }

    /// Project the error onto the message-only body shape.
    pub fn error_body(&self) -> ErrorBody {
        let message = match self {
            Self::Network(_) | Self::ParseError(_) => NETWORK_ERROR_MESSAGE.to_string(),
            Self::ServerError { message, .. } => message.clone(),
            other => other.to_string(),
        };
        ErrorBody { message }
    }
}

impl From<ServerClientError> for SongbookError {
    fn from(err: ServerClientError) -> Self {
        match err {
            ServerClientError::Network(_) | ServerClientError::ParseError(_) => Self::Network,
            ServerClientError::ServerError { status, message } => Self::Server { status, message },
            ServerClientError::InvalidResponse(_) => Self::InvalidResponse,
            ServerClientError::InvalidUrl(url) => Self::InvalidUrl(url),
            ServerClientError::FileNotFound(path) => Self::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("File not found: {path}"),
            )),
            ServerClientError::Io(e) => Self::Io(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_failures_use_sentinel_body() {
        let err = ServerClientError::ParseError("expected value".into());
        assert!(err.is_transport());
        assert_eq!(
            err.error_body(),
            ErrorBody {
                message: "Network error".into()
            }
        );
        assert_eq!(
            serde_json::to_value(err.error_body()).unwrap(),
            serde_json::json!({ "message": "Network error" })
        );
    }

    #[test]
    fn server_errors_keep_their_message() {
        let err = ServerClientError::ServerError {
            status: 404,
            message: "Song not found".into(),
        };
        assert!(!err.is_transport());
        assert_eq!(err.error_body().message, "Song not found");

        let core: SongbookError = err.into();
        assert!(matches!(core, SongbookError::Server { status: 404, .. }));
    }

    #[test]
    fn shape_errors_map_to_invalid_response() {
        let err = ServerClientError::InvalidResponse("expected an object".into());
        assert!(!err.is_transport());

        let core: SongbookError = err.into();
        assert!(matches!(core, SongbookError::InvalidResponse));
        assert_eq!(core.to_string(), "Invalid response");
    }

    #[test]
    fn transport_maps_to_core_network() {
        let core: SongbookError = ServerClientError::ParseError("eof".into()).into();
        assert!(matches!(core, SongbookError::Network));
        assert_eq!(core.to_string(), "Network error");
    }
}
