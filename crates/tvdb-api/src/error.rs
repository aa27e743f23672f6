//! Request error types.
//!
//! Every failed request surfaces as an [`ApiError`]. A non-200 response is an
//! [`ApiError::Status`] carrying the decoded body and the HTTP status code; a
//! body that is not JSON is reported the same way, with [`PARSE_ERROR_MARKER`]
//! standing in for the body.

use serde_json::Value;
use thiserror::Error;

/// Response body recorded on a [`StatusError`] when the server reply is not valid JSON.
pub const PARSE_ERROR_MARKER: &str = "Parse Error on rawData";

/// A response with a non-200 status, or a body that failed to parse.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("TVDB API error (HTTP {}): {response}", display_status(.status_code.as_ref()))]
#[allow(clippy::module_name_repetitions)]
pub struct StatusError {
    /// Decoded response body, or [`PARSE_ERROR_MARKER`] when the body is not JSON.
    response: Value,
    /// HTTP status code, when one was received.
    status_code: Option<u16>,
}

impl StatusError {
    /// Creates a status error from a decoded body.
    #[must_use]
    pub const fn new(response: Value, status_code: Option<u16>) -> Self {
        Self {
            response,
            status_code,
        }
    }

    /// Creates the error reported for a body that is not valid JSON.
    #[must_use]
    pub fn parse_failure(status_code: Option<u16>) -> Self {
        Self::new(Value::String(String::from(PARSE_ERROR_MARKER)), status_code)
    }

    /// The decoded response body.
    #[must_use]
    pub const fn response(&self) -> &Value {
        &self.response
    }

    /// The HTTP status code.
    #[must_use]
    pub const fn status_code(&self) -> Option<u16> {
        self.status_code
    }

    /// Whether the body could not be parsed as JSON.
    #[must_use]
    pub fn is_parse_failure(&self) -> bool {
        self.response.as_str() == Some(PARSE_ERROR_MARKER)
    }
}

fn display_status(code: Option<&u16>) -> String {
    code.map_or_else(|| String::from("-"), ToString::to_string)
}

/// Errors returned by the session and the catalog client.
#[derive(Debug, Error)]
#[allow(clippy::module_name_repetitions)]
pub enum ApiError {
    /// The server answered with a non-200 status, or with a body that is not JSON.
    #[error(transparent)]
    Status(#[from] StatusError),

    /// The request exceeded the configured timeout.
    #[error("TVDB API request timed out")]
    Timeout(#[source] reqwest::Error),

    /// Connection or socket level failure.
    #[error("TVDB API transport error")]
    Transport(#[source] reqwest::Error),

    /// A 200 envelope whose `data` does not have the expected shape.
    #[error("failed to decode TVDB API payload (HTTP {status_code})")]
    Decode {
        /// HTTP status code of the response.
        status_code: u16,
        /// Underlying decode error.
        #[source]
        source: serde_json::Error,
    },

    /// The request body could not be serialized to JSON.
    #[error("failed to encode request body")]
    Encode(#[source] serde_json::Error),

    /// The request path could not be joined onto the base URL.
    #[error("invalid request path: {path}")]
    Url {
        /// Path that failed to join.
        path: String,
        /// Underlying URL error.
        #[source]
        source: url::ParseError,
    },

    /// A path parameter that cannot be sent as one path segment
    /// (empty, `.` or `..`).
    #[error("invalid path parameter: {0:?}")]
    PathSegment(String),
}

impl ApiError {
    /// Classifies a reqwest failure as a timeout or a transport error.
    pub(crate) fn from_reqwest(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout(err)
        } else {
            Self::Transport(err)
        }
    }

    /// HTTP status code attached to this error, if any.
    #[must_use]
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            Self::Status(e) => e.status_code(),
            Self::Decode { status_code, .. } => Some(*status_code),
            Self::Timeout(_)
            | Self::Transport(_)
            | Self::Encode(_)
            | Self::Url { .. }
            | Self::PathSegment(_) => None,
        }
    }

    /// Whether the server rejected the session token (HTTP 401).
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        self.status_code() == Some(401)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use serde_json::json;

    use super::*;

    #[test]
    fn test_status_error_exposes_response_and_code() {
        // Arrange
        let body = json!({"message": "not found"});

        // Act
        let err = StatusError::new(body.clone(), Some(404));

        // Assert
        assert_eq!(err.response(), &body);
        assert_eq!(err.status_code(), Some(404));
        assert!(!err.is_parse_failure());
    }

    #[test]
    fn test_parse_failure_uses_marker() {
        // Arrange & Act
        let err = StatusError::parse_failure(Some(200));

        // Assert
        assert_eq!(err.response(), &json!(PARSE_ERROR_MARKER));
        assert!(err.is_parse_failure());
    }

    #[test]
    fn test_display_includes_status_and_body() {
        // Arrange
        let err = StatusError::new(json!({"message": "Unauthorized"}), Some(401));

        // Act
        let msg = err.to_string();

        // Assert
        assert!(msg.contains("HTTP 401"));
        assert!(msg.contains("Unauthorized"));
    }

    #[test]
    fn test_display_without_status_code() {
        // Arrange & Act
        let msg = StatusError::parse_failure(None).to_string();

        // Assert
        assert!(msg.contains("HTTP -"));
    }

    #[test]
    fn test_api_error_status_code_and_unauthorized() {
        // Arrange
        let unauthorized = ApiError::from(StatusError::new(json!({}), Some(401)));
        let not_found = ApiError::from(StatusError::new(json!({}), Some(404)));

        // Act & Assert
        assert_eq!(unauthorized.status_code(), Some(401));
        assert!(unauthorized.is_unauthorized());
        assert!(!not_found.is_unauthorized());
    }

    #[test]
    fn test_decode_error_keeps_status() {
        // Arrange
        let source = serde_json::from_str::<u32>("\"x\"").unwrap_err();

        // Act
        let err = ApiError::Decode {
            status_code: 200,
            source,
        };

        // Assert
        assert_eq!(err.status_code(), Some(200));
        assert!(err.to_string().contains("HTTP 200"));
    }
}
