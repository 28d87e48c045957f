//! Error types for the JSON-RPC transport.
//!
//! [`ErrorObject`] is the structured error a server returns inside a response
//! envelope. [`Error`] covers every way a single [`crate::Client::call`] can
//! fail, with [`ErrorKind`] as the coarse classification callers branch on.
//! [`ConfigError`] is produced while building a [`crate::ClientConfig`] and
//! never by a call.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::RequestId;

// ---------------------------------------------------------------------------
// Error codes
// ---------------------------------------------------------------------------

/// Numeric code of a JSON-RPC error object.
///
/// Codes from `-32768` to `-32000` are reserved by the protocol. Within that
/// range the five predefined codes describe protocol faults, and
/// `-32099..=-32000` is left for server-defined errors. Anything else is
/// application-defined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ErrorCode(i64);

impl ErrorCode {
    /// Invalid JSON was received by the server.
    pub const PARSE_ERROR: Self = Self(-32700);
    /// The JSON sent is not a valid request object.
    pub const INVALID_REQUEST: Self = Self(-32600);
    /// The method does not exist or is not available.
    pub const METHOD_NOT_FOUND: Self = Self(-32601);
    /// Invalid method parameters.
    pub const INVALID_PARAMS: Self = Self(-32602);
    /// Internal JSON-RPC error.
    pub const INTERNAL_ERROR: Self = Self(-32603);

    /// Upper bound (inclusive) of the server-defined range.
    pub const SERVER_ERROR_START: Self = Self(-32000);
    /// Lower bound (inclusive) of the server-defined range.
    pub const SERVER_ERROR_END: Self = Self(-32099);

    /// Creates an [`ErrorCode`] from a raw integer.
    pub fn new(code: i64) -> Self {
        Self(code)
    }

    /// Returns the underlying integer value.
    pub fn as_i64(self) -> i64 {
        self.0
    }

    /// Returns `true` for codes in the server-defined range `-32099..=-32000`.
    pub fn is_server_defined(self) -> bool {
        (Self::SERVER_ERROR_END.0..=Self::SERVER_ERROR_START.0).contains(&self.0)
    }

    /// Returns `true` for codes in the protocol-reserved range `-32768..=-32000`.
    pub fn is_reserved(self) -> bool {
        (-32768..=-32000).contains(&self.0)
    }

    /// Returns `true` for the five codes the protocol itself defines.
    pub fn is_predefined(self) -> bool {
        self.description().is_some()
    }

    /// Short description of a predefined code.
    pub fn description(self) -> Option<&'static str> {
        match self {
            Self::PARSE_ERROR => Some("parse error"),
            Self::INVALID_REQUEST => Some("invalid request"),
            Self::METHOD_NOT_FOUND => Some("method not found"),
            Self::INVALID_PARAMS => Some("invalid params"),
            Self::INTERNAL_ERROR => Some("internal error"),
            _ => None,
        }
    }
}

impl From<i64> for ErrorCode {
    fn from(code: i64) -> Self {
        Self(code)
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// Error object
// ---------------------------------------------------------------------------

/// The `error` member of a response envelope.
#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize)]
#[error("{message} ({code})")]
pub struct ErrorObject {
    /// Error code; see [`ErrorCode`] for the reserved ranges.
    pub code: ErrorCode,
    /// Short description provided by the server.
    pub message: String,
    /// Additional server-specific information, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

// ---------------------------------------------------------------------------
// Call errors
// ---------------------------------------------------------------------------

/// Coarse classification of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The request could not be built (empty method, unserialisable params).
    InvalidRequest,
    /// The HTTP exchange failed or returned a non-200 status.
    Transport,
    /// The response envelope or its result payload could not be decoded.
    Decode,
    /// The response did not correlate with the request.
    Protocol,
    /// The server returned a JSON-RPC error object.
    Server,
    /// The call was cancelled or ran past its deadline.
    Cancelled,
}

/// Failure of a single JSON-RPC call.
///
/// Every variant is scoped to the call that produced it; nothing here is
/// retried automatically.
#[derive(Debug, Error)]
pub enum Error {
    /// The request was rejected before any network I/O.
    #[error("invalid request: {reason}")]
    InvalidRequest {
        /// Why the request was rejected.
        reason: String,
    },

    /// The request envelope (in practice, its params) could not be serialised.
    #[error("failed to marshal request")]
    Encode(#[source] serde_json::Error),

    /// The HTTP request could not be sent or its body could not be read.
    #[error("failed to post request")]
    Transport(#[source] reqwest::Error),

    /// The server answered with a status other than `200 OK`.
    #[error("server does not respond 200 OK: {status}")]
    HttpStatus {
        /// Status line returned by the server.
        status: reqwest::StatusCode,
    },

    /// The response body or its `result` member could not be decoded.
    #[error("failed to decode {what}")]
    Decode {
        /// Which part of the response failed (`"response JSON"` or `"result JSON"`).
        what: &'static str,
        /// Underlying decoder error.
        #[source]
        source: serde_json::Error,
    },

    /// The response `id` does not match the request `id`.
    #[error("response ID mismatch: expected {expected}, got {actual}")]
    IdMismatch {
        /// Id sent with the request.
        expected: RequestId,
        /// Id found in the response as sent: a string, a number, or `null`.
        actual: serde_json::Value,
    },

    /// The server returned an error object.
    #[error(transparent)]
    Server(#[from] ErrorObject),

    /// The caller's cancellation token fired before the call completed.
    #[error("call cancelled")]
    Cancelled,

    /// The caller's deadline passed before the call completed.
    #[error("call deadline exceeded after {0:?}")]
    DeadlineExceeded(Duration),
}

impl Error {
    /// Returns the coarse classification of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidRequest { .. } | Self::Encode(_) => ErrorKind::InvalidRequest,
            Self::Transport(_) | Self::HttpStatus { .. } => ErrorKind::Transport,
            Self::Decode { .. } => ErrorKind::Decode,
            Self::IdMismatch { .. } => ErrorKind::Protocol,
            Self::Server(_) => ErrorKind::Server,
            Self::Cancelled | Self::DeadlineExceeded(_) => ErrorKind::Cancelled,
        }
    }

    /// Returns the server's error object when this is a [`Error::Server`].
    pub fn server_error(&self) -> Option<&ErrorObject> {
        match self {
            Self::Server(obj) => Some(obj),
            _ => None,
        }
    }

    /// Returns `true` if the call was cancelled or timed out.
    pub fn is_cancellation(&self) -> bool {
        self.kind() == ErrorKind::Cancelled
    }

    /// Returns the HTTP status for [`Error::HttpStatus`] and for transport
    /// errors that carry one.
    pub fn status(&self) -> Option<reqwest::StatusCode> {
        match self {
            Self::HttpStatus { status } => Some(*status),
            Self::Transport(err) => err.status(),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Configuration errors
// ---------------------------------------------------------------------------

/// Errors raised while building a [`crate::ClientConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The endpoint is not an absolute URL.
    #[error("invalid endpoint URL '{endpoint}'")]
    InvalidEndpoint {
        /// The rejected endpoint string.
        endpoint: String,
        /// Underlying parse error.
        #[source]
        source: url::ParseError,
    },

    /// The endpoint uses a scheme other than `http` or `https`.
    #[error("unsupported endpoint scheme '{scheme}'")]
    UnsupportedScheme {
        /// The rejected scheme.
        scheme: String,
    },

    /// The application id is empty.
    #[error("application id must not be empty")]
    EmptyAppId,

    /// The application id cannot be carried in an HTTP header.
    #[error("application id is not a valid header value")]
    InvalidAppId(#[source] reqwest::header::InvalidHeaderValue),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_object_displays_message_and_code() {
        let obj = ErrorObject {
            code: ErrorCode::METHOD_NOT_FOUND,
            message: "Method not found".to_string(),
            data: None,
        };
        assert_eq!(obj.to_string(), "Method not found (-32601)");
    }

    #[test]
    fn server_error_display_is_transparent() {
        let err = Error::from(ErrorObject {
            code: ErrorCode::new(-32001),
            message: "Rate limit exceeded".to_string(),
            data: Some(serde_json::json!({"retry": false})),
        });
        assert_eq!(err.to_string(), "Rate limit exceeded (-32001)");
        assert_eq!(err.kind(), ErrorKind::Server);
        assert_eq!(err.server_error().map(|e| e.code), Some(ErrorCode::new(-32001)));
    }

    #[test]
    fn server_defined_range_is_inclusive() {
        assert!(ErrorCode::new(-32000).is_server_defined());
        assert!(ErrorCode::new(-32050).is_server_defined());
        assert!(ErrorCode::new(-32099).is_server_defined());
        assert!(!ErrorCode::new(-32100).is_server_defined());
        assert!(!ErrorCode::new(-31999).is_server_defined());
        assert!(!ErrorCode::PARSE_ERROR.is_server_defined());
    }

    #[test]
    fn predefined_codes_are_reserved() {
        for code in [
            ErrorCode::PARSE_ERROR,
            ErrorCode::INVALID_REQUEST,
            ErrorCode::METHOD_NOT_FOUND,
            ErrorCode::INVALID_PARAMS,
            ErrorCode::INTERNAL_ERROR,
        ] {
            assert!(code.is_reserved(), "{code}");
            assert!(code.is_predefined(), "{code}");
        }
        assert!(!ErrorCode::new(1).is_reserved());
        assert!(!ErrorCode::new(-32001).is_predefined());
    }

    #[test]
    fn error_object_data_is_optional_on_the_wire() {
        let obj: ErrorObject =
            serde_json::from_str(r#"{"code":-32602,"message":"Invalid params"}"#).unwrap();
        assert_eq!(obj.code, ErrorCode::INVALID_PARAMS);
        assert_eq!(obj.data, None);
    }

    #[test]
    fn id_mismatch_reports_null_id() {
        let err = Error::IdMismatch {
            expected: RequestId::new("a"),
            actual: serde_json::Value::Null,
        };
        assert_eq!(err.to_string(), "response ID mismatch: expected a, got null");
        assert_eq!(err.kind(), ErrorKind::Protocol);
    }

    #[test]
    fn cancellation_kinds() {
        assert!(Error::Cancelled.is_cancellation());
        assert!(Error::DeadlineExceeded(Duration::from_secs(1)).is_cancellation());
        assert!(!Error::InvalidRequest {
            reason: "method is empty".to_string()
        }
        .is_cancellation());
    }
}
