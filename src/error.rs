//! Error types for Atlas API calls.
//!
//! Two failure classes exist: transport failures (the request never
//! completed) and API-level failures (the backend answered with a
//! non-success status and, usually, a structured error body). Both collapse
//! into the single [`Error`] union; successes carry their response metadata
//! in [`ApiResponse`].

use std::fmt;

use reqwest::StatusCode;
use serde::Deserialize;

/// Result alias used by every client operation.
pub type Result<T> = std::result::Result<T, Error>;

/// Error returned by every client operation.
///
/// A returned error means the operation's value must not be trusted; there
/// is no partial success.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The request never completed: connection, TLS, or timeout failure.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The API answered with a non-success status.
    #[error("atlas api error ({status}): {payload}")]
    Api {
        status: StatusCode,
        payload: ErrorPayload,
    },

    /// A success response carried a body that did not match the expected shape.
    #[error("failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// The configured base URL, or a path joined onto it, is not a valid URL.
    #[error("invalid url: {0}")]
    Url(#[from] url::ParseError),
}

impl Error {
    /// HTTP status of an API-level failure, if that is what this is.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Error::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// True for API-level failures (a well-formed non-success response).
    pub fn is_api(&self) -> bool {
        matches!(self, Error::Api { .. })
    }
}

/// Structured error body returned by Atlas on non-success responses.
///
/// Atlas echoes the HTTP status in `error` and adds a symbolic `errorCode`
/// plus human-readable `reason`/`detail` strings. All fields are optional;
/// unknown fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ErrorPayload {
    /// HTTP status echoed in the body.
    pub error: Option<u16>,
    /// Symbolic error code, e.g. `RESOURCE_NOT_FOUND`.
    pub error_code: Option<String>,
    /// Short human-readable reason, e.g. `Not Found`.
    pub reason: Option<String>,
    /// Longer description of what went wrong.
    pub detail: Option<String>,
}

impl ErrorPayload {
    /// True when decoding produced no usable information at all.
    ///
    /// A zero payload on a success response must never surface as an error;
    /// on a failure response it is replaced by [`ErrorPayload::from_status`].
    pub fn is_zero(&self) -> bool {
        self.error.is_none()
            && self.error_code.is_none()
            && self.reason.is_none()
            && self.detail.is_none()
    }

    /// Payload synthesized from the HTTP status when the response body was
    /// empty or unparseable.
    pub(crate) fn from_status(status: StatusCode) -> Self {
        Self {
            error: Some(status.as_u16()),
            reason: status.canonical_reason().map(str::to_string),
            ..Self::default()
        }
    }
}

impl fmt::Display for ErrorPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.reason, &self.detail) {
            (Some(reason), Some(detail)) => write!(f, "{reason}: {detail}"),
            (Some(reason), None) => f.write_str(reason),
            (None, Some(detail)) => f.write_str(detail),
            (None, None) => match &self.error_code {
                Some(code) => f.write_str(code),
                None => f.write_str("unknown api error"),
            },
        }
    }
}

/// Successful API response: the decoded body plus response metadata.
#[derive(Debug, Clone)]
pub struct ApiResponse<T> {
    /// HTTP status of the response.
    pub status: StatusCode,
    /// Decoded response body.
    pub body: T,
}

impl<T> ApiResponse<T> {
    /// Consume the response, keeping only the body.
    pub fn into_body(self) -> T {
        self.body
    }
}
