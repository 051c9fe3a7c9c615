//! Application error taxonomy and its mapping to HTTP status codes.
//!
//! Services and repositories return [`AppError`] unchanged up to the HTTP
//! boundary, where [`status_of`] performs the single translation into a
//! transport status. Anything that is not an `AppError` is reported as 500.

use std::error::Error as StdError;

use serde::Serialize;
use thiserror::Error;

/// Result type used by services and repositories.
pub type AppResult<T> = Result<T, AppError>;

const STATUS_OK: u16 = 200;
const STATUS_INTERNAL_SERVER_ERROR: u16 = 500;

/// Closed set of error categories.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ErrorKind {
    /// Unauthorized (401).
    Authorization,
    /// Validation, malformed request body, etc. (400).
    BadRequest,
    /// Resource already exists (409).
    Conflict,
    /// Server failures and fallback for anything unclassified (500).
    Internal,
    /// Resource not found (404).
    NotFound,
    /// Request body over the configured limit (413).
    PayloadTooLarge,
}

impl ErrorKind {
    pub const ALL: [ErrorKind; 6] = [
        ErrorKind::Authorization,
        ErrorKind::BadRequest,
        ErrorKind::Conflict,
        ErrorKind::Internal,
        ErrorKind::NotFound,
        ErrorKind::PayloadTooLarge,
    ];

    /// HTTP status code for this kind.
    pub fn status(self) -> u16 {
        match self {
            ErrorKind::Authorization => 401,
            ErrorKind::BadRequest => 400,
            ErrorKind::Conflict => 409,
            ErrorKind::Internal => STATUS_INTERNAL_SERVER_ERROR,
            ErrorKind::NotFound => 404,
            ErrorKind::PayloadTooLarge => 413,
        }
    }

    /// Wire tag, as it appears in the `type` field of an error body.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::Authorization => "AUTHORIZATION",
            ErrorKind::BadRequest => "BADREQUEST",
            ErrorKind::Conflict => "CONFLICT",
            ErrorKind::Internal => "INTERNAL",
            ErrorKind::NotFound => "NOTFOUND",
            ErrorKind::PayloadTooLarge => "PAYLOADTOOLARGE",
        }
    }

    /// Parse a wire tag. Unknown tags yield `None`.
    pub fn parse(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == tag)
    }
}

impl core::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Status for a wire tag; unrecognized tags map to 500.
pub fn status_for_tag(tag: &str) -> u16 {
    ErrorKind::parse(tag).map_or(STATUS_INTERNAL_SERVER_ERROR, ErrorKind::status)
}

/// Typed application error: a kind plus a client-facing message.
///
/// Fields are private; an `AppError` does not change after construction.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[error("{message}")]
pub struct AppError {
    #[serde(rename = "type")]
    kind: ErrorKind,
    message: String,
}

impl AppError {
    /// 401 error. The message is used as given.
    pub fn authorization(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Authorization,
            message: message.into(),
        }
    }

    /// 400 error (validation, malformed request body, etc).
    pub fn bad_request(message: impl core::fmt::Display) -> Self {
        Self {
            kind: ErrorKind::BadRequest,
            message: format!("Bad request: {message}"),
        }
    }

    /// 409 error for a resource that already exists.
    pub fn conflict(name: impl core::fmt::Display, value: impl core::fmt::Display) -> Self {
        Self {
            kind: ErrorKind::Conflict,
            message: format!("resource: {name} already exists: {value}"),
        }
    }

    /// 500 error. Takes no detail so nothing internal reaches the client.
    pub fn internal() -> Self {
        Self {
            kind: ErrorKind::Internal,
            message: "Internal server error".to_string(),
        }
    }

    /// 404 error for a resource looked up by some value.
    pub fn not_found(name: impl core::fmt::Display, value: impl core::fmt::Display) -> Self {
        Self {
            kind: ErrorKind::NotFound,
            message: format!("resource: {name} with the value {value} not found"),
        }
    }

    /// 413 error reporting the limit and the received size.
    pub fn payload_too_large(max_body_size: u64, content_length: u64) -> Self {
        Self {
            kind: ErrorKind::PayloadTooLarge,
            message: format!(
                "payload too large: max size is {max_body_size}, but got {content_length}"
            ),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// HTTP status code for this error's kind.
    pub fn status(&self) -> u16 {
        self.kind.status()
    }
}

/// Find the first [`AppError`] in `err`'s source chain (starting with `err`).
pub fn find_app_error<'a>(err: &'a (dyn StdError + 'static)) -> Option<&'a AppError> {
    let mut current = Some(err);
    while let Some(e) = current {
        if let Some(app) = e.downcast_ref::<AppError>() {
            return Some(app);
        }
        current = e.source();
    }
    None
}

/// Map any error to an HTTP status code.
///
/// - no error: 200
/// - an error carrying an [`AppError`] in its chain: that kind's status
/// - anything else: 500
pub fn status_of(err: Option<&(dyn StdError + 'static)>) -> u16 {
    match err {
        None => STATUS_OK,
        Some(err) => find_app_error(err).map_or(STATUS_INTERNAL_SERVER_ERROR, AppError::status),
    }
}
