/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/25
******************************************************************************/

//! Error type shared by the client, the credential provider and the samples.
//!
//! Samples never branch on the variant: the message is printed once and the
//! process finishes normally. The variants exist so callers and tests can tell
//! an authentication failure from a transport failure or an API rejection.

use reqwest::StatusCode;
use thiserror::Error;

/// Main error type for the library
#[derive(Debug, Error)]
pub enum AppError {
    /// Transport failure reported by `reqwest`
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    /// JSON encoding or decoding failure
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    /// Local file or console failure
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    /// Failure signing a service account assertion
    #[error("jwt error: {0}")]
    Jwt(#[from] jsonwebtoken::errors::Error),
    /// The API rejected the bearer token
    #[error("unauthorized")]
    Unauthorized,
    /// The API answered with a structured error envelope
    #[error("api error {code} ({status}): {message}")]
    Api {
        /// HTTP status code reported in the envelope
        code: u16,
        /// Canonical status name, e.g. `NOT_FOUND`
        status: String,
        /// Human readable message
        message: String,
    },
    /// Non-success status without a parseable error envelope
    #[error("unexpected status: {0}")]
    Unexpected(StatusCode),
    /// Configuration could not be loaded
    #[error("config error: {0}")]
    Config(String),
    /// No usable credentials were found, or they were malformed
    #[error("credentials error: {0}")]
    Credentials(String),
    /// The caller supplied an unusable value
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl AppError {
    /// Returns the HTTP status associated with the error, when there is one
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            AppError::Unauthorized => Some(StatusCode::UNAUTHORIZED),
            AppError::Api { code, .. } => StatusCode::from_u16(*code).ok(),
            AppError::Unexpected(status) => Some(*status),
            AppError::Network(e) => e.status(),
            _ => None,
        }
    }
}
