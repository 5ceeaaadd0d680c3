//! Error types for showfinder
//!
//! This module defines all error types used throughout the library.
//! ShowFinderError implements Serialize so it can cross the Tauri boundary.

use serde::{Serialize, Serializer};
use thiserror::Error;

/// Error type for showfinder operations
#[derive(Error, Debug)]
pub enum ShowFinderError {
    /// Transport-level failure (connection, TLS, timeout, body read)
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Response body was not JSON or did not match the expected shape
    #[error("Failed to decode response from {endpoint}: {message}")]
    DecodeError { endpoint: String, message: String },

    /// Non-2xx status, only reported when `ClientConfig::reject_error_status` is set
    #[error("Unexpected HTTP status {status} from {endpoint}")]
    StatusError { status: u16, endpoint: String },

    /// Base URL or endpoint could not be combined into a valid URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// A selectable entry carried an identifier that is not a show id
    #[error("Invalid show ID: {0}")]
    InvalidId(String),
}

/// Serialize ShowFinderError as its display string
impl Serialize for ShowFinderError {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

/// Result type alias for showfinder operations
pub type Result<T> = std::result::Result<T, ShowFinderError>;
