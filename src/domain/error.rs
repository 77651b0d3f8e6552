//! Error types for the eatgo state core.
//!
//! This module defines the centralized error type [`EatgoError`] and a type alias
//! [`Result`] used throughout the crate. All errors are implemented with the
//! `thiserror` crate.
//!
//! The reducer itself never fails: raw input is validated when it is decoded
//! into a typed [`Action`](crate::app::Action), so every error here comes from
//! decoding, persistence or configuration.

use thiserror::Error;

/// The main error type for eatgo operations.
///
/// # Examples
///
/// ```
/// use eatgo::EatgoError;
///
/// let err = EatgoError::UnknownField {
///     form: "loginField",
///     name: "nickname".to_string(),
/// };
/// assert_eq!(err.to_string(), "Unknown loginField field: nickname");
/// ```
#[derive(Debug, Error)]
pub enum EatgoError {
    /// The payload of a recognized action kind could not be decoded.
    ///
    /// Raised by [`RawAction`](crate::app::RawAction) decoding when a known
    /// `type` carries a payload with missing fields or wrong value types.
    #[error("Invalid payload for {kind}: {reason}")]
    InvalidPayload {
        /// Wire name of the action kind (e.g. `setRegions`).
        kind: String,
        /// Decoder message describing what was wrong.
        reason: String,
    },

    /// A form change named a field outside the form's closed set.
    #[error("Unknown {form} field: {name}")]
    UnknownField {
        /// Form the change was addressed to (`loginField` or `reviewField`).
        form: &'static str,
        /// The rejected field name.
        name: String,
    },

    /// A review score was not a non-negative integer.
    #[error("Invalid review score: {0}")]
    InvalidScore(String),

    /// Session storage could not be read or written.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encoding or decoding failed outside of action payloads.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration is invalid or missing.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for eatgo operations.
pub type Result<T> = std::result::Result<T, EatgoError>;
