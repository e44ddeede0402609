//! Error types for the holiday client.
//!
//! # Design
//! Validation failures (`InvalidInput`) and upstream failures (`ApiError`) are
//! separate types because they are treated differently: the first always
//! reaches the caller, the second is collapsed into an empty answer by the
//! public operations. `HolidayError` joins them for the non-collapsing
//! `fetch_*` variants.

use thiserror::Error;

/// A caller-supplied filter names a value the service does not support.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidInput {
    #[error("Country provided is not supported, received: {0}")]
    UnsupportedCountry(String),

    #[error("Year provided not the current, received: {0}")]
    UnsupportedYear(i32),
}

/// Anything that went wrong while performing or interpreting an upstream call.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response (DNS, connect, read failures).
    #[error("transport failed: {0}")]
    Transport(String),

    /// The upstream answered with a status the operation does not accept.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The response body is not the expected holiday shape.
    #[error("deserialization failed: {0}")]
    DeserializationError(String),
}

#[derive(Debug, Error)]
pub enum HolidayError {
    #[error(transparent)]
    InvalidInput(#[from] InvalidInput),

    #[error(transparent)]
    Upstream(#[from] ApiError),
}
