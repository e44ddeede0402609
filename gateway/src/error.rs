//! Mapping of handler failures onto HTTP responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use holidays_core::InvalidInput;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::task::JoinError;
use tracing::{debug, error};

#[derive(Debug, Error)]
pub enum GatewayError {
    /// Rejected filter; the validator message goes back to the caller as is.
    #[error(transparent)]
    InvalidInput(#[from] InvalidInput),

    /// The blocking task running the upstream call panicked or was cancelled.
    #[error("upstream task failed: {0}")]
    Task(#[from] JoinError),
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            GatewayError::InvalidInput(err) => {
                debug!(%err, "rejected filter");
                (StatusCode::BAD_REQUEST, err.to_string())
            }
            GatewayError::Task(err) => {
                error!(%err, "holiday lookup task failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal error".to_string())
            }
        };
        (status, Json(ErrorBody { error: message })).into_response()
    }
}
