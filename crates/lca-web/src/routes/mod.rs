//! Route handlers.

pub mod analysis;
pub mod contracts;
pub mod root;
pub mod upload;

use axum::http::StatusCode;
use lca_core::LcaError;

/// Map a domain error onto the status code and message returned to clients.
pub(crate) fn error_response(err: LcaError) -> (StatusCode, String) {
    let status = match &err {
        e if e.is_not_found() => StatusCode::NOT_FOUND,
        LcaError::ValidationError(_) => StatusCode::BAD_REQUEST,
        LcaError::PayloadTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };

    if status.is_server_error() {
        tracing::error!(error = %err, "Request failed");
    }

    (status, err.to_string())
}
