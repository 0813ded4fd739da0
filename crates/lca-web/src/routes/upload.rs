//! File upload route handler.
//!
//! Accepts `multipart/form-data` with a `file` part holding plain text and
//! stores it as a new contract.

use axum::{
    extract::{multipart::MultipartError, Multipart, State},
    http::StatusCode,
    Json,
};
use lca_core::contract::{
    self,
    model::{ContractSource, UploadReceipt},
};
use tracing::debug;

use super::error_response;
use crate::state::AppState;

const FILE_FIELD: &str = "file";

/// POST /api/upload - Store an uploaded text file as a contract.
pub async fn upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<UploadReceipt>), (StatusCode, String)> {
    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        if field.name() != Some(FILE_FIELD) {
            debug!(name = ?field.name(), "Skipping multipart field");
            continue;
        }

        if let Some(content_type) = field.content_type() {
            if !is_plain_text(content_type) {
                return Err((
                    StatusCode::UNSUPPORTED_MEDIA_TYPE,
                    format!("Unsupported file type '{}': only text/plain is accepted", content_type),
                ));
            }
        }

        let file_name = field.file_name().unwrap_or_default().to_string();
        let bytes = field.bytes().await.map_err(multipart_error)?;

        let parsed = contract::contract_from_upload(&file_name, &bytes).map_err(error_response)?;
        let stored_name = (!file_name.is_empty()).then_some(file_name.as_str());
        let record = contract::create_contract(&state.db, parsed, ContractSource::Upload, stored_name)
            .map_err(error_response)?;

        return Ok((
            StatusCode::CREATED,
            Json(UploadReceipt {
                file_id: record.id,
                file_name,
                size: bytes.len(),
            }),
        ));
    }

    Err((
        StatusCode::BAD_REQUEST,
        format!("Missing '{}' field in multipart body", FILE_FIELD),
    ))
}

/// `text/plain`, with or without parameters such as `charset`.
fn is_plain_text(content_type: &str) -> bool {
    content_type
        .split(';')
        .next()
        .map(|essence| essence.trim().eq_ignore_ascii_case("text/plain"))
        .unwrap_or(false)
}

fn multipart_error(err: MultipartError) -> (StatusCode, String) {
    (err.status(), err.body_text())
}
