//! Liveness route handler.

use axum::Json;
use serde::Serialize;

pub const ROOT_MESSAGE: &str = "Legal Contract Analyzer Backend Running";

#[derive(Serialize)]
pub struct RootResponse {
    pub message: &'static str,
}

/// GET / - Report that the backend is up.
pub async fn index() -> Json<RootResponse> {
    Json(RootResponse {
        message: ROOT_MESSAGE,
    })
}
