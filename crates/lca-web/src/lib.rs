//! LCA Web Server
//!
//! Axum-based REST API for the Legal Contract Analyzer.

pub mod routes;
pub mod state;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use lca_core::contract::MAX_UPLOAD_BYTES;
use lca_db::DbPool;
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use state::AppState;

/// Room for multipart boundaries and JSON framing on top of the text itself.
const MULTIPART_OVERHEAD: usize = 64 * 1024;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        // Contracts
        .route(
            "/contracts",
            get(routes::contracts::list_contracts).post(routes::contracts::create_contract),
        )
        .route(
            "/contracts/{id}",
            get(routes::contracts::get_contract).delete(routes::contracts::delete_contract),
        )
        // Analyses
        .route(
            "/contracts/{id}/analysis",
            get(routes::analysis::get_analysis).put(routes::analysis::put_analysis),
        )
        .route("/status/{id}", get(routes::analysis::get_status))
        // Upload
        .route("/upload", post(routes::upload::upload))
        // Contract text can be as large as an uploaded file, in JSON or multipart.
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES + MULTIPART_OVERHEAD));

    Router::new()
        .route("/", get(routes::root::index))
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Run the web server until Ctrl+C.
pub async fn run_server(db: Arc<DbPool>, host: &str, port: u16) -> anyhow::Result<()> {
    let state = AppState::new(db);
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind((host, port)).await?;
    tracing::info!("Web server listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Web server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "Failed to listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
}
