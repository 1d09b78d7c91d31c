//! Route definitions for the CRM reporting HTTP API.
//!
//! All routes are mounted under `/api`. The router receives `AppState` and
//! passes it to all handlers via Axum's `State` extractor.

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{delete, get, post},
};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Multipart framing overhead allowed on top of the configured file ceiling.
const UPLOAD_OVERHEAD_BYTES: usize = 64 * 1024;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let max_body = state.config.storage.max_file_size_bytes as usize + UPLOAD_OVERHEAD_BYTES;

    let api_routes = Router::new()
        .merge(report_routes())
        .merge(document_routes())
        .merge(health_routes());

    Router::new()
        .nest("/api", api_routes)
        .layer(DefaultBodyLimit::max(max_body))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Report lookup and export endpoints.
fn report_routes() -> Router<AppState> {
    Router::new()
        .route("/sales-performance", get(handlers::report::sales_performance))
        .route("/team-productivity", get(handlers::report::team_productivity))
        .route(
            "/customer-interaction",
            get(handlers::report::customer_interaction),
        )
        .route(
            "/pipeline-analytics",
            get(handlers::report::pipeline_analytics),
        )
        .route("/export", get(handlers::report::export))
}

/// Document upload, metadata, download, list, delete.
fn document_routes() -> Router<AppState> {
    Router::new()
        .route("/documents", post(handlers::document::upload))
        .route("/documents/{id}", get(handlers::document::get_metadata))
        .route("/documents/{id}", delete(handlers::document::delete))
        .route(
            "/documents/{id}/download",
            get(handlers::document::download),
        )
        .route(
            "/customers/{id}/documents",
            get(handlers::document::list_for_customer),
        )
}

/// Health endpoint.
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
