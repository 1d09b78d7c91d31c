//! Application state shared across all handlers.

use std::sync::Arc;

use sqlx::PgPool;

use crm_core::config::AppConfig;
use crm_service::document::DocumentService;
use crm_service::report::service::ReportService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`. All fields are
/// `Arc`-wrapped (or internally pooled) for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// PostgreSQL connection pool (health checks).
    pub db_pool: PgPool,
    /// Report lookup-or-generate service.
    pub report_service: Arc<ReportService>,
    /// Document service.
    pub document_service: Arc<DocumentService>,
}
