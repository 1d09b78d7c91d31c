//! Application builder: wires repositories, services, and the router,
//! then runs the server.

use std::sync::Arc;

use sqlx::PgPool;

use crm_core::config::AppConfig;
use crm_core::error::AppError;
use crm_database::repositories::document::DocumentRepository;
use crm_database::repositories::report::ReportRepository;
use crm_service::document::{DocumentService, StubVirusScanner};
use crm_service::report::service::ReportService;
use crm_storage::local::DocumentStore;

use crate::router::build_router;
use crate::state::AppState;

/// Build the shared application state from configuration and a pool.
pub async fn build_state(config: AppConfig, db_pool: PgPool) -> Result<AppState, AppError> {
    let store = DocumentStore::new(&config.storage.document_root).await?;

    let report_repo = ReportRepository::new(db_pool.clone());
    let document_repo = DocumentRepository::new(db_pool.clone());

    let report_service = Arc::new(ReportService::new(report_repo));
    let document_service = Arc::new(DocumentService::new(
        document_repo,
        store,
        Arc::new(StubVirusScanner),
        config.storage.clone(),
    ));

    Ok(AppState {
        config: Arc::new(config),
        db_pool,
        report_service,
        document_service,
    })
}

/// Run the HTTP server until shutdown.
pub async fn run_server(config: AppConfig, db_pool: PgPool) -> Result<(), AppError> {
    let bind_addr = config.server.bind_addr();
    let state = build_state(config, db_pool).await?;
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {bind_addr}: {e}")))?;

    tracing::info!(addr = %bind_addr, "CRM reporting service listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to install shutdown signal handler");
    }
    tracing::info!("Shutdown signal received");
}
