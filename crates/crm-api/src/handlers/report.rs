//! Report and export handlers.

use axum::Json;
use axum::extract::{Query, State};

use crm_service::report::export::ReportExport;
use crm_service::report::{
    CustomerInteractionReport, PipelineAnalyticsReport, SalesPerformanceReport,
    TeamProductivityReport,
};

use crate::dto::request::{DateRangeParams, ExportParams};
use crate::error::ApiError;
use crate::state::AppState;

/// GET /api/sales-performance?start_date&end_date
pub async fn sales_performance(
    State(state): State<AppState>,
    Query(params): Query<DateRangeParams>,
) -> Result<Json<SalesPerformanceReport>, ApiError> {
    let range = params.into_range()?;
    let report = state.report_service.sales_performance(range).await?;
    Ok(Json(report))
}

/// GET /api/team-productivity?start_date&end_date
pub async fn team_productivity(
    State(state): State<AppState>,
    Query(params): Query<DateRangeParams>,
) -> Result<Json<TeamProductivityReport>, ApiError> {
    let range = params.into_range()?;
    let report = state.report_service.team_productivity(range).await?;
    Ok(Json(report))
}

/// GET /api/customer-interaction?start_date&end_date
pub async fn customer_interaction(
    State(state): State<AppState>,
    Query(params): Query<DateRangeParams>,
) -> Result<Json<CustomerInteractionReport>, ApiError> {
    let range = params.into_range()?;
    let report = state.report_service.customer_interaction(range).await?;
    Ok(Json(report))
}

/// GET /api/pipeline-analytics?start_date&end_date
pub async fn pipeline_analytics(
    State(state): State<AppState>,
    Query(params): Query<DateRangeParams>,
) -> Result<Json<PipelineAnalyticsReport>, ApiError> {
    let range = params.into_range()?;
    let report = state.report_service.pipeline_analytics(range).await?;
    Ok(Json(report))
}

/// GET /api/export?report_type&start_date&end_date
pub async fn export(
    State(state): State<AppState>,
    Query(params): Query<ExportParams>,
) -> Result<Json<ReportExport>, ApiError> {
    let (kind, range) = params.into_parts()?;
    let export = state.report_service.export(kind, range).await?;
    Ok(Json(export))
}
