//! Metric store repository.
//!
//! One table per metric kind; the inclusive `(start_date, end_date)` pair
//! is the lookup key. The report service only ever reads; the insert
//! methods exist for seeding rows out of band.

use sqlx::PgPool;
use sqlx::types::Json;
use uuid::Uuid;

use crm_core::error::{AppError, ErrorKind};
use crm_core::result::AppResult;
use crm_core::types::DateRange;
use crm_entity::report::pipeline::StageRates;
use crm_entity::report::{
    CustomerInteractionMetrics, PipelineAnalyticsMetrics, SalesPerformanceMetrics,
    TeamProductivityMetrics,
};

/// Repository for the four metric tables.
#[derive(Debug, Clone)]
pub struct ReportRepository {
    pool: PgPool,
}

impl ReportRepository {
    /// Create a new report repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a sales performance row by exact range key.
    pub async fn find_sales(&self, range: &DateRange) -> AppResult<Option<SalesPerformanceMetrics>> {
        sqlx::query_as::<_, SalesPerformanceMetrics>(
            "SELECT * FROM sales_performance_metrics WHERE start_date = $1 AND end_date = $2",
        )
        .bind(range.start)
        .bind(range.end)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to find sales performance row", e)
        })
    }

    /// Find a team productivity row by exact range key.
    pub async fn find_team(&self, range: &DateRange) -> AppResult<Option<TeamProductivityMetrics>> {
        sqlx::query_as::<_, TeamProductivityMetrics>(
            "SELECT * FROM team_productivity_metrics WHERE start_date = $1 AND end_date = $2",
        )
        .bind(range.start)
        .bind(range.end)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to find team productivity row", e)
        })
    }

    /// Find a customer interaction row by exact range key.
    pub async fn find_customer(
        &self,
        range: &DateRange,
    ) -> AppResult<Option<CustomerInteractionMetrics>> {
        sqlx::query_as::<_, CustomerInteractionMetrics>(
            "SELECT * FROM customer_interaction_metrics WHERE start_date = $1 AND end_date = $2",
        )
        .bind(range.start)
        .bind(range.end)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(
                ErrorKind::Database,
                "Failed to find customer interaction row",
                e,
            )
        })
    }

    /// Find a pipeline analytics row by exact range key.
    pub async fn find_pipeline(
        &self,
        range: &DateRange,
    ) -> AppResult<Option<PipelineAnalyticsMetrics>> {
        sqlx::query_as::<_, PipelineAnalyticsMetrics>(
            "SELECT * FROM pipeline_analytics_metrics WHERE start_date = $1 AND end_date = $2",
        )
        .bind(range.start)
        .bind(range.end)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to find pipeline analytics row", e)
        })
    }

    /// Insert a sales performance row.
    pub async fn insert_sales(
        &self,
        range: &DateRange,
        revenue: f64,
        conversion_rate: f64,
        pipeline_velocity: f64,
    ) -> AppResult<SalesPerformanceMetrics> {
        sqlx::query_as::<_, SalesPerformanceMetrics>(
            "INSERT INTO sales_performance_metrics \
             (id, start_date, end_date, revenue, conversion_rate, pipeline_velocity) \
             VALUES ($1, $2, $3, $4, $5, $6) RETURNING *",
        )
        .bind(Uuid::new_v4())
        .bind(range.start)
        .bind(range.end)
        .bind(revenue)
        .bind(conversion_rate)
        .bind(pipeline_velocity)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to insert sales performance row", e)
        })
    }

    /// Insert a team productivity row.
    pub async fn insert_team(
        &self,
        range: &DateRange,
        tasks_completed: i32,
        deals_closed: i32,
        activity_level: f64,
    ) -> AppResult<TeamProductivityMetrics> {
        sqlx::query_as::<_, TeamProductivityMetrics>(
            "INSERT INTO team_productivity_metrics \
             (id, start_date, end_date, tasks_completed, deals_closed, activity_level) \
             VALUES ($1, $2, $3, $4, $5, $6) RETURNING *",
        )
        .bind(Uuid::new_v4())
        .bind(range.start)
        .bind(range.end)
        .bind(tasks_completed)
        .bind(deals_closed)
        .bind(activity_level)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to insert team productivity row", e)
        })
    }

    /// Insert a customer interaction row.
    pub async fn insert_customer(
        &self,
        range: &DateRange,
        total_interactions: i32,
        avg_engagement_score: f64,
    ) -> AppResult<CustomerInteractionMetrics> {
        sqlx::query_as::<_, CustomerInteractionMetrics>(
            "INSERT INTO customer_interaction_metrics \
             (id, start_date, end_date, total_interactions, avg_engagement_score) \
             VALUES ($1, $2, $3, $4, $5) RETURNING *",
        )
        .bind(Uuid::new_v4())
        .bind(range.start)
        .bind(range.end)
        .bind(total_interactions)
        .bind(avg_engagement_score)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(
                ErrorKind::Database,
                "Failed to insert customer interaction row",
                e,
            )
        })
    }

    /// Insert a pipeline analytics row.
    pub async fn insert_pipeline(
        &self,
        range: &DateRange,
        stage_conversion_rates: StageRates,
    ) -> AppResult<PipelineAnalyticsMetrics> {
        sqlx::query_as::<_, PipelineAnalyticsMetrics>(
            "INSERT INTO pipeline_analytics_metrics \
             (id, start_date, end_date, stage_conversion_rates) \
             VALUES ($1, $2, $3, $4) RETURNING *",
        )
        .bind(Uuid::new_v4())
        .bind(range.start)
        .bind(range.end)
        .bind(Json(stage_conversion_rates))
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to insert pipeline analytics row", e)
        })
    }
}
