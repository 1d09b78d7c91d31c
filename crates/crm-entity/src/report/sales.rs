//! Sales performance metric entity.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A persisted sales performance metric row.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SalesPerformanceMetrics {
    /// Unique row identifier.
    pub id: Uuid,
    /// First day of the reporting range (inclusive).
    pub start_date: NaiveDate,
    /// Last day of the reporting range (inclusive).
    pub end_date: NaiveDate,
    /// Total revenue over the range.
    pub revenue: f64,
    /// Lead-to-deal conversion rate.
    pub conversion_rate: f64,
    /// Pipeline velocity (deals per unit time).
    pub pipeline_velocity: f64,
    /// When the row was created. Set once, never mutated.
    pub created_at: DateTime<Utc>,
}
