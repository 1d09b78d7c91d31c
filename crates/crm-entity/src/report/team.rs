//! Team productivity metric entity.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A persisted team productivity metric row.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct TeamProductivityMetrics {
    /// Unique row identifier.
    pub id: Uuid,
    /// First day of the reporting range (inclusive).
    pub start_date: NaiveDate,
    /// Last day of the reporting range (inclusive).
    pub end_date: NaiveDate,
    /// Tasks completed over the range.
    pub tasks_completed: i32,
    /// Deals closed over the range.
    pub deals_closed: i32,
    /// Team activity level in `[0, 1]`.
    pub activity_level: f64,
    /// When the row was created. Set once, never mutated.
    pub created_at: DateTime<Utc>,
}
