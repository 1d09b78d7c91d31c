//! Customer interaction metric entity.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A persisted customer interaction metric row.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CustomerInteractionMetrics {
    /// Unique row identifier.
    pub id: Uuid,
    /// First day of the reporting range (inclusive).
    pub start_date: NaiveDate,
    /// Last day of the reporting range (inclusive).
    pub end_date: NaiveDate,
    /// Total customer interactions over the range.
    pub total_interactions: i32,
    /// Average engagement score in `[0, 1]`.
    pub avg_engagement_score: f64,
    /// When the row was created. Set once, never mutated.
    pub created_at: DateTime<Utc>,
}
