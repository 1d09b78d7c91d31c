//! Pipeline analytics metric entity.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use sqlx::types::Json;
use uuid::Uuid;

/// Mapping from pipeline stage name to conversion rate.
///
/// A `BTreeMap` keeps iteration deterministic for CSV export and tests.
pub type StageRates = BTreeMap<String, f64>;

/// A persisted pipeline analytics metric row.
///
/// The stage rates are stored as JSONB.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct PipelineAnalyticsMetrics {
    /// Unique row identifier.
    pub id: Uuid,
    /// First day of the reporting range (inclusive).
    pub start_date: NaiveDate,
    /// Last day of the reporting range (inclusive).
    pub end_date: NaiveDate,
    /// Per-stage conversion rates, each within `[0.01, 0.95]`.
    pub stage_conversion_rates: Json<StageRates>,
    /// When the row was created. Set once, never mutated.
    pub created_at: DateTime<Utc>,
}
