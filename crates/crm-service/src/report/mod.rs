//! Report services: lookup-or-generate orchestration, deterministic
//! generation formulas, and CSV export.

pub mod export;
pub mod generator;
pub mod service;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crm_entity::report::pipeline::StageRates;

/// Sales performance report for a date range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesPerformanceReport {
    /// First day of the range (inclusive), echoing the request.
    pub start_date: NaiveDate,
    /// Last day of the range (inclusive), echoing the request.
    pub end_date: NaiveDate,
    /// Total revenue over the range.
    pub revenue: f64,
    /// Lead-to-deal conversion rate.
    pub conversion_rate: f64,
    /// Pipeline velocity.
    pub pipeline_velocity: f64,
}

/// Team productivity report for a date range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamProductivityReport {
    /// First day of the range (inclusive), echoing the request.
    pub start_date: NaiveDate,
    /// Last day of the range (inclusive), echoing the request.
    pub end_date: NaiveDate,
    /// Tasks completed over the range.
    pub tasks_completed: i32,
    /// Deals closed over the range.
    pub deals_closed: i32,
    /// Team activity level in `[0, 1]`.
    pub activity_level: f64,
}

/// Customer interaction report for a date range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerInteractionReport {
    /// First day of the range (inclusive), echoing the request.
    pub start_date: NaiveDate,
    /// Last day of the range (inclusive), echoing the request.
    pub end_date: NaiveDate,
    /// Total customer interactions over the range.
    pub total_interactions: i32,
    /// Average engagement score in `[0, 1]`.
    pub avg_engagement_score: f64,
}

/// Pipeline analytics report for a date range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineAnalyticsReport {
    /// First day of the range (inclusive), echoing the request.
    pub start_date: NaiveDate,
    /// Last day of the range (inclusive), echoing the request.
    pub end_date: NaiveDate,
    /// Per-stage conversion rates, each within `[0.01, 0.95]`.
    pub stage_conversion_rates: StageRates,
}
