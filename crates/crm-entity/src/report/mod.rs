//! Metric report entities, one per report kind.
//!
//! Each table holds previously computed values keyed by the inclusive
//! `(start_date, end_date)` range. At most one row per range is assumed
//! per kind; the uniqueness is a design assumption, not a database
//! constraint.

pub mod customer;
pub mod pipeline;
pub mod sales;
pub mod team;

pub use customer::CustomerInteractionMetrics;
pub use pipeline::PipelineAnalyticsMetrics;
pub use sales::SalesPerformanceMetrics;
pub use team::TeamProductivityMetrics;
