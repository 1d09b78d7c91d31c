//! Report service: read the metric store, else generate.
//!
//! For each kind: look up a persisted row keyed by the exact
//! `(start_date, end_date)` pair. A hit is mapped to the response record
//! verbatim, with no recomputation. A miss is synthesized by the generator
//! and returned **without** being written back; the store only holds rows
//! seeded out of band. Database faults propagate unwrapped.
//!
//! Range validation happens when the caller constructs the [`DateRange`],
//! so every range reaching this service already satisfies `start <= end`.

use crm_core::result::AppResult;
use crm_core::types::DateRange;
use crm_database::repositories::report::ReportRepository;
use tracing::debug;

use super::generator;
use super::{
    CustomerInteractionReport, PipelineAnalyticsReport, SalesPerformanceReport,
    TeamProductivityReport,
};

/// Orchestrates metric lookups against the store with generated fallbacks.
#[derive(Debug, Clone)]
pub struct ReportService {
    /// Metric store repository.
    repo: ReportRepository,
}

impl ReportService {
    /// Create a new report service.
    pub fn new(repo: ReportRepository) -> Self {
        Self { repo }
    }

    /// Sales performance for a range.
    pub async fn sales_performance(&self, range: DateRange) -> AppResult<SalesPerformanceReport> {
        if let Some(row) = self.repo.find_sales(&range).await? {
            debug!(?range, "Serving sales performance from store");
            return Ok(SalesPerformanceReport {
                start_date: row.start_date,
                end_date: row.end_date,
                revenue: row.revenue,
                conversion_rate: row.conversion_rate,
                pipeline_velocity: row.pipeline_velocity,
            });
        }
        debug!(?range, "Generating sales performance");
        Ok(generator::sales_performance(&range))
    }

    /// Team productivity for a range.
    pub async fn team_productivity(&self, range: DateRange) -> AppResult<TeamProductivityReport> {
        if let Some(row) = self.repo.find_team(&range).await? {
            debug!(?range, "Serving team productivity from store");
            return Ok(TeamProductivityReport {
                start_date: row.start_date,
                end_date: row.end_date,
                tasks_completed: row.tasks_completed,
                deals_closed: row.deals_closed,
                activity_level: row.activity_level,
            });
        }
        debug!(?range, "Generating team productivity");
        Ok(generator::team_productivity(&range))
    }

    /// Customer interaction for a range.
    pub async fn customer_interaction(
        &self,
        range: DateRange,
    ) -> AppResult<CustomerInteractionReport> {
        if let Some(row) = self.repo.find_customer(&range).await? {
            debug!(?range, "Serving customer interaction from store");
            return Ok(CustomerInteractionReport {
                start_date: row.start_date,
                end_date: row.end_date,
                total_interactions: row.total_interactions,
                avg_engagement_score: row.avg_engagement_score,
            });
        }
        debug!(?range, "Generating customer interaction");
        Ok(generator::customer_interaction(&range))
    }

    /// Pipeline analytics for a range.
    pub async fn pipeline_analytics(
        &self,
        range: DateRange,
    ) -> AppResult<PipelineAnalyticsReport> {
        if let Some(row) = self.repo.find_pipeline(&range).await? {
            debug!(?range, "Serving pipeline analytics from store");
            return Ok(PipelineAnalyticsReport {
                start_date: row.start_date,
                end_date: row.end_date,
                stage_conversion_rates: row.stage_conversion_rates.0,
            });
        }
        debug!(?range, "Generating pipeline analytics");
        Ok(generator::pipeline_analytics(&range))
    }
}
