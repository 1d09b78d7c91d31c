//! CSV export of report data, base64-encoded for the JSON surface.

use std::fmt;
use std::str::FromStr;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use serde::{Deserialize, Serialize};

use crm_core::error::AppError;
use crm_core::result::AppResult;
use crm_core::types::DateRange;

use super::service::ReportService;
use super::{
    CustomerInteractionReport, PipelineAnalyticsReport, SalesPerformanceReport,
    TeamProductivityReport,
};

/// Which report to export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportKind {
    /// Sales performance.
    Sales,
    /// Team productivity.
    Team,
    /// Customer interaction.
    Customer,
    /// Pipeline analytics.
    Pipeline,
}

impl ReportKind {
    /// Lowercase name used in filenames and query parameters.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sales => "sales",
            Self::Team => "team",
            Self::Customer => "customer",
            Self::Pipeline => "pipeline",
        }
    }
}

impl fmt::Display for ReportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ReportKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sales" => Ok(Self::Sales),
            "team" => Ok(Self::Team),
            "customer" => Ok(Self::Customer),
            "pipeline" => Ok(Self::Pipeline),
            _ => Err(AppError::validation(format!(
                "Unsupported report type: '{s}'. Expected one of: sales, team, customer, pipeline"
            ))),
        }
    }
}

/// A rendered export: CSV content, base64-encoded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportExport {
    /// Suggested download filename.
    pub filename: String,
    /// Always `"text/csv"`.
    pub content_type: String,
    /// Base64-encoded UTF-8 CSV payload.
    pub data_b64: String,
}

impl ReportService {
    /// Export the selected report as base64-encoded CSV.
    pub async fn export(&self, kind: ReportKind, range: DateRange) -> AppResult<ReportExport> {
        let csv_text = match kind {
            ReportKind::Sales => sales_csv(&self.sales_performance(range).await?),
            ReportKind::Team => team_csv(&self.team_productivity(range).await?),
            ReportKind::Customer => customer_csv(&self.customer_interaction(range).await?),
            ReportKind::Pipeline => pipeline_csv(&self.pipeline_analytics(range).await?),
        };

        Ok(ReportExport {
            filename: format!("report_{kind}.csv"),
            content_type: "text/csv".to_string(),
            data_b64: BASE64.encode(csv_text.as_bytes()),
        })
    }
}

// Whole-valued floats keep a trailing `.0` in CSV cells, so a revenue of
// 5000.0 exports as `5000.0`, not `5000`.
fn fmt_float(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        value.to_string()
    }
}

fn sales_csv(report: &SalesPerformanceReport) -> String {
    format!(
        "start_date,end_date,revenue,conversion_rate,pipeline_velocity\n{},{},{},{},{}\n",
        report.start_date,
        report.end_date,
        fmt_float(report.revenue),
        fmt_float(report.conversion_rate),
        fmt_float(report.pipeline_velocity),
    )
}

fn team_csv(report: &TeamProductivityReport) -> String {
    format!(
        "start_date,end_date,tasks_completed,deals_closed,activity_level\n{},{},{},{},{}\n",
        report.start_date,
        report.end_date,
        report.tasks_completed,
        report.deals_closed,
        fmt_float(report.activity_level),
    )
}

fn customer_csv(report: &CustomerInteractionReport) -> String {
    format!(
        "start_date,end_date,total_interactions,avg_engagement_score\n{},{},{},{}\n",
        report.start_date,
        report.end_date,
        report.total_interactions,
        fmt_float(report.avg_engagement_score),
    )
}

// The pipeline export carries the range in a leading comment line since the
// per-stage rows have no date columns.
fn pipeline_csv(report: &PipelineAnalyticsReport) -> String {
    let mut csv = format!(
        "# start_date={},end_date={}\nstage,rate\n",
        report.start_date, report.end_date
    );
    for (stage, rate) in &report.stage_conversion_rates {
        csv.push_str(&format!("{stage},{}\n", fmt_float(*rate)));
    }
    csv
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use crm_core::error::ErrorKind;

    fn range(start: &str, end: &str) -> DateRange {
        DateRange::new(
            start.parse::<NaiveDate>().unwrap(),
            end.parse::<NaiveDate>().unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn test_report_kind_parse() {
        assert_eq!("sales".parse::<ReportKind>().unwrap(), ReportKind::Sales);
        assert_eq!(
            "pipeline".parse::<ReportKind>().unwrap(),
            ReportKind::Pipeline
        );
        let err = "weekly".parse::<ReportKind>().unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
    }

    #[test]
    fn test_sales_csv_layout() {
        let report = crate::report::generator::sales_performance(&range("2023-01-01", "2023-01-05"));
        let csv = sales_csv(&report);
        let mut lines = csv.lines();
        assert_eq!(
            lines.next().unwrap(),
            "start_date,end_date,revenue,conversion_rate,pipeline_velocity"
        );
        assert_eq!(lines.next().unwrap(), "2023-01-01,2023-01-05,5000.0,0.2,2.0");
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn test_team_csv_layout() {
        let report = crate::report::generator::team_productivity(&range("2023-01-01", "2023-01-05"));
        let csv = team_csv(&report);
        assert!(csv.starts_with("start_date,end_date,tasks_completed,deals_closed,activity_level\n"));
        assert!(csv.contains("2023-01-01,2023-01-05,25,7,0.75"));
    }

    #[test]
    fn test_customer_csv_layout() {
        let report =
            crate::report::generator::customer_interaction(&range("2023-01-01", "2023-01-05"));
        let csv = customer_csv(&report);
        assert!(csv.starts_with("start_date,end_date,total_interactions,avg_engagement_score\n"));
        assert!(csv.contains("2023-01-01,2023-01-05,100,0.4"));
    }

    #[test]
    fn test_pipeline_csv_layout() {
        let report =
            crate::report::generator::pipeline_analytics(&range("2023-01-01", "2023-01-05"));
        let csv = pipeline_csv(&report);
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "# start_date=2023-01-01,end_date=2023-01-05");
        assert_eq!(lines[1], "stage,rate");
        // one row per stage, BTreeMap order
        assert_eq!(lines.len(), 2 + 5);
        assert_eq!(lines[2], "closed_won,0.125");
        assert!(lines[2..].iter().all(|l| l.split(',').count() == 2));
    }

    #[test]
    fn test_whole_valued_floats_keep_decimal() {
        assert_eq!(fmt_float(5000.0), "5000.0");
        assert_eq!(fmt_float(2.0), "2.0");
        assert_eq!(fmt_float(0.2), "0.2");
        assert_eq!(fmt_float(0.125), "0.125");
    }

    #[test]
    fn test_base64_round_trip() {
        let report = crate::report::generator::sales_performance(&range("2023-01-01", "2023-01-05"));
        let csv = sales_csv(&report);
        let encoded = BASE64.encode(csv.as_bytes());
        let decoded = BASE64.decode(encoded).unwrap();
        assert_eq!(String::from_utf8(decoded).unwrap(), csv);
    }
}
