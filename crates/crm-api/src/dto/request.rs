//! Request DTOs with validation.
//!
//! Date parameters arrive as strings and are parsed explicitly so that
//! malformed input becomes a 422 validation response rather than a framework
//! rejection with no body.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crm_core::error::AppError;
use crm_core::result::AppResult;
use crm_core::types::DateRange;
use crm_service::report::export::ReportKind;

/// Query parameters carrying a date range.
///
/// Both fields are optional at the deserialization layer so that missing
/// parameters surface as validation errors too.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DateRangeParams {
    /// First day, `YYYY-MM-DD`.
    pub start_date: Option<String>,
    /// Last day, `YYYY-MM-DD`.
    pub end_date: Option<String>,
}

impl DateRangeParams {
    /// Parse and validate into a [`DateRange`].
    pub fn into_range(self) -> AppResult<DateRange> {
        let start = parse_date("start_date", self.start_date.as_deref())?;
        let end = parse_date("end_date", self.end_date.as_deref())?;
        DateRange::new(start, end)
    }
}

/// Query parameters for the export endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExportParams {
    /// Which report to export: `sales`, `team`, `customer`, or `pipeline`.
    pub report_type: Option<String>,
    /// First day, `YYYY-MM-DD`.
    pub start_date: Option<String>,
    /// Last day, `YYYY-MM-DD`.
    pub end_date: Option<String>,
}

impl ExportParams {
    /// Parse into a report kind plus validated range.
    pub fn into_parts(self) -> AppResult<(ReportKind, DateRange)> {
        let kind = self
            .report_type
            .as_deref()
            .ok_or_else(|| AppError::validation("report_type is required"))?
            .parse::<ReportKind>()?;
        let range = DateRangeParams {
            start_date: self.start_date,
            end_date: self.end_date,
        }
        .into_range()?;
        Ok((kind, range))
    }
}

/// Non-file fields of a document upload, collected from the multipart form.
#[derive(Debug, Clone, Validate)]
pub struct UploadForm {
    /// The owning customer.
    pub customer_id: Uuid,
    /// The uploading user.
    pub uploaded_by_user_id: Uuid,
    /// Access level label.
    #[validate(length(min = 1, message = "access_level is required"))]
    pub access_level: String,
    /// Optional metadata JSON.
    pub metadata: Option<serde_json::Value>,
}

fn parse_date(field: &str, value: Option<&str>) -> AppResult<NaiveDate> {
    let value = value.ok_or_else(|| AppError::validation(format!("{field} is required")))?;
    value
        .parse::<NaiveDate>()
        .map_err(|_| AppError::validation(format!("{field} must be a valid YYYY-MM-DD date")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crm_core::error::ErrorKind;

    fn params(start: &str, end: &str) -> DateRangeParams {
        DateRangeParams {
            start_date: Some(start.to_string()),
            end_date: Some(end.to_string()),
        }
    }

    #[test]
    fn test_valid_range_parses() {
        let range = params("2023-01-01", "2023-01-05").into_range().unwrap();
        assert_eq!(range.span_days(), 5);
    }

    #[test]
    fn test_unparseable_date_is_validation_error() {
        let err = params("01/05/2023", "2023-01-05").into_range().unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
        assert!(err.message.contains("start_date"));
    }

    #[test]
    fn test_inverted_range_is_validation_error() {
        let err = params("2023-01-05", "2023-01-01").into_range().unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
    }

    #[test]
    fn test_missing_date_is_validation_error() {
        let err = DateRangeParams {
            start_date: Some("2023-01-01".to_string()),
            end_date: None,
        }
        .into_range()
        .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
        assert!(err.message.contains("end_date"));
    }

    #[test]
    fn test_export_params_parse() {
        let export = ExportParams {
            report_type: Some("pipeline".to_string()),
            start_date: Some("2023-01-01".to_string()),
            end_date: Some("2023-01-05".to_string()),
        };
        let (kind, range) = export.into_parts().unwrap();
        assert_eq!(kind, ReportKind::Pipeline);
        assert_eq!(range.span_days(), 5);
    }

    #[test]
    fn test_unknown_report_type_is_validation_error() {
        let export = ExportParams {
            report_type: Some("weekly".to_string()),
            ..ExportParams::default()
        };
        assert_eq!(
            export.into_parts().unwrap_err().kind,
            ErrorKind::Validation
        );
    }
}
