//! Uploaded document entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::scan::VirusScanStatus;

/// An uploaded file tracked in the `documents` table.
///
/// The bytes live on disk under the configured document root; this row
/// carries the metadata and the absolute storage path.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Document {
    /// Unique document identifier.
    pub id: Uuid,
    /// The customer this document belongs to.
    pub customer_id: Uuid,
    /// The user who uploaded the document.
    pub uploaded_by_user_id: Uuid,
    /// Filename as supplied by the uploader.
    pub original_filename: String,
    /// Generated on-disk filename (unique).
    pub stored_filename: String,
    /// Absolute path of the stored file.
    pub file_path: String,
    /// Detected MIME type.
    pub file_type: String,
    /// File size in bytes.
    pub file_size: i64,
    /// When the document was uploaded.
    pub uploaded_at: DateTime<Utc>,
    /// Virus-scan verdict recorded at upload time.
    pub virus_scan_status: VirusScanStatus,
    /// Access level label (e.g. `"private"`, `"team"`).
    pub access_level: String,
    /// Optional caller-supplied metadata (JSONB).
    pub metadata: Option<serde_json::Value>,
}

/// Data required to insert a new document row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateDocument {
    /// The owning customer.
    pub customer_id: Uuid,
    /// The uploading user.
    pub uploaded_by_user_id: Uuid,
    /// Filename as supplied by the uploader.
    pub original_filename: String,
    /// Generated on-disk filename.
    pub stored_filename: String,
    /// Absolute path of the stored file.
    pub file_path: String,
    /// Detected MIME type.
    pub file_type: String,
    /// File size in bytes.
    pub file_size: i64,
    /// Virus-scan verdict.
    pub virus_scan_status: VirusScanStatus,
    /// Access level label.
    pub access_level: String,
    /// Optional caller-supplied metadata.
    pub metadata: Option<serde_json::Value>,
}
