//! Response DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crm_entity::document::{Document, VirusScanStatus};

/// Document metadata as exposed over the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentResponse {
    /// Document identifier.
    pub id: Uuid,
    /// Owning customer.
    pub customer_id: Uuid,
    /// Uploading user.
    pub uploaded_by_user_id: Uuid,
    /// Filename as supplied at upload.
    pub original_filename: String,
    /// Generated on-disk filename.
    pub stored_filename: String,
    /// Absolute storage path.
    pub file_path: String,
    /// Detected MIME type.
    pub file_type: String,
    /// File size in bytes.
    pub file_size: i64,
    /// Upload timestamp.
    pub uploaded_at: DateTime<Utc>,
    /// Virus-scan verdict.
    pub virus_scan_status: VirusScanStatus,
    /// Access level label.
    pub access_level: String,
    /// Optional metadata.
    pub metadata: Option<serde_json::Value>,
}

impl From<Document> for DocumentResponse {
    fn from(doc: Document) -> Self {
        Self {
            id: doc.id,
            customer_id: doc.customer_id,
            uploaded_by_user_id: doc.uploaded_by_user_id,
            original_filename: doc.original_filename,
            stored_filename: doc.stored_filename,
            file_path: doc.file_path,
            file_type: doc.file_type,
            file_size: doc.file_size,
            uploaded_at: doc.uploaded_at,
            virus_scan_status: doc.virus_scan_status,
            access_level: doc.access_level,
            metadata: doc.metadata,
        }
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall status.
    pub status: String,
    /// Service version.
    pub version: String,
    /// Database connectivity.
    pub database: String,
}
