//! Document repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use crm_core::error::{AppError, ErrorKind};
use crm_core::result::AppResult;
use crm_entity::document::{CreateDocument, Document};

/// Repository for document metadata rows.
#[derive(Debug, Clone)]
pub struct DocumentRepository {
    pool: PgPool,
}

impl DocumentRepository {
    /// Create a new document repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new document row.
    pub async fn insert(&self, doc: &CreateDocument) -> AppResult<Document> {
        sqlx::query_as::<_, Document>(
            "INSERT INTO documents \
             (id, customer_id, uploaded_by_user_id, original_filename, stored_filename, \
              file_path, file_type, file_size, virus_scan_status, access_level, metadata) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11) RETURNING *",
        )
        .bind(Uuid::new_v4())
        .bind(doc.customer_id)
        .bind(doc.uploaded_by_user_id)
        .bind(&doc.original_filename)
        .bind(&doc.stored_filename)
        .bind(&doc.file_path)
        .bind(&doc.file_type)
        .bind(doc.file_size)
        .bind(doc.virus_scan_status)
        .bind(&doc.access_level)
        .bind(&doc.metadata)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to insert document", e))
    }

    /// Find a document by ID.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Document>> {
        sqlx::query_as::<_, Document>("SELECT * FROM documents WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find document", e))
    }

    /// List all documents belonging to a customer, newest first.
    pub async fn find_by_customer(&self, customer_id: Uuid) -> AppResult<Vec<Document>> {
        sqlx::query_as::<_, Document>(
            "SELECT * FROM documents WHERE customer_id = $1 ORDER BY uploaded_at DESC",
        )
        .bind(customer_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list documents", e))
    }

    /// Delete a document row. Returns whether a row was removed.
    pub async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM documents WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete document", e)
            })?;
        Ok(result.rows_affected() > 0)
    }
}
