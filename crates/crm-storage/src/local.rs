//! Local filesystem document store.
//!
//! Files live under `{root}/{customer_id}/{stored_filename}`. Writes go to
//! a sibling temporary file first and are renamed into place; the rename is
//! atomic on the same filesystem, so readers never observe a partial file.

use std::path::{Path, PathBuf};

use bytes::Bytes;
use tokio::fs;
use tracing::{debug, warn};
use uuid::Uuid;

use crm_core::error::{AppError, ErrorKind};
use crm_core::result::AppResult;

/// Result of a successful store: the generated filename and where it landed.
#[derive(Debug, Clone)]
pub struct StoredFile {
    /// Generated on-disk filename (`{uuid}{ext}`).
    pub stored_filename: String,
    /// Absolute path of the stored file.
    pub path: PathBuf,
}

/// Local filesystem document store rooted at a configured directory.
#[derive(Debug, Clone)]
pub struct DocumentStore {
    /// Root directory for all stored documents.
    root: PathBuf,
}

impl DocumentStore {
    /// Create a new document store rooted at the given path.
    pub async fn new(root_path: &str) -> AppResult<Self> {
        let root = PathBuf::from(root_path);
        fs::create_dir_all(&root).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to create document root: {}", root.display()),
                e,
            )
        })?;
        Ok(Self { root })
    }

    /// Save file bytes under the customer's directory.
    ///
    /// The stored filename keeps the original extension so the on-disk
    /// layout stays browsable. Any leftover temporary file is removed on
    /// failure.
    pub async fn save(
        &self,
        customer_id: Uuid,
        original_filename: &str,
        data: &Bytes,
    ) -> AppResult<StoredFile> {
        let customer_dir = self.ensure_customer_dir(customer_id).await?;

        let ext = extension_of(original_filename);
        let stored_filename = format!("{}{ext}", Uuid::new_v4().simple());
        let final_path = customer_dir.join(&stored_filename);
        let tmp_path = customer_dir.join(format!(".{stored_filename}.tmp"));

        if let Err(e) = fs::write(&tmp_path, data).await {
            self.cleanup_tmp(&tmp_path).await;
            return Err(AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to write temporary file for '{original_filename}'"),
                e,
            ));
        }

        if let Err(e) = fs::rename(&tmp_path, &final_path).await {
            self.cleanup_tmp(&tmp_path).await;
            return Err(AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to move '{original_filename}' into place"),
                e,
            ));
        }

        let path = std::path::absolute(&final_path).map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to resolve stored path: {}", final_path.display()),
                e,
            )
        })?;

        debug!(path = %path.display(), bytes = data.len(), "Stored document");
        Ok(StoredFile {
            stored_filename,
            path,
        })
    }

    /// Read the full content of a stored file.
    pub async fn read(&self, path: &Path) -> AppResult<Bytes> {
        let data = fs::read(path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                AppError::not_found(format!("Stored file not found: {}", path.display()))
            } else {
                AppError::with_source(
                    ErrorKind::Storage,
                    format!("Failed to read stored file: {}", path.display()),
                    e,
                )
            }
        })?;
        Ok(Bytes::from(data))
    }

    /// Delete a stored file. Missing files are treated as already deleted.
    pub async fn delete(&self, path: &Path) -> AppResult<()> {
        match fs::remove_file(path).await {
            Ok(()) => {
                debug!(path = %path.display(), "Deleted document");
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to delete stored file: {}", path.display()),
                e,
            )),
        }
    }

    async fn ensure_customer_dir(&self, customer_id: Uuid) -> AppResult<PathBuf> {
        let dir = self.root.join(customer_id.to_string());
        fs::create_dir_all(&dir).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to create customer directory: {}", dir.display()),
                e,
            )
        })?;
        Ok(dir)
    }

    async fn cleanup_tmp(&self, tmp_path: &Path) {
        if let Err(e) = fs::remove_file(tmp_path).await {
            if e.kind() != std::io::ErrorKind::NotFound {
                warn!(path = %tmp_path.display(), error = %e, "Failed to clean up temp file");
            }
        }
    }
}

/// Extension of a filename including the leading dot, or empty.
fn extension_of(filename: &str) -> String {
    Path::new(filename)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| format!(".{e}"))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn store() -> (tempfile::TempDir, DocumentStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = DocumentStore::new(dir.path().to_str().unwrap())
            .await
            .unwrap();
        (dir, store)
    }

    #[tokio::test]
    async fn test_save_read_delete_round_trip() {
        let (_dir, store) = store().await;
        let customer = Uuid::new_v4();
        let data = Bytes::from_static(b"hello report");

        let stored = store.save(customer, "notes.pdf", &data).await.unwrap();
        assert!(stored.stored_filename.ends_with(".pdf"));
        assert!(stored.path.is_absolute());

        let read_back = store.read(&stored.path).await.unwrap();
        assert_eq!(read_back, data);

        store.delete(&stored.path).await.unwrap();
        assert!(!stored.path.exists());
    }

    #[tokio::test]
    async fn test_save_leaves_no_temp_files() {
        let (dir, store) = store().await;
        let customer = Uuid::new_v4();

        store
            .save(customer, "a.png", &Bytes::from_static(b"\x89PNG"))
            .await
            .unwrap();

        let customer_dir = dir.path().join(customer.to_string());
        let mut entries = std::fs::read_dir(customer_dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect::<Vec<_>>();
        entries.retain(|name| name.ends_with(".tmp"));
        assert!(entries.is_empty());
    }

    #[tokio::test]
    async fn test_delete_missing_file_is_ok() {
        let (dir, store) = store().await;
        let phantom = dir.path().join("never-existed.pdf");
        store.delete(&phantom).await.unwrap();
    }

    #[tokio::test]
    async fn test_read_missing_file_is_not_found() {
        let (dir, store) = store().await;
        let phantom = dir.path().join("missing.pdf");
        let err = store.read(&phantom).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn test_stored_filenames_are_unique() {
        let (_dir, store) = store().await;
        let customer = Uuid::new_v4();
        let data = Bytes::from_static(b"same content");

        let a = store.save(customer, "dup.pdf", &data).await.unwrap();
        let b = store.save(customer, "dup.pdf", &data).await.unwrap();
        assert_ne!(a.stored_filename, b.stored_filename);
    }

    #[test]
    fn test_extension_of() {
        assert_eq!(extension_of("report.pdf"), ".pdf");
        assert_eq!(extension_of("archive.tar.gz"), ".gz");
        assert_eq!(extension_of("no_extension"), "");
    }
}
