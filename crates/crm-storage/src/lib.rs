//! # crm-storage
//!
//! On-disk document storage (write-to-temp-then-atomic-rename) and
//! two-stage MIME type detection.

pub mod local;
pub mod mime;

pub use local::{DocumentStore, StoredFile};
pub use mime::MimeDetection;
