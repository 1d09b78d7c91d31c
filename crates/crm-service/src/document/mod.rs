//! Document subsystem: upload pipeline, retrieval, and deletion.

pub mod scan;
pub mod service;

pub use scan::{StubVirusScanner, VirusScanner};
pub use service::{DocumentService, DownloadedDocument, UploadParams};
