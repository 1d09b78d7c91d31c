//! Uploaded document entity and its virus-scan status.

pub mod model;
pub mod scan;

pub use model::{CreateDocument, Document};
pub use scan::VirusScanStatus;
