//! # crm-service
//!
//! Business logic services: the report lookup-or-generate orchestration,
//! CSV export, and the document upload/download/delete pipeline.

pub mod document;
pub mod report;
