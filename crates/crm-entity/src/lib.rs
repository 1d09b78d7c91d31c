//! # crm-entity
//!
//! Persistence and domain models: the four metric report entities and the
//! uploaded document entity.

pub mod document;
pub mod report;
