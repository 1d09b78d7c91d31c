//! Concrete repository implementations.

pub mod document;
pub mod report;
