//! HTTP request handlers.

pub mod document;
pub mod health;
pub mod report;
