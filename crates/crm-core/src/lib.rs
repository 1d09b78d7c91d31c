//! # crm-core
//!
//! Core crate for the CRM reporting service. Contains configuration
//! schemas, shared types, and the unified error system.
//!
//! This crate has **no** internal dependencies on other CRM crates.

pub mod config;
pub mod error;
pub mod result;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
