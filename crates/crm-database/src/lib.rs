//! # crm-database
//!
//! PostgreSQL connection management and concrete repository
//! implementations for the CRM reporting entities.

pub mod connection;
pub mod migration;
pub mod repositories;

pub use connection::DatabasePool;
