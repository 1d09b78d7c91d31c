//! # crm-api
//!
//! HTTP API layer for the CRM reporting service: router, handlers, DTOs,
//! shared application state, and the error-to-response mapping.

pub mod app;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;
