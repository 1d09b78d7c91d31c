//! Shared types used across crates.

pub mod date_range;

pub use date_range::DateRange;
