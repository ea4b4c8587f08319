//! Read models for CQRS-lite pattern
//!
//! View-optimized rows handed to the report formatters.

pub mod policy_row;

pub use crate::license_compliance::services::LicenseSummaryRow;
pub use policy_row::PolicyRow;
