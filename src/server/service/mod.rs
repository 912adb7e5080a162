//! Service layer for business rules and multi-step operations.
//!
//! Services validate requests, coordinate repositories and convert models into
//! the DTOs returned by controllers. Rules spanning several rows, such as slot
//! capacity and the order delete guard, live here rather than in repositories.

pub mod account;
pub mod assignment;
pub mod audit;
pub mod auth;
pub mod catalog;
pub mod content;
pub mod order;

use crate::server::error::request::RequestError;

/// Rejects blank values for a required text field.
pub(crate) fn require_text(field: &'static str, value: &str) -> Result<(), RequestError> {
    if value.trim().is_empty() {
        return Err(RequestError::invalid(field, "must not be empty"));
    }

    Ok(())
}
