//! Extractors shared by controllers.
//!
//! They route every rejection through [`Error`](crate::server::error::Error)
//! so malformed input and missing credentials produce the same `{error}` body
//! as domain failures.

pub mod admin;
pub mod extract;
