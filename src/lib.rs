//! Storefront and admin back-office for a subscription-sharing shop.
//!
//! [`model`] holds the JSON request/response types of the HTTP API and
//! [`server`] the axum application serving them.

pub mod model;
pub mod server;
