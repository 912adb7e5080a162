//! HTTP controller endpoints for the slotshare web API.
//!
//! Controllers extract request input, call into a service and map the result
//! onto a status code and JSON body. Admin-only handlers take an
//! [`AdminAccess`](util::admin::AdminAccess) argument. Every handler carries a
//! utoipa annotation collected into the OpenAPI document by the router.

pub mod account;
pub mod assignment;
pub mod audit;
pub mod auth;
pub mod catalog;
pub mod content;
pub mod health;
pub mod order;
pub mod util;
