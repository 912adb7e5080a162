//! Utilities shared across controllers and services.
//!
//! Admin request authorization, verification-code delivery and password
//! hashing. Each is kept behind a small interface so handlers receive it
//! through [`AppState`](crate::server::model::app::AppState) rather than
//! reaching for global state.

pub mod authorizer;
pub mod mail;
pub mod password;
