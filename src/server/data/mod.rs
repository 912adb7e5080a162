//! Data access layer repositories.
//!
//! Repositories wrap sea-orm queries per table and are generic over
//! [`ConnectionTrait`](sea_orm::ConnectionTrait), so the same repository runs
//! against the pool or inside a transaction. They return raw `DbErr` and leave
//! not-found and validation decisions to the service layer.

pub mod account;
pub mod catalog;
pub mod content;
pub mod order;
pub mod profile;
