//! Request and response types of the HTTP API.

pub mod account;
pub mod api;
pub mod assignment;
pub mod audit;
pub mod auth;
pub mod catalog;
pub mod content;
pub mod order;
