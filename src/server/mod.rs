//! Server application core modules.
//!
//! Contains the HTTP routing, controllers, services and data access layer of the
//! slotshare storefront and admin back-office, along with the integrity audits
//! run over the order ledger and slot assignment table.

pub mod audit;
pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod util;
