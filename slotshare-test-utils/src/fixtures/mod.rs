//! Fixture helpers for inserting rows during a test.
//!
//! Each submodule adds an accessor on [`TestContext`](crate::TestContext):
//!
//! - `catalog` - products, plans and shared accounts
//! - `order` - standard, extension and unclassified orders
//! - `assignment` - slot assignments
//! - `content` - notices, FAQ, Q&A and bank accounts
//! - `profile` - customer profiles and verification codes
//!
//! [`factory`] builds in-memory models for tests that never touch the database.

pub mod assignment;
pub mod catalog;
pub mod content;
pub mod factory;
pub mod order;
pub mod profile;
