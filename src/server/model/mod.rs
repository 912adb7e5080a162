//! Server application models.
//!
//! Application state shared with every handler.

pub mod app;
