//! Shared test harness for the slotshare workspace.
//!
//! Tests are set up in two phases: a [`TestBuilder`] declares the tables and
//! fixtures a test needs, and the [`TestContext`] it builds gives access to the
//! database along with fixture helpers for inserting further rows while the
//! test runs.

pub mod builder;
pub mod constant;
pub mod context;
pub mod error;
pub mod fixtures;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{
        constant::TEST_ADMIN_API_KEY, fixtures::factory, TestBuilder, TestContext, TestError,
    };
}
