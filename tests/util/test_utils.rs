//! Test utilities for creating AppState over a test database

use std::net::SocketAddr;

use slotshare::server::{config::Config, model::app::AppState};
use slotshare_test_utils::prelude::*;

/// Configuration whose admin key matches [`TEST_ADMIN_API_KEY`]
pub fn test_config() -> Config {
    Config {
        database_url: "sqlite::memory:".to_string(),
        admin_api_key: TEST_ADMIN_API_KEY.to_string(),
        bind_address: SocketAddr::from(([127, 0, 0, 1], 0)),
        verification_code_ttl_minutes: 10,
    }
}

/// Extension trait for TestContext to create AppState
pub trait TestContextExt {
    fn into_app_state(&self) -> AppState;
}

impl TestContextExt for TestContext {
    fn into_app_state(&self) -> AppState {
        AppState::new(self.db.clone(), test_config())
    }
}
