//! Constant values shared across tests.

/// Admin API key configured for router-level tests.
pub static TEST_ADMIN_API_KEY: &str = "test-admin-key";

/// Password used for fixture profiles.
pub static TEST_PASSWORD: &str = "correct-horse-battery";

/// Price of fixture plans, in the smallest currency unit.
pub const TEST_PLAN_PRICE: i64 = 9_900;
