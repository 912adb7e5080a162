//! Test context returned by [`TestBuilder`](crate::TestBuilder).

use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};

use crate::error::TestError;

/// Test environment handed to a test once setup is complete
///
/// Holds an in-memory SQLite database whose tables were created by the
/// builder. Fixture helpers are reached through [`catalog`](Self::catalog),
/// [`order`](Self::order), [`assignment`](Self::assignment),
/// [`content`](Self::content) and [`profile`](Self::profile).
///
/// ```ignore
/// let test = TestBuilder::new().with_store_tables().build().await?;
///
/// let (product, plan) = test.catalog().insert_product_with_plan().await?;
/// let order = test.order().insert_standard_order(&plan).await?;
/// ```
pub struct TestContext {
    /// Connection to the in-memory SQLite database
    pub db: DatabaseConnection,
}

impl TestContext {
    /// Connects to a fresh in-memory SQLite database.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Connected context without any tables
    /// - `Err(TestError::DbErr)` - Database connection failed
    pub(crate) async fn new() -> Result<Self, TestError> {
        // A single connection keeps every query on the same in-memory database
        let mut options = sea_orm::ConnectOptions::new("sqlite::memory:");
        options.max_connections(1).min_connections(1);

        let db = Database::connect(options).await?;

        Ok(TestContext { db })
    }

    /// Executes CREATE TABLE statements collected by the builder.
    pub(crate) async fn with_tables(&self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        for stmt in stmts {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }
}
