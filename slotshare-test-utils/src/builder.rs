//! Declarative test builder.
//!
//! Configuration methods only queue work; tables are created and fixtures
//! inserted when [`TestBuilder::build`] is awaited.

use sea_orm::{sea_query::TableCreateStatement, DbBackend, EntityTrait, Schema};

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
    include_store_tables: bool,

    // Fixtures, inserted after tables are created
    products_with_plan: usize,
    accounts: Vec<i32>, // max_slots, attached to the first fixture product
    profiles: Vec<String>,
}

impl TestBuilder {
    /// Create a new TestBuilder with no tables or fixtures configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_store_tables: false,
            products_with_plan: 0,
            accounts: Vec::new(),
            profiles: Vec::new(),
        }
    }

    /// Add every table of the store schema.
    ///
    /// Covers the catalog, order ledger, slot assignments, content and
    /// identity tables.
    pub fn with_store_tables(mut self) -> Self {
        self.include_store_tables = true;
        self
    }

    /// Add a single entity table to the test database.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use slotshare_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), slotshare_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(Notice)
    ///     .with_table(Faq)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert an active product with one active plan.
    pub fn with_mock_product(mut self) -> Self {
        self.products_with_plan += 1;
        self
    }

    /// Insert an active shared account with the given capacity.
    ///
    /// Attached to the first fixture product, which is created when none was
    /// requested through [`with_mock_product`](Self::with_mock_product).
    pub fn with_mock_account(mut self, max_slots: i32) -> Self {
        self.accounts.push(max_slots);
        self
    }

    /// Insert a customer profile with the fixture password.
    pub fn with_mock_profile(mut self, email: impl Into<String>) -> Self {
        self.profiles.push(email.into());
        self
    }

    /// Create the test context, tables and fixtures.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Context ready for the test
    /// - `Err(TestError)` - Table creation or fixture insertion failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let test = TestContext::new().await?;

        // 1. Create tables
        let mut tables = Vec::new();
        if self.include_store_tables {
            tables.extend(store_tables());
        }
        tables.extend(self.tables);
        test.with_tables(tables).await?;

        // 2. Insert fixtures
        let mut products = Vec::new();
        let product_count = if self.accounts.is_empty() {
            self.products_with_plan
        } else {
            self.products_with_plan.max(1)
        };
        for _ in 0..product_count {
            let (product, _) = test.catalog().insert_product_with_plan().await?;
            products.push(product);
        }

        if let Some(product) = products.first() {
            for max_slots in self.accounts {
                test.catalog().insert_account(product.id, max_slots).await?;
            }
        }

        for email in self.profiles {
            test.profile().insert_profile(&email).await?;
        }

        Ok(test)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn store_tables() -> Vec<TableCreateStatement> {
    let schema = Schema::new(DbBackend::Sqlite);

    vec![
        schema.create_table_from_entity(entity::prelude::Product),
        schema.create_table_from_entity(entity::prelude::ProductPlan),
        schema.create_table_from_entity(entity::prelude::Account),
        schema.create_table_from_entity(entity::prelude::Order),
        schema.create_table_from_entity(entity::prelude::OrderAccount),
        schema.create_table_from_entity(entity::prelude::Notice),
        schema.create_table_from_entity(entity::prelude::Faq),
        schema.create_table_from_entity(entity::prelude::Qna),
        schema.create_table_from_entity(entity::prelude::BankAccount),
        schema.create_table_from_entity(entity::prelude::Profile),
        schema.create_table_from_entity(entity::prelude::VerificationCode),
    ]
}

#[cfg(test)]
mod tests {
    use sea_orm::{EntityTrait, PaginatorTrait};

    use super::*;

    #[tokio::test]
    async fn builder_creates_store_tables() {
        let result = TestBuilder::new().with_store_tables().build().await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn builder_inserts_fixtures() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_store_tables()
            .with_mock_account(4)
            .with_mock_account(2)
            .with_mock_profile("buyer@example.com")
            .build()
            .await?;

        assert_eq!(entity::prelude::Product::find().count(&test.db).await?, 1);
        assert_eq!(entity::prelude::Account::find().count(&test.db).await?, 2);
        assert_eq!(entity::prelude::Profile::find().count(&test.db).await?, 1);

        Ok(())
    }
}
