use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{constant::TEST_PLAN_PRICE, error::TestError, TestContext};

impl TestContext {
    pub fn catalog(&self) -> CatalogFixtures<'_> {
        CatalogFixtures { test: self }
    }
}

pub struct CatalogFixtures<'a> {
    test: &'a TestContext,
}

impl<'a> CatalogFixtures<'a> {
    pub async fn insert_product(
        &self,
        name: &str,
        is_active: bool,
    ) -> Result<entity::product::Model, TestError> {
        Ok(entity::prelude::Product::insert(entity::product::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            description: ActiveValue::Set(format!("{} shared subscription", name)),
            image_url: ActiveValue::Set(None),
            is_active: ActiveValue::Set(is_active),
            sort_order: ActiveValue::Set(0),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        })
        .exec_with_returning(&self.test.db)
        .await?)
    }

    pub async fn insert_plan(
        &self,
        product_id: i32,
        duration_days: i32,
        is_active: bool,
    ) -> Result<entity::product_plan::Model, TestError> {
        Ok(
            entity::prelude::ProductPlan::insert(entity::product_plan::ActiveModel {
                product_id: ActiveValue::Set(product_id),
                name: ActiveValue::Set(format!("{} days", duration_days)),
                duration_days: ActiveValue::Set(duration_days),
                price: ActiveValue::Set(TEST_PLAN_PRICE),
                is_active: ActiveValue::Set(is_active),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.test.db)
            .await?,
        )
    }

    /// Inserts an active product with an active 30 day plan.
    pub async fn insert_product_with_plan(
        &self,
    ) -> Result<(entity::product::Model, entity::product_plan::Model), TestError> {
        let product = self.insert_product("Streaming Premium", true).await?;
        let plan = self.insert_plan(product.id, 30, true).await?;

        Ok((product, plan))
    }

    pub async fn insert_account(
        &self,
        product_id: i32,
        max_slots: i32,
    ) -> Result<entity::account::Model, TestError> {
        Ok(entity::prelude::Account::insert(entity::account::ActiveModel {
            product_id: ActiveValue::Set(product_id),
            login_id: ActiveValue::Set(format!("shared-{}@example.com", max_slots)),
            login_password: ActiveValue::Set("shared-password".to_string()),
            max_slots: ActiveValue::Set(max_slots),
            memo: ActiveValue::Set(None),
            is_active: ActiveValue::Set(true),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        })
        .exec_with_returning(&self.test.db)
        .await?)
    }
}
