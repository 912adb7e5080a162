use chrono::Utc;
use entity::sea_orm_active_enums::OrderType;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn order(&self) -> OrderFixtures<'_> {
        OrderFixtures { test: self }
    }
}

pub struct OrderFixtures<'a> {
    test: &'a TestContext,
}

impl<'a> OrderFixtures<'a> {
    /// Inserts an order for `plan` with arbitrary classification.
    ///
    /// Passing `order_type: None` produces a legacy, unclassified row and an
    /// extension without `related_order_id` produces an orphan.
    pub async fn insert_order(
        &self,
        plan: &entity::product_plan::Model,
        order_type: Option<OrderType>,
        related_order_id: Option<i32>,
    ) -> Result<entity::order::Model, TestError> {
        Ok(entity::prelude::Order::insert(entity::order::ActiveModel {
            product_id: ActiveValue::Set(plan.product_id),
            plan_id: ActiveValue::Set(plan.id),
            buyer_name: ActiveValue::Set("Test Buyer".to_string()),
            buyer_email: ActiveValue::Set("buyer@example.com".to_string()),
            buyer_phone: ActiveValue::Set(None),
            depositor_name: ActiveValue::Set("Test Buyer".to_string()),
            amount: ActiveValue::Set(plan.price),
            order_type: ActiveValue::Set(order_type),
            related_order_id: ActiveValue::Set(related_order_id),
            payment_status: ActiveValue::Set("PENDING".to_string()),
            assignment_status: ActiveValue::Set("UNASSIGNED".to_string()),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        })
        .exec_with_returning(&self.test.db)
        .await?)
    }

    pub async fn insert_standard_order(
        &self,
        plan: &entity::product_plan::Model,
    ) -> Result<entity::order::Model, TestError> {
        self.insert_order(plan, Some(OrderType::Standard), None)
            .await
    }

    pub async fn insert_extension_order(
        &self,
        plan: &entity::product_plan::Model,
        original_order_id: i32,
    ) -> Result<entity::order::Model, TestError> {
        self.insert_order(plan, Some(OrderType::Extension), Some(original_order_id))
            .await
    }
}
