use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn assignment(&self) -> AssignmentFixtures<'_> {
        AssignmentFixtures { test: self }
    }
}

pub struct AssignmentFixtures<'a> {
    test: &'a TestContext,
}

impl<'a> AssignmentFixtures<'a> {
    /// Inserts an assignment row directly, bypassing slot validation.
    ///
    /// Lets tests create the duplicate occupancy the integrity audit looks for.
    pub async fn insert_assignment(
        &self,
        account_id: i32,
        slot_number: i32,
        order_id: i32,
        is_active: bool,
    ) -> Result<entity::order_account::Model, TestError> {
        Ok(
            entity::prelude::OrderAccount::insert(entity::order_account::ActiveModel {
                account_id: ActiveValue::Set(account_id),
                slot_number: ActiveValue::Set(slot_number),
                order_id: ActiveValue::Set(order_id),
                is_active: ActiveValue::Set(is_active),
                assigned_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.test.db)
            .await?,
        )
    }
}
