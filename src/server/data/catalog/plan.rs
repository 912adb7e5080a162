use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::model::catalog::{CreatePlanDto, UpdatePlanDto};

pub struct PlanRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PlanRepository<'a, C> {
    /// Creates a new instance of [`PlanRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, dto: CreatePlanDto) -> Result<entity::product_plan::Model, DbErr> {
        let plan = entity::product_plan::ActiveModel {
            product_id: ActiveValue::Set(dto.product_id),
            name: ActiveValue::Set(dto.name),
            duration_days: ActiveValue::Set(dto.duration_days),
            price: ActiveValue::Set(dto.price),
            is_active: ActiveValue::Set(dto.is_active.unwrap_or(true)),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        plan.insert(self.db).await
    }

    pub async fn get(&self, plan_id: i32) -> Result<Option<entity::product_plan::Model>, DbErr> {
        entity::prelude::ProductPlan::find_by_id(plan_id)
            .one(self.db)
            .await
    }

    /// Plans of a product, shortest duration first
    pub async fn list_by_product(
        &self,
        product_id: i32,
        active_only: bool,
    ) -> Result<Vec<entity::product_plan::Model>, DbErr> {
        let mut query = entity::prelude::ProductPlan::find()
            .filter(entity::product_plan::Column::ProductId.eq(product_id));

        if active_only {
            query = query.filter(entity::product_plan::Column::IsActive.eq(true));
        }

        query
            .order_by_asc(entity::product_plan::Column::DurationDays)
            .order_by_asc(entity::product_plan::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn update(
        &self,
        plan_id: i32,
        dto: UpdatePlanDto,
    ) -> Result<Option<entity::product_plan::Model>, DbErr> {
        let Some(plan) = self.get(plan_id).await? else {
            return Ok(None);
        };

        let mut plan_am = plan.clone().into_active_model();
        if let Some(name) = dto.name {
            plan_am.name = ActiveValue::Set(name);
        }
        if let Some(duration_days) = dto.duration_days {
            plan_am.duration_days = ActiveValue::Set(duration_days);
        }
        if let Some(price) = dto.price {
            plan_am.price = ActiveValue::Set(price);
        }
        if let Some(is_active) = dto.is_active {
            plan_am.is_active = ActiveValue::Set(is_active);
        }

        if !plan_am.is_changed() {
            return Ok(Some(plan));
        }

        let plan = plan_am.update(self.db).await?;

        Ok(Some(plan))
    }

    pub async fn delete(&self, plan_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::ProductPlan::delete_by_id(plan_id)
            .exec(self.db)
            .await
    }
}

#[cfg(test)]
mod tests {
    use slotshare_test_utils::prelude::*;

    use super::*;

    mod list_by_product {
        use super::*;

        /// Expect plans sorted by duration with inactive plans hidden when requested
        #[tokio::test]
        async fn sorts_and_filters_plans() -> Result<(), TestError> {
            let test = TestBuilder::new().with_store_tables().build().await?;
            let product = test.catalog().insert_product("Video", true).await?;
            test.catalog().insert_plan(product.id, 90, true).await?;
            test.catalog().insert_plan(product.id, 30, true).await?;
            test.catalog().insert_plan(product.id, 365, false).await?;
            let other = test.catalog().insert_product("Music", true).await?;
            test.catalog().insert_plan(other.id, 7, true).await?;

            let repo = PlanRepository::new(&test.db);
            let all: Vec<i32> = repo
                .list_by_product(product.id, false)
                .await?
                .into_iter()
                .map(|p| p.duration_days)
                .collect();
            let active: Vec<i32> = repo
                .list_by_product(product.id, true)
                .await?
                .into_iter()
                .map(|p| p.duration_days)
                .collect();

            assert_eq!(all, vec![30, 90, 365]);
            assert_eq!(active, vec![30, 90]);

            Ok(())
        }
    }

    mod create {
        use super::*;

        /// Expect Error when the product does not exist
        #[tokio::test]
        async fn fails_for_nonexistent_product() -> Result<(), TestError> {
            let test = TestBuilder::new().with_store_tables().build().await?;

            let result = PlanRepository::new(&test.db)
                .create(CreatePlanDto {
                    product_id: 99,
                    name: "30 days".to_string(),
                    duration_days: 30,
                    price: 5_000,
                    is_active: None,
                })
                .await;

            assert!(result.is_err());

            Ok(())
        }
    }

    mod update {
        use super::*;

        /// Expect the price to change while other fields stay put
        #[tokio::test]
        async fn updates_price() -> Result<(), TestError> {
            let test = TestBuilder::new().with_store_tables().with_mock_product().build().await?;
            let plan = entity::prelude::ProductPlan::find().one(&test.db).await?.unwrap();

            let updated = PlanRepository::new(&test.db)
                .update(
                    plan.id,
                    UpdatePlanDto {
                        price: Some(12_000),
                        ..Default::default()
                    },
                )
                .await?
                .unwrap();

            assert_eq!(updated.price, 12_000);
            assert_eq!(updated.duration_days, plan.duration_days);

            Ok(())
        }

        /// Expect an empty update to return the plan unchanged
        #[tokio::test]
        async fn empty_update_returns_plan() -> Result<(), TestError> {
            let test = TestBuilder::new().with_store_tables().with_mock_product().build().await?;
            let plan = entity::prelude::ProductPlan::find().one(&test.db).await?.unwrap();

            let result = PlanRepository::new(&test.db)
                .update(plan.id, UpdatePlanDto::default())
                .await?;

            assert_eq!(result, Some(plan));

            Ok(())
        }
    }
}
