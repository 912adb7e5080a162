use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::model::assignment::AssignmentFilterParams;

/// Repository for the slot assignment table (`order_accounts`)
pub struct AssignmentRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AssignmentRepository<'a, C> {
    /// Creates a new instance of [`AssignmentRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts an active assignment without any slot validation
    pub async fn create(
        &self,
        account_id: i32,
        slot_number: i32,
        order_id: i32,
    ) -> Result<entity::order_account::Model, DbErr> {
        let assignment = entity::order_account::ActiveModel {
            account_id: ActiveValue::Set(account_id),
            slot_number: ActiveValue::Set(slot_number),
            order_id: ActiveValue::Set(order_id),
            is_active: ActiveValue::Set(true),
            assigned_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        assignment.insert(self.db).await
    }

    pub async fn get(
        &self,
        assignment_id: i32,
    ) -> Result<Option<entity::order_account::Model>, DbErr> {
        entity::prelude::OrderAccount::find_by_id(assignment_id)
            .one(self.db)
            .await
    }

    /// Lists assignments ordered by account then slot
    pub async fn list(
        &self,
        filter: AssignmentFilterParams,
    ) -> Result<Vec<entity::order_account::Model>, DbErr> {
        let mut query = entity::prelude::OrderAccount::find();

        if let Some(account_id) = filter.account_id {
            query = query.filter(entity::order_account::Column::AccountId.eq(account_id));
        }
        if let Some(order_id) = filter.order_id {
            query = query.filter(entity::order_account::Column::OrderId.eq(order_id));
        }
        if let Some(is_active) = filter.is_active {
            query = query.filter(entity::order_account::Column::IsActive.eq(is_active));
        }

        query
            .order_by_asc(entity::order_account::Column::AccountId)
            .order_by_asc(entity::order_account::Column::SlotNumber)
            .order_by_asc(entity::order_account::Column::Id)
            .all(self.db)
            .await
    }

    /// Every active assignment across all accounts
    pub async fn list_active(&self) -> Result<Vec<entity::order_account::Model>, DbErr> {
        self.list(AssignmentFilterParams {
            is_active: Some(true),
            ..Default::default()
        })
        .await
    }

    pub async fn list_active_by_account(
        &self,
        account_id: i32,
    ) -> Result<Vec<entity::order_account::Model>, DbErr> {
        self.list(AssignmentFilterParams {
            account_id: Some(account_id),
            is_active: Some(true),
            ..Default::default()
        })
        .await
    }

    /// All assignments of an order, including inactive ones
    pub async fn list_by_order(
        &self,
        order_id: i32,
    ) -> Result<Vec<entity::order_account::Model>, DbErr> {
        self.list(AssignmentFilterParams {
            order_id: Some(order_id),
            ..Default::default()
        })
        .await
    }

    pub async fn count_active_by_order(&self, order_id: i32) -> Result<u64, DbErr> {
        entity::prelude::OrderAccount::find()
            .filter(entity::order_account::Column::OrderId.eq(order_id))
            .filter(entity::order_account::Column::IsActive.eq(true))
            .count(self.db)
            .await
    }

    /// Marks an assignment inactive, the row itself is kept
    pub async fn deactivate(
        &self,
        assignment: entity::order_account::Model,
    ) -> Result<entity::order_account::Model, DbErr> {
        let mut assignment_am = assignment.into_active_model();
        assignment_am.is_active = ActiveValue::Set(false);

        assignment_am.update(self.db).await
    }
}
