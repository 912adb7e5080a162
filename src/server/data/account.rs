use chrono::Utc;
use sea_orm::{
    sea_query::Query, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    DeleteResult, EntityTrait, IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::model::account::{AccountFilterParams, CreateAccountDto, UpdateAccountDto};

pub struct AccountRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AccountRepository<'a, C> {
    /// Creates a new instance of [`AccountRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, dto: CreateAccountDto) -> Result<entity::account::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let account = entity::account::ActiveModel {
            product_id: ActiveValue::Set(dto.product_id),
            login_id: ActiveValue::Set(dto.login_id),
            login_password: ActiveValue::Set(dto.login_password),
            max_slots: ActiveValue::Set(dto.max_slots),
            memo: ActiveValue::Set(dto.memo),
            is_active: ActiveValue::Set(true),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        account.insert(self.db).await
    }

    pub async fn get(&self, account_id: i32) -> Result<Option<entity::account::Model>, DbErr> {
        entity::prelude::Account::find_by_id(account_id)
            .one(self.db)
            .await
    }

    pub async fn list(
        &self,
        filter: AccountFilterParams,
    ) -> Result<Vec<entity::account::Model>, DbErr> {
        let mut query = entity::prelude::Account::find();

        if let Some(product_id) = filter.product_id {
            query = query.filter(entity::account::Column::ProductId.eq(product_id));
        }
        if let Some(is_active) = filter.is_active {
            query = query.filter(entity::account::Column::IsActive.eq(is_active));
        }

        query
            .order_by_asc(entity::account::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn update(
        &self,
        account_id: i32,
        dto: UpdateAccountDto,
    ) -> Result<Option<entity::account::Model>, DbErr> {
        let Some(account) = self.get(account_id).await? else {
            return Ok(None);
        };

        let mut account_am = account.into_active_model();
        if let Some(login_id) = dto.login_id {
            account_am.login_id = ActiveValue::Set(login_id);
        }
        if let Some(login_password) = dto.login_password {
            account_am.login_password = ActiveValue::Set(login_password);
        }
        if let Some(max_slots) = dto.max_slots {
            account_am.max_slots = ActiveValue::Set(max_slots);
        }
        if let Some(memo) = dto.memo {
            account_am.memo = ActiveValue::Set(Some(memo));
        }
        if let Some(is_active) = dto.is_active {
            account_am.is_active = ActiveValue::Set(is_active);
        }
        account_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        let account = account_am.update(self.db).await?;

        Ok(Some(account))
    }

    /// Deletes an account only when no assignment row, active or not, references it
    ///
    /// The check and the delete are one statement. A result with zero
    /// [`DeleteResult::rows_affected`] means the account is either missing or
    /// still referenced; the caller tells the two apart.
    pub async fn delete_if_unassigned(&self, account_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Account::delete_many()
            .filter(entity::account::Column::Id.eq(account_id))
            .filter(
                entity::account::Column::Id.not_in_subquery(
                    Query::select()
                        .column(entity::order_account::Column::AccountId)
                        .from(entity::order_account::Entity)
                        .to_owned(),
                ),
            )
            .exec(self.db)
            .await
    }
}
