use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::model::content::{CreateBankAccountDto, UpdateBankAccountDto};

/// Bank accounts buyers transfer payment to
pub struct BankAccountRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> BankAccountRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        dto: CreateBankAccountDto,
    ) -> Result<entity::bank_account::Model, DbErr> {
        let bank_account = entity::bank_account::ActiveModel {
            bank_name: ActiveValue::Set(dto.bank_name),
            account_number: ActiveValue::Set(dto.account_number),
            holder_name: ActiveValue::Set(dto.holder_name),
            is_active: ActiveValue::Set(dto.is_active.unwrap_or(true)),
            ..Default::default()
        };

        bank_account.insert(self.db).await
    }

    pub async fn get(
        &self,
        bank_account_id: i32,
    ) -> Result<Option<entity::bank_account::Model>, DbErr> {
        entity::prelude::BankAccount::find_by_id(bank_account_id)
            .one(self.db)
            .await
    }

    pub async fn list(&self, active_only: bool) -> Result<Vec<entity::bank_account::Model>, DbErr> {
        let mut query = entity::prelude::BankAccount::find();

        if active_only {
            query = query.filter(entity::bank_account::Column::IsActive.eq(true));
        }

        query
            .order_by_asc(entity::bank_account::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn update(
        &self,
        bank_account_id: i32,
        dto: UpdateBankAccountDto,
    ) -> Result<Option<entity::bank_account::Model>, DbErr> {
        let Some(bank_account) = self.get(bank_account_id).await? else {
            return Ok(None);
        };

        let mut bank_account_am = bank_account.clone().into_active_model();
        if let Some(bank_name) = dto.bank_name {
            bank_account_am.bank_name = ActiveValue::Set(bank_name);
        }
        if let Some(account_number) = dto.account_number {
            bank_account_am.account_number = ActiveValue::Set(account_number);
        }
        if let Some(holder_name) = dto.holder_name {
            bank_account_am.holder_name = ActiveValue::Set(holder_name);
        }
        if let Some(is_active) = dto.is_active {
            bank_account_am.is_active = ActiveValue::Set(is_active);
        }

        if !bank_account_am.is_changed() {
            return Ok(Some(bank_account));
        }

        Ok(Some(bank_account_am.update(self.db).await?))
    }

    pub async fn delete(&self, bank_account_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::BankAccount::delete_by_id(bank_account_id)
            .exec(self.db)
            .await
    }
}
