use sea_orm::DatabaseConnection;

use crate::{
    model::content::{BankAccountDto, CreateBankAccountDto, UpdateBankAccountDto},
    server::{
        data::content::bank_account::BankAccountRepository,
        error::{resource::ResourceError, Error},
        service::require_text,
    },
};

pub struct BankAccountService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BankAccountService<'a> {
    /// Creates a new instance of [`BankAccountService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(&self, active_only: bool) -> Result<Vec<BankAccountDto>, Error> {
        let bank_accounts = BankAccountRepository::new(self.db).list(active_only).await?;

        Ok(bank_accounts.into_iter().map(BankAccountDto::from).collect())
    }

    pub async fn create(&self, dto: CreateBankAccountDto) -> Result<BankAccountDto, Error> {
        require_text("bank_name", &dto.bank_name)?;
        require_text("account_number", &dto.account_number)?;
        require_text("holder_name", &dto.holder_name)?;

        let bank_account = BankAccountRepository::new(self.db).create(dto).await?;

        Ok(bank_account.into())
    }

    pub async fn update(
        &self,
        bank_account_id: i32,
        dto: UpdateBankAccountDto,
    ) -> Result<BankAccountDto, Error> {
        let bank_account = BankAccountRepository::new(self.db)
            .update(bank_account_id, dto)
            .await?
            .ok_or_else(|| ResourceError::not_found("Bank account", bank_account_id))?;

        Ok(bank_account.into())
    }

    pub async fn delete(&self, bank_account_id: i32) -> Result<(), Error> {
        let result = BankAccountRepository::new(self.db)
            .delete(bank_account_id)
            .await?;

        if result.rows_affected == 0 {
            return Err(ResourceError::not_found("Bank account", bank_account_id).into());
        }

        Ok(())
    }
}
