//! Shared accounts whose slots are handed out to orders.

use sea_orm::DatabaseConnection;

use crate::{
    model::account::{AccountDto, AccountFilterParams, CreateAccountDto, UpdateAccountDto},
    server::{
        data::{account::AccountRepository, catalog::ProductRepository},
        error::{assignment::AssignmentError, request::RequestError, resource::ResourceError, Error},
        service::require_text,
    },
};

/// Upper bound on the slots a single shared account may offer
pub const MAX_SLOTS_PER_ACCOUNT: i32 = 32;

fn validate_max_slots(max_slots: i32) -> Result<(), RequestError> {
    if max_slots < 1 {
        return Err(RequestError::invalid("max_slots", "must be at least 1"));
    }
    if max_slots > MAX_SLOTS_PER_ACCOUNT {
        return Err(RequestError::invalid(
            "max_slots",
            format!("must be at most {MAX_SLOTS_PER_ACCOUNT}"),
        ));
    }

    Ok(())
}

pub struct AccountService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AccountService<'a> {
    /// Creates a new instance of [`AccountService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(&self, filter: AccountFilterParams) -> Result<Vec<AccountDto>, Error> {
        let accounts = AccountRepository::new(self.db).list(filter).await?;

        Ok(accounts.into_iter().map(AccountDto::from).collect())
    }

    pub async fn get(&self, account_id: i32) -> Result<AccountDto, Error> {
        let account = AccountRepository::new(self.db)
            .get(account_id)
            .await?
            .ok_or(AssignmentError::AccountNotFound(account_id))?;

        Ok(account.into())
    }

    pub async fn create(&self, dto: CreateAccountDto) -> Result<AccountDto, Error> {
        require_text("login_id", &dto.login_id)?;
        validate_max_slots(dto.max_slots)?;

        if ProductRepository::new(self.db)
            .get(dto.product_id)
            .await?
            .is_none()
        {
            return Err(ResourceError::not_found("Product", dto.product_id).into());
        }

        let account = AccountRepository::new(self.db).create(dto).await?;

        tracing::info!(
            account_id = account.id,
            max_slots = account.max_slots,
            "Created shared account"
        );

        Ok(account.into())
    }

    /// Updates an account.
    ///
    /// Lowering `max_slots` below an occupied slot is allowed; the assignment
    /// keeps its slot and shows up past capacity in the slot listing.
    pub async fn update(
        &self,
        account_id: i32,
        dto: UpdateAccountDto,
    ) -> Result<AccountDto, Error> {
        if let Some(max_slots) = dto.max_slots {
            validate_max_slots(max_slots)?;
        }

        let account = AccountRepository::new(self.db)
            .update(account_id, dto)
            .await?
            .ok_or(AssignmentError::AccountNotFound(account_id))?;

        Ok(account.into())
    }

    /// Deletes an account no assignment row references.
    ///
    /// # Returns
    /// - `Ok(())` - Account deleted
    /// - `Err(Error::AssignmentError(AccountHasAssignments))` - Assignments reference the account, nothing changed
    /// - `Err(Error::AssignmentError(AccountNotFound))` - Account does not exist
    pub async fn delete(&self, account_id: i32) -> Result<(), Error> {
        let account_repo = AccountRepository::new(self.db);

        let result = account_repo.delete_if_unassigned(account_id).await?;
        if result.rows_affected > 0 {
            tracing::info!(account_id = account_id, "Deleted shared account");

            return Ok(());
        }

        match account_repo.get(account_id).await? {
            Some(_) => Err(AssignmentError::AccountHasAssignments(account_id).into()),
            None => Err(AssignmentError::AccountNotFound(account_id).into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use slotshare_test_utils::prelude::*;

    use super::*;

    fn create_dto(product_id: i32, max_slots: i32) -> CreateAccountDto {
        CreateAccountDto {
            product_id,
            login_id: "family@example.com".to_string(),
            login_password: "hunter2".to_string(),
            max_slots,
            memo: None,
        }
    }

    #[tokio::test]
    async fn creates_account() -> Result<(), TestError> {
        let test = TestBuilder::new().with_store_tables().build().await?;
        let product = test.catalog().insert_product("Video", true).await?;

        let account = AccountService::new(&test.db)
            .create(create_dto(product.id, 4))
            .await
            .unwrap();

        assert_eq!(account.max_slots, 4);
        assert!(account.is_active);

        Ok(())
    }

    /// Expect zero capacity to be rejected
    #[tokio::test]
    async fn fails_for_zero_slots() -> Result<(), TestError> {
        let test = TestBuilder::new().with_store_tables().build().await?;
        let product = test.catalog().insert_product("Video", true).await?;

        let result = AccountService::new(&test.db)
            .create(create_dto(product.id, 0))
            .await;

        assert!(matches!(result, Err(Error::RequestError(_))));

        Ok(())
    }

    /// Expect capacity beyond the per-account bound to be rejected on create
    #[tokio::test]
    async fn fails_for_oversized_slots() -> Result<(), TestError> {
        let test = TestBuilder::new().with_store_tables().build().await?;
        let product = test.catalog().insert_product("Video", true).await?;
        let service = AccountService::new(&test.db);

        let result = service.create(create_dto(product.id, i32::MAX)).await;
        assert!(matches!(result, Err(Error::RequestError(_))));

        let at_bound = service
            .create(create_dto(product.id, MAX_SLOTS_PER_ACCOUNT))
            .await
            .unwrap();
        assert_eq!(at_bound.max_slots, MAX_SLOTS_PER_ACCOUNT);

        Ok(())
    }

    /// Expect an update raising capacity past the bound to be rejected
    #[tokio::test]
    async fn update_fails_for_oversized_slots() -> Result<(), TestError> {
        let test = TestBuilder::new().with_store_tables().build().await?;
        let product = test.catalog().insert_product("Video", true).await?;
        let account = test.catalog().insert_account(product.id, 4).await?;

        let result = AccountService::new(&test.db)
            .update(
                account.id,
                UpdateAccountDto {
                    max_slots: Some(MAX_SLOTS_PER_ACCOUNT + 1),
                    ..Default::default()
                },
            )
            .await;

        assert!(matches!(result, Err(Error::RequestError(_))));

        Ok(())
    }

    mod delete {
        use super::*;

        /// Expect AccountHasAssignments while any assignment references the account
        #[tokio::test]
        async fn blocks_account_with_assignments() -> Result<(), TestError> {
            let test = TestBuilder::new().with_store_tables().build().await?;
            let (product, plan) = test.catalog().insert_product_with_plan().await?;
            let account = test.catalog().insert_account(product.id, 4).await?;
            let order = test.order().insert_standard_order(&plan).await?;
            test.assignment()
                .insert_assignment(account.id, 1, order.id, false)
                .await?;

            let result = AccountService::new(&test.db).delete(account.id).await;

            assert!(matches!(
                result,
                Err(Error::AssignmentError(AssignmentError::AccountHasAssignments(_)))
            ));

            Ok(())
        }

        #[tokio::test]
        async fn deletes_unassigned_account() -> Result<(), TestError> {
            let test = TestBuilder::new().with_store_tables().with_mock_account(2).build().await?;
            let service = AccountService::new(&test.db);
            let account = service.list(AccountFilterParams::default()).await.unwrap()[0].clone();

            service.delete(account.id).await.unwrap();
            let result = service.get(account.id).await;

            assert!(matches!(
                result,
                Err(Error::AssignmentError(AssignmentError::AccountNotFound(_)))
            ));

            Ok(())
        }

        #[tokio::test]
        async fn fails_for_nonexistent_account() -> Result<(), TestError> {
            let test = TestBuilder::new().with_store_tables().build().await?;

            let result = AccountService::new(&test.db).delete(3).await;

            assert!(matches!(
                result,
                Err(Error::AssignmentError(AssignmentError::AccountNotFound(3)))
            ));

            Ok(())
        }
    }
}
