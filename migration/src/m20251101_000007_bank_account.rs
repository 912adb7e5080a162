use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BankAccount::Table)
                    .if_not_exists()
                    .col(pk_auto(BankAccount::Id))
                    .col(string(BankAccount::BankName))
                    .col(string(BankAccount::AccountNumber))
                    .col(string(BankAccount::HolderName))
                    .col(boolean(BankAccount::IsActive).default(true))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BankAccount::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum BankAccount {
    #[sea_orm(iden = "bank_accounts")]
    Table,
    Id,
    BankName,
    AccountNumber,
    HolderName,
    IsActive,
}
