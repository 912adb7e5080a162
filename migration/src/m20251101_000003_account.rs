use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251101_000001_product::Product;

static FK_ACCOUNT_PRODUCT_ID: &str = "fk-accounts-product_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Account::Table)
                    .if_not_exists()
                    .col(pk_auto(Account::Id))
                    .col(integer(Account::ProductId))
                    .col(string(Account::LoginId))
                    .col(string(Account::LoginPassword))
                    .col(integer(Account::MaxSlots))
                    .col(text_null(Account::Memo))
                    .col(boolean(Account::IsActive).default(true))
                    .col(timestamp(Account::CreatedAt))
                    .col(timestamp(Account::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_ACCOUNT_PRODUCT_ID)
                    .from_tbl(Account::Table)
                    .from_col(Account::ProductId)
                    .to_tbl(Product::Table)
                    .to_col(Product::Id)
                    .on_delete(ForeignKeyAction::Restrict)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_ACCOUNT_PRODUCT_ID)
                    .table(Account::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Account::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Account {
    #[sea_orm(iden = "accounts")]
    Table,
    Id,
    ProductId,
    LoginId,
    LoginPassword,
    MaxSlots,
    Memo,
    IsActive,
    CreatedAt,
    UpdatedAt,
}
