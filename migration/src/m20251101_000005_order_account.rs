use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20251101_000003_account::Account, m20251101_000004_order::Order};

static IDX_ORDER_ACCOUNT_SLOT: &str = "idx-order_accounts-account_id-slot_number";
static IDX_ORDER_ACCOUNT_ORDER_ID: &str = "idx-order_accounts-order_id";
static FK_ORDER_ACCOUNT_ACCOUNT_ID: &str = "fk-order_accounts-account_id";
static FK_ORDER_ACCOUNT_ORDER_ID: &str = "fk-order_accounts-order_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(OrderAccount::Table)
                    .if_not_exists()
                    .col(pk_auto(OrderAccount::Id))
                    .col(integer(OrderAccount::AccountId))
                    .col(integer(OrderAccount::SlotNumber))
                    .col(integer(OrderAccount::OrderId))
                    .col(boolean(OrderAccount::IsActive).default(true))
                    .col(timestamp(OrderAccount::AssignedAt))
                    .to_owned(),
            )
            .await?;

        // Not unique: inactive rows keep their slot number as history
        manager
            .create_index(
                Index::create()
                    .name(IDX_ORDER_ACCOUNT_SLOT)
                    .table(OrderAccount::Table)
                    .col(OrderAccount::AccountId)
                    .col(OrderAccount::SlotNumber)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_ORDER_ACCOUNT_ORDER_ID)
                    .table(OrderAccount::Table)
                    .col(OrderAccount::OrderId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_ORDER_ACCOUNT_ACCOUNT_ID)
                    .from_tbl(OrderAccount::Table)
                    .from_col(OrderAccount::AccountId)
                    .to_tbl(Account::Table)
                    .to_col(Account::Id)
                    .on_delete(ForeignKeyAction::Restrict)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_ORDER_ACCOUNT_ORDER_ID)
                    .from_tbl(OrderAccount::Table)
                    .from_col(OrderAccount::OrderId)
                    .to_tbl(Order::Table)
                    .to_col(Order::Id)
                    .on_delete(ForeignKeyAction::Restrict)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for fk in [FK_ORDER_ACCOUNT_ORDER_ID, FK_ORDER_ACCOUNT_ACCOUNT_ID] {
            manager
                .drop_foreign_key(
                    ForeignKey::drop()
                        .name(fk)
                        .table(OrderAccount::Table)
                        .to_owned(),
                )
                .await?;
        }

        for idx in [IDX_ORDER_ACCOUNT_ORDER_ID, IDX_ORDER_ACCOUNT_SLOT] {
            manager
                .drop_index(Index::drop().name(idx).table(OrderAccount::Table).to_owned())
                .await?;
        }

        manager
            .drop_table(Table::drop().table(OrderAccount::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum OrderAccount {
    #[sea_orm(iden = "order_accounts")]
    Table,
    Id,
    AccountId,
    SlotNumber,
    OrderId,
    IsActive,
    AssignedAt,
}
