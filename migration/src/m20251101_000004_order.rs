use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20251101_000001_product::Product, m20251101_000002_product_plan::ProductPlan};

static IDX_ORDER_BUYER_EMAIL: &str = "idx-orders-buyer_email";
static IDX_ORDER_RELATED_ORDER_ID: &str = "idx-orders-related_order_id";
static FK_ORDER_PRODUCT_ID: &str = "fk-orders-product_id";
static FK_ORDER_PLAN_ID: &str = "fk-orders-plan_id";
static FK_ORDER_RELATED_ORDER_ID: &str = "fk-orders-related_order_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Order::Table)
                    .if_not_exists()
                    .col(pk_auto(Order::Id))
                    .col(integer(Order::ProductId))
                    .col(integer(Order::PlanId))
                    .col(string(Order::BuyerName))
                    .col(string(Order::BuyerEmail))
                    .col(string_null(Order::BuyerPhone))
                    .col(string(Order::DepositorName))
                    .col(big_integer(Order::Amount))
                    // Nullable so un-migrated rows can be told apart from standard orders
                    .col(string_len_null(Order::OrderType, 16))
                    .col(integer_null(Order::RelatedOrderId))
                    .col(string(Order::PaymentStatus).default("PENDING"))
                    .col(string(Order::AssignmentStatus).default("UNASSIGNED"))
                    .col(timestamp(Order::CreatedAt))
                    .col(timestamp(Order::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_ORDER_BUYER_EMAIL)
                    .table(Order::Table)
                    .col(Order::BuyerEmail)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_ORDER_RELATED_ORDER_ID)
                    .table(Order::Table)
                    .col(Order::RelatedOrderId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_ORDER_PRODUCT_ID)
                    .from_tbl(Order::Table)
                    .from_col(Order::ProductId)
                    .to_tbl(Product::Table)
                    .to_col(Product::Id)
                    .on_delete(ForeignKeyAction::Restrict)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_ORDER_PLAN_ID)
                    .from_tbl(Order::Table)
                    .from_col(Order::PlanId)
                    .to_tbl(ProductPlan::Table)
                    .to_col(ProductPlan::Id)
                    .on_delete(ForeignKeyAction::Restrict)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_ORDER_RELATED_ORDER_ID)
                    .from_tbl(Order::Table)
                    .from_col(Order::RelatedOrderId)
                    .to_tbl(Order::Table)
                    .to_col(Order::Id)
                    .on_delete(ForeignKeyAction::SetNull)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for fk in [
            FK_ORDER_RELATED_ORDER_ID,
            FK_ORDER_PLAN_ID,
            FK_ORDER_PRODUCT_ID,
        ] {
            manager
                .drop_foreign_key(ForeignKey::drop().name(fk).table(Order::Table).to_owned())
                .await?;
        }

        for idx in [IDX_ORDER_RELATED_ORDER_ID, IDX_ORDER_BUYER_EMAIL] {
            manager
                .drop_index(Index::drop().name(idx).table(Order::Table).to_owned())
                .await?;
        }

        manager
            .drop_table(Table::drop().table(Order::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Order {
    #[sea_orm(iden = "orders")]
    Table,
    Id,
    ProductId,
    PlanId,
    BuyerName,
    BuyerEmail,
    BuyerPhone,
    DepositorName,
    Amount,
    OrderType,
    RelatedOrderId,
    PaymentStatus,
    AssignmentStatus,
    CreatedAt,
    UpdatedAt,
}
