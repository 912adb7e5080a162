use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251101_000001_product::Product;

static IDX_PLAN_PRODUCT_ID: &str = "idx-product_plans-product_id";
static FK_PLAN_PRODUCT_ID: &str = "fk-product_plans-product_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ProductPlan::Table)
                    .if_not_exists()
                    .col(pk_auto(ProductPlan::Id))
                    .col(integer(ProductPlan::ProductId))
                    .col(string(ProductPlan::Name))
                    .col(integer(ProductPlan::DurationDays))
                    .col(big_integer(ProductPlan::Price))
                    .col(boolean(ProductPlan::IsActive).default(true))
                    .col(timestamp(ProductPlan::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_PLAN_PRODUCT_ID)
                    .table(ProductPlan::Table)
                    .col(ProductPlan::ProductId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_PLAN_PRODUCT_ID)
                    .from_tbl(ProductPlan::Table)
                    .from_col(ProductPlan::ProductId)
                    .to_tbl(Product::Table)
                    .to_col(Product::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_PLAN_PRODUCT_ID)
                    .table(ProductPlan::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_PLAN_PRODUCT_ID)
                    .table(ProductPlan::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(ProductPlan::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum ProductPlan {
    #[sea_orm(iden = "product_plans")]
    Table,
    Id,
    ProductId,
    Name,
    DurationDays,
    Price,
    IsActive,
    CreatedAt,
}
