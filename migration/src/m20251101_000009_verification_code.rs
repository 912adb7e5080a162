use sea_orm_migration::{prelude::*, schema::*};

static IDX_VERIFICATION_CODE_EMAIL: &str = "idx-verification_codes-email";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(VerificationCode::Table)
                    .if_not_exists()
                    .col(pk_auto(VerificationCode::Id))
                    .col(string(VerificationCode::Email))
                    .col(string(VerificationCode::Code))
                    .col(timestamp(VerificationCode::ExpiresAt))
                    .col(boolean(VerificationCode::Used).default(false))
                    .col(timestamp(VerificationCode::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_VERIFICATION_CODE_EMAIL)
                    .table(VerificationCode::Table)
                    .col(VerificationCode::Email)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_VERIFICATION_CODE_EMAIL)
                    .table(VerificationCode::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(VerificationCode::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum VerificationCode {
    #[sea_orm(iden = "verification_codes")]
    Table,
    Id,
    Email,
    Code,
    ExpiresAt,
    Used,
    CreatedAt,
}
