use sea_orm_migration::{prelude::*, schema::*};

/// Notices, FAQ and Q&A share a migration as none reference other tables.
#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Notice::Table)
                    .if_not_exists()
                    .col(pk_auto(Notice::Id))
                    .col(string(Notice::Title))
                    .col(text(Notice::Content))
                    .col(boolean(Notice::IsPinned).default(false))
                    .col(timestamp(Notice::CreatedAt))
                    .col(timestamp(Notice::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Faq::Table)
                    .if_not_exists()
                    .col(pk_auto(Faq::Id))
                    .col(text(Faq::Question))
                    .col(text(Faq::Answer))
                    .col(integer(Faq::SortOrder).default(0))
                    .col(timestamp(Faq::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Qna::Table)
                    .if_not_exists()
                    .col(pk_auto(Qna::Id))
                    .col(string(Qna::AuthorName))
                    .col(string(Qna::AuthorEmail))
                    .col(string(Qna::Title))
                    .col(text(Qna::Content))
                    .col(text_null(Qna::Answer))
                    .col(timestamp_null(Qna::AnsweredAt))
                    .col(timestamp(Qna::CreatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Qna::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Faq::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Notice::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Notice {
    #[sea_orm(iden = "notices")]
    Table,
    Id,
    Title,
    Content,
    IsPinned,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Faq {
    #[sea_orm(iden = "faqs")]
    Table,
    Id,
    Question,
    Answer,
    SortOrder,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Qna {
    #[sea_orm(iden = "qna")]
    Table,
    Id,
    AuthorName,
    AuthorEmail,
    Title,
    Content,
    Answer,
    AnsweredAt,
    CreatedAt,
}
