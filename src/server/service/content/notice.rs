use sea_orm::DatabaseConnection;

use crate::{
    model::content::{CreateNoticeDto, NoticeDto, UpdateNoticeDto},
    server::{
        data::content::notice::NoticeRepository,
        error::{resource::ResourceError, Error},
        service::require_text,
    },
};

pub struct NoticeService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> NoticeService<'a> {
    /// Creates a new instance of [`NoticeService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists notices, pinned first and newest after that
    pub async fn list(&self) -> Result<Vec<NoticeDto>, Error> {
        let notices = NoticeRepository::new(self.db).list().await?;

        Ok(notices.into_iter().map(NoticeDto::from).collect())
    }

    pub async fn get(&self, notice_id: i32) -> Result<NoticeDto, Error> {
        let notice = NoticeRepository::new(self.db)
            .get(notice_id)
            .await?
            .ok_or_else(|| ResourceError::not_found("Notice", notice_id))?;

        Ok(notice.into())
    }

    pub async fn create(&self, dto: CreateNoticeDto) -> Result<NoticeDto, Error> {
        require_text("title", &dto.title)?;

        let notice = NoticeRepository::new(self.db).create(dto).await?;

        Ok(notice.into())
    }

    pub async fn update(&self, notice_id: i32, dto: UpdateNoticeDto) -> Result<NoticeDto, Error> {
        if let Some(title) = &dto.title {
            require_text("title", title)?;
        }

        let notice = NoticeRepository::new(self.db)
            .update(notice_id, dto)
            .await?
            .ok_or_else(|| ResourceError::not_found("Notice", notice_id))?;

        Ok(notice.into())
    }

    pub async fn delete(&self, notice_id: i32) -> Result<(), Error> {
        let result = NoticeRepository::new(self.db).delete(notice_id).await?;

        if result.rows_affected == 0 {
            return Err(ResourceError::not_found("Notice", notice_id).into());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use slotshare_test_utils::prelude::*;

    use super::*;

    #[tokio::test]
    async fn updates_pin_only() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_table(entity::prelude::Notice)
            .build()
            .await?;
        let notice = test.content().insert_notice("Maintenance", false).await?;

        let updated = NoticeService::new(&test.db)
            .update(
                notice.id,
                UpdateNoticeDto {
                    is_pinned: Some(true),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert!(updated.is_pinned);
        assert_eq!(updated.title, "Maintenance");

        Ok(())
    }

    /// Expect ResourceError for a missing notice
    #[tokio::test]
    async fn fails_for_nonexistent_notice() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_table(entity::prelude::Notice)
            .build()
            .await?;

        let result = NoticeService::new(&test.db).get(1).await;

        assert!(matches!(result, Err(Error::ResourceError(_))));

        Ok(())
    }
}
