use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, QueryOrder,
};

use crate::model::content::{CreateNoticeDto, UpdateNoticeDto};

pub struct NoticeRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> NoticeRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, dto: CreateNoticeDto) -> Result<entity::notice::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let notice = entity::notice::ActiveModel {
            title: ActiveValue::Set(dto.title),
            content: ActiveValue::Set(dto.content),
            is_pinned: ActiveValue::Set(dto.is_pinned.unwrap_or(false)),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        notice.insert(self.db).await
    }

    pub async fn get(&self, notice_id: i32) -> Result<Option<entity::notice::Model>, DbErr> {
        entity::prelude::Notice::find_by_id(notice_id)
            .one(self.db)
            .await
    }

    /// Pinned notices first, then newest first
    pub async fn list(&self) -> Result<Vec<entity::notice::Model>, DbErr> {
        entity::prelude::Notice::find()
            .order_by_desc(entity::notice::Column::IsPinned)
            .order_by_desc(entity::notice::Column::CreatedAt)
            .order_by_desc(entity::notice::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn update(
        &self,
        notice_id: i32,
        dto: UpdateNoticeDto,
    ) -> Result<Option<entity::notice::Model>, DbErr> {
        let Some(notice) = self.get(notice_id).await? else {
            return Ok(None);
        };

        let mut notice_am = notice.into_active_model();
        if let Some(title) = dto.title {
            notice_am.title = ActiveValue::Set(title);
        }
        if let Some(content) = dto.content {
            notice_am.content = ActiveValue::Set(content);
        }
        if let Some(is_pinned) = dto.is_pinned {
            notice_am.is_pinned = ActiveValue::Set(is_pinned);
        }
        notice_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        Ok(Some(notice_am.update(self.db).await?))
    }

    pub async fn delete(&self, notice_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Notice::delete_by_id(notice_id)
            .exec(self.db)
            .await
    }
}

#[cfg(test)]
mod tests {
    use slotshare_test_utils::prelude::*;

    use super::*;

    /// Expect pinned notices ahead of newer unpinned ones
    #[tokio::test]
    async fn lists_pinned_first() -> Result<(), TestError> {
        let test = TestBuilder::new().with_table(entity::prelude::Notice).build().await?;
        let pinned = test.content().insert_notice("Maintenance", true).await?;
        let older = test.content().insert_notice("Welcome", false).await?;
        let newer = test.content().insert_notice("New plans", false).await?;

        let ids: Vec<i32> = NoticeRepository::new(&test.db)
            .list()
            .await?
            .into_iter()
            .map(|n| n.id)
            .collect();

        assert_eq!(ids, vec![pinned.id, newer.id, older.id]);

        Ok(())
    }

    /// Expect Ok(None) when updating a notice that does not exist
    #[tokio::test]
    async fn update_returns_none_for_nonexistent_notice() -> Result<(), TestError> {
        let test = TestBuilder::new().with_table(entity::prelude::Notice).build().await?;

        let result = NoticeRepository::new(&test.db)
            .update(1, UpdateNoticeDto::default())
            .await;

        assert!(matches!(result, Ok(None)));

        Ok(())
    }
}
