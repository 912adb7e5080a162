use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, QueryOrder,
};

use crate::model::content::{CreateFaqDto, UpdateFaqDto};

pub struct FaqRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FaqRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, dto: CreateFaqDto) -> Result<entity::faq::Model, DbErr> {
        let faq = entity::faq::ActiveModel {
            question: ActiveValue::Set(dto.question),
            answer: ActiveValue::Set(dto.answer),
            sort_order: ActiveValue::Set(dto.sort_order.unwrap_or(0)),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        faq.insert(self.db).await
    }

    pub async fn get(&self, faq_id: i32) -> Result<Option<entity::faq::Model>, DbErr> {
        entity::prelude::Faq::find_by_id(faq_id).one(self.db).await
    }

    pub async fn list(&self) -> Result<Vec<entity::faq::Model>, DbErr> {
        entity::prelude::Faq::find()
            .order_by_asc(entity::faq::Column::SortOrder)
            .order_by_asc(entity::faq::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn update(
        &self,
        faq_id: i32,
        dto: UpdateFaqDto,
    ) -> Result<Option<entity::faq::Model>, DbErr> {
        let Some(faq) = self.get(faq_id).await? else {
            return Ok(None);
        };

        let mut faq_am = faq.clone().into_active_model();
        if let Some(question) = dto.question {
            faq_am.question = ActiveValue::Set(question);
        }
        if let Some(answer) = dto.answer {
            faq_am.answer = ActiveValue::Set(answer);
        }
        if let Some(sort_order) = dto.sort_order {
            faq_am.sort_order = ActiveValue::Set(sort_order);
        }

        if !faq_am.is_changed() {
            return Ok(Some(faq));
        }

        Ok(Some(faq_am.update(self.db).await?))
    }

    pub async fn delete(&self, faq_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Faq::delete_by_id(faq_id).exec(self.db).await
    }
}
