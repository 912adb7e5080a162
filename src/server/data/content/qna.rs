use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, QueryOrder,
};

use crate::model::content::CreateQnaDto;

pub struct QnaRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> QnaRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, dto: CreateQnaDto) -> Result<entity::qna::Model, DbErr> {
        let qna = entity::qna::ActiveModel {
            author_name: ActiveValue::Set(dto.author_name),
            author_email: ActiveValue::Set(dto.author_email),
            title: ActiveValue::Set(dto.title),
            content: ActiveValue::Set(dto.content),
            answer: ActiveValue::Set(None),
            answered_at: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        qna.insert(self.db).await
    }

    pub async fn get(&self, qna_id: i32) -> Result<Option<entity::qna::Model>, DbErr> {
        entity::prelude::Qna::find_by_id(qna_id).one(self.db).await
    }

    /// Newest questions first
    pub async fn list(&self) -> Result<Vec<entity::qna::Model>, DbErr> {
        entity::prelude::Qna::find()
            .order_by_desc(entity::qna::Column::CreatedAt)
            .order_by_desc(entity::qna::Column::Id)
            .all(self.db)
            .await
    }

    /// Stores an answer and stamps `answered_at`, replacing any earlier answer
    pub async fn answer(
        &self,
        qna_id: i32,
        answer: String,
    ) -> Result<Option<entity::qna::Model>, DbErr> {
        let Some(qna) = self.get(qna_id).await? else {
            return Ok(None);
        };

        let mut qna_am = qna.into_active_model();
        qna_am.answer = ActiveValue::Set(Some(answer));
        qna_am.answered_at = ActiveValue::Set(Some(Utc::now().naive_utc()));

        Ok(Some(qna_am.update(self.db).await?))
    }

    pub async fn delete(&self, qna_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Qna::delete_by_id(qna_id).exec(self.db).await
    }
}

#[cfg(test)]
mod tests {
    use slotshare_test_utils::prelude::*;

    use super::*;

    /// Expect answer and answered_at to be set together
    #[tokio::test]
    async fn answers_question() -> Result<(), TestError> {
        let test = TestBuilder::new().with_table(entity::prelude::Qna).build().await?;
        let question = test.content().insert_question("Can I change plans").await?;

        let answered = QnaRepository::new(&test.db)
            .answer(question.id, "Yes, at renewal".to_string())
            .await?
            .unwrap();

        assert_eq!(answered.answer.as_deref(), Some("Yes, at renewal"));
        assert!(answered.answered_at.is_some());

        Ok(())
    }

    #[tokio::test]
    async fn answer_returns_none_for_nonexistent_question() -> Result<(), TestError> {
        let test = TestBuilder::new().with_table(entity::prelude::Qna).build().await?;

        let result = QnaRepository::new(&test.db)
            .answer(7, "answer".to_string())
            .await;

        assert!(matches!(result, Ok(None)));

        Ok(())
    }
}
