use sea_orm::DatabaseConnection;

use crate::{
    model::content::{AnswerQnaDto, CreateQnaDto, QnaDto},
    server::{
        data::content::qna::QnaRepository,
        error::{resource::ResourceError, Error},
        service::require_text,
    },
};

pub struct QnaService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> QnaService<'a> {
    /// Creates a new instance of [`QnaService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists questions newest first
    pub async fn list(&self) -> Result<Vec<QnaDto>, Error> {
        let questions = QnaRepository::new(self.db).list().await?;

        Ok(questions.into_iter().map(QnaDto::from).collect())
    }

    /// Posts a question from the storefront
    pub async fn ask(&self, dto: CreateQnaDto) -> Result<QnaDto, Error> {
        require_text("author_name", &dto.author_name)?;
        require_text("author_email", &dto.author_email)?;
        require_text("title", &dto.title)?;
        require_text("content", &dto.content)?;

        let question = QnaRepository::new(self.db).create(dto).await?;

        tracing::info!(qna_id = question.id, "Question posted");

        Ok(question.into())
    }

    pub async fn answer(&self, qna_id: i32, dto: AnswerQnaDto) -> Result<QnaDto, Error> {
        require_text("answer", &dto.answer)?;

        let question = QnaRepository::new(self.db)
            .answer(qna_id, dto.answer)
            .await?
            .ok_or_else(|| ResourceError::not_found("Question", qna_id))?;

        Ok(question.into())
    }

    pub async fn delete(&self, qna_id: i32) -> Result<(), Error> {
        let result = QnaRepository::new(self.db).delete(qna_id).await?;

        if result.rows_affected == 0 {
            return Err(ResourceError::not_found("Question", qna_id).into());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use slotshare_test_utils::prelude::*;

    use super::*;

    #[tokio::test]
    async fn answers_question() -> Result<(), TestError> {
        let test = TestBuilder::new().with_table(entity::prelude::Qna).build().await?;
        let question = test.content().insert_question("Family plan").await?;

        let answered = QnaService::new(&test.db)
            .answer(
                question.id,
                AnswerQnaDto {
                    answer: "Up to four members.".to_string(),
                },
            )
            .await
            .unwrap();

        assert_eq!(answered.answer.as_deref(), Some("Up to four members."));
        assert!(answered.answered_at.is_some());

        Ok(())
    }

    /// Expect ResourceError when answering a missing question
    #[tokio::test]
    async fn fails_answer_for_nonexistent_question() -> Result<(), TestError> {
        let test = TestBuilder::new().with_table(entity::prelude::Qna).build().await?;

        let result = QnaService::new(&test.db)
            .answer(
                5,
                AnswerQnaDto {
                    answer: "Yes".to_string(),
                },
            )
            .await;

        assert!(matches!(result, Err(Error::ResourceError(_))));

        Ok(())
    }
}
