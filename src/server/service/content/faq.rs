use sea_orm::DatabaseConnection;

use crate::{
    model::content::{CreateFaqDto, FaqDto, UpdateFaqDto},
    server::{
        data::content::faq::FaqRepository,
        error::{resource::ResourceError, Error},
        service::require_text,
    },
};

pub struct FaqService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FaqService<'a> {
    /// Creates a new instance of [`FaqService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(&self) -> Result<Vec<FaqDto>, Error> {
        let faqs = FaqRepository::new(self.db).list().await?;

        Ok(faqs.into_iter().map(FaqDto::from).collect())
    }

    pub async fn create(&self, dto: CreateFaqDto) -> Result<FaqDto, Error> {
        require_text("question", &dto.question)?;
        require_text("answer", &dto.answer)?;

        let faq = FaqRepository::new(self.db).create(dto).await?;

        Ok(faq.into())
    }

    pub async fn update(&self, faq_id: i32, dto: UpdateFaqDto) -> Result<FaqDto, Error> {
        let faq = FaqRepository::new(self.db)
            .update(faq_id, dto)
            .await?
            .ok_or_else(|| ResourceError::not_found("FAQ", faq_id))?;

        Ok(faq.into())
    }

    pub async fn delete(&self, faq_id: i32) -> Result<(), Error> {
        let result = FaqRepository::new(self.db).delete(faq_id).await?;

        if result.rows_affected == 0 {
            return Err(ResourceError::not_found("FAQ", faq_id).into());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use slotshare_test_utils::prelude::*;

    use super::*;

    #[tokio::test]
    async fn lists_by_sort_order() -> Result<(), TestError> {
        let test = TestBuilder::new().with_table(entity::prelude::Faq).build().await?;
        test.content().insert_faq("Refunds", 2).await?;
        test.content().insert_faq("Sharing", 1).await?;

        let faqs = FaqService::new(&test.db).list().await.unwrap();

        let questions: Vec<_> = faqs.iter().map(|faq| faq.question.as_str()).collect();
        assert_eq!(questions, vec!["Sharing", "Refunds"]);

        Ok(())
    }

    #[tokio::test]
    async fn rejects_blank_answer() -> Result<(), TestError> {
        let test = TestBuilder::new().with_table(entity::prelude::Faq).build().await?;

        let result = FaqService::new(&test.db)
            .create(CreateFaqDto {
                question: "Can I share?".to_string(),
                answer: "  ".to_string(),
                sort_order: None,
            })
            .await;

        assert!(matches!(result, Err(Error::RequestError(_))));

        Ok(())
    }
}
