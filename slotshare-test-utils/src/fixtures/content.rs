use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn content(&self) -> ContentFixtures<'_> {
        ContentFixtures { test: self }
    }
}

pub struct ContentFixtures<'a> {
    test: &'a TestContext,
}

impl<'a> ContentFixtures<'a> {
    pub async fn insert_notice(
        &self,
        title: &str,
        is_pinned: bool,
    ) -> Result<entity::notice::Model, TestError> {
        Ok(entity::prelude::Notice::insert(entity::notice::ActiveModel {
            title: ActiveValue::Set(title.to_string()),
            content: ActiveValue::Set(format!("{} content", title)),
            is_pinned: ActiveValue::Set(is_pinned),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        })
        .exec_with_returning(&self.test.db)
        .await?)
    }

    pub async fn insert_faq(
        &self,
        question: &str,
        sort_order: i32,
    ) -> Result<entity::faq::Model, TestError> {
        Ok(entity::prelude::Faq::insert(entity::faq::ActiveModel {
            question: ActiveValue::Set(question.to_string()),
            answer: ActiveValue::Set(format!("Answer to {}", question)),
            sort_order: ActiveValue::Set(sort_order),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        })
        .exec_with_returning(&self.test.db)
        .await?)
    }

    pub async fn insert_question(&self, title: &str) -> Result<entity::qna::Model, TestError> {
        Ok(entity::prelude::Qna::insert(entity::qna::ActiveModel {
            author_name: ActiveValue::Set("Curious Buyer".to_string()),
            author_email: ActiveValue::Set("curious@example.com".to_string()),
            title: ActiveValue::Set(title.to_string()),
            content: ActiveValue::Set(format!("{}?", title)),
            answer: ActiveValue::Set(None),
            answered_at: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        })
        .exec_with_returning(&self.test.db)
        .await?)
    }

    pub async fn insert_bank_account(
        &self,
        bank_name: &str,
        is_active: bool,
    ) -> Result<entity::bank_account::Model, TestError> {
        Ok(
            entity::prelude::BankAccount::insert(entity::bank_account::ActiveModel {
                bank_name: ActiveValue::Set(bank_name.to_string()),
                account_number: ActiveValue::Set("110-123-456789".to_string()),
                holder_name: ActiveValue::Set("Slotshare".to_string()),
                is_active: ActiveValue::Set(is_active),
                ..Default::default()
            })
            .exec_with_returning(&self.test.db)
            .await?,
        )
    }
}
