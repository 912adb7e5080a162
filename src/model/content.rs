use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct NoticeDto {
    pub id: i32,
    pub title: String,
    pub content: String,
    pub is_pinned: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<entity::notice::Model> for NoticeDto {
    fn from(notice: entity::notice::Model) -> Self {
        Self {
            id: notice.id,
            title: notice.title,
            content: notice.content,
            is_pinned: notice.is_pinned,
            created_at: notice.created_at,
            updated_at: notice.updated_at,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CreateNoticeDto {
    pub title: String,
    pub content: String,
    pub is_pinned: Option<bool>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UpdateNoticeDto {
    pub title: Option<String>,
    pub content: Option<String>,
    pub is_pinned: Option<bool>,
}

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct FaqDto {
    pub id: i32,
    pub question: String,
    pub answer: String,
    pub sort_order: i32,
    pub created_at: NaiveDateTime,
}

impl From<entity::faq::Model> for FaqDto {
    fn from(faq: entity::faq::Model) -> Self {
        Self {
            id: faq.id,
            question: faq.question,
            answer: faq.answer,
            sort_order: faq.sort_order,
            created_at: faq.created_at,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CreateFaqDto {
    pub question: String,
    pub answer: String,
    pub sort_order: Option<i32>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UpdateFaqDto {
    pub question: Option<String>,
    pub answer: Option<String>,
    pub sort_order: Option<i32>,
}

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct QnaDto {
    pub id: i32,
    pub author_name: String,
    pub title: String,
    pub content: String,
    pub answer: Option<String>,
    pub answered_at: Option<NaiveDateTime>,
    pub created_at: NaiveDateTime,
}

// Author email is deliberately left out of the public listing
impl From<entity::qna::Model> for QnaDto {
    fn from(qna: entity::qna::Model) -> Self {
        Self {
            id: qna.id,
            author_name: qna.author_name,
            title: qna.title,
            content: qna.content,
            answer: qna.answer,
            answered_at: qna.answered_at,
            created_at: qna.created_at,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CreateQnaDto {
    pub author_name: String,
    pub author_email: String,
    pub title: String,
    pub content: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct AnswerQnaDto {
    pub answer: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct BankAccountDto {
    pub id: i32,
    pub bank_name: String,
    pub account_number: String,
    pub holder_name: String,
    pub is_active: bool,
}

impl From<entity::bank_account::Model> for BankAccountDto {
    fn from(bank_account: entity::bank_account::Model) -> Self {
        Self {
            id: bank_account.id,
            bank_name: bank_account.bank_name,
            account_number: bank_account.account_number,
            holder_name: bank_account.holder_name,
            is_active: bank_account.is_active,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CreateBankAccountDto {
    pub bank_name: String,
    pub account_number: String,
    pub holder_name: String,
    pub is_active: Option<bool>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UpdateBankAccountDto {
    pub bank_name: Option<String>,
    pub account_number: Option<String>,
    pub holder_name: Option<String>,
    pub is_active: Option<bool>,
}
