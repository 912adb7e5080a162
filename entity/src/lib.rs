//! `SeaORM` entities for the slotshare schema.

pub mod prelude;

pub mod account;
pub mod bank_account;
pub mod faq;
pub mod notice;
pub mod order;
pub mod order_account;
pub mod product;
pub mod product_plan;
pub mod profile;
pub mod qna;
pub mod sea_orm_active_enums;
pub mod verification_code;
