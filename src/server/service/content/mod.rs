//! Storefront content: notices, FAQ, Q&A and the bank accounts shown for
//! manual payment.

pub mod bank_account;
pub mod faq;
pub mod notice;
pub mod qna;
