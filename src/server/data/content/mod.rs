pub mod bank_account;
pub mod faq;
pub mod notice;
pub mod qna;
