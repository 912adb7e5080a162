pub use super::account::Entity as Account;
pub use super::bank_account::Entity as BankAccount;
pub use super::faq::Entity as Faq;
pub use super::notice::Entity as Notice;
pub use super::order::Entity as Order;
pub use super::order_account::Entity as OrderAccount;
pub use super::product::Entity as Product;
pub use super::product_plan::Entity as ProductPlan;
pub use super::profile::Entity as Profile;
pub use super::qna::Entity as Qna;
pub use super::verification_code::Entity as VerificationCode;
