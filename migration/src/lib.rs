pub use sea_orm_migration::prelude::*;

mod m20251101_000001_product;
mod m20251101_000002_product_plan;
mod m20251101_000003_account;
mod m20251101_000004_order;
mod m20251101_000005_order_account;
mod m20251101_000006_content;
mod m20251101_000007_bank_account;
mod m20251101_000008_profile;
mod m20251101_000009_verification_code;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251101_000001_product::Migration),
            Box::new(m20251101_000002_product_plan::Migration),
            Box::new(m20251101_000003_account::Migration),
            Box::new(m20251101_000004_order::Migration),
            Box::new(m20251101_000005_order_account::Migration),
            Box::new(m20251101_000006_content::Migration),
            Box::new(m20251101_000007_bank_account::Migration),
            Box::new(m20251101_000008_profile::Migration),
            Box::new(m20251101_000009_verification_code::Migration),
        ]
    }
}
