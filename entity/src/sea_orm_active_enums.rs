use sea_orm::entity::prelude::*;

/// Classification of an order.
///
/// Legacy rows predating classification carry no value at all, which is why
/// the column is nullable rather than defaulting to [`OrderType::Standard`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum OrderType {
    #[sea_orm(string_value = "STANDARD")]
    Standard,
    /// Extends the duration of the order referenced by `related_order_id`.
    #[sea_orm(string_value = "EXTENSION")]
    Extension,
}
