use sea_orm::entity::prelude::*;

/// A shared-credential account whose seats are sold as slots.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "accounts")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub product_id: i32,
    pub login_id: String,
    pub login_password: String,
    /// Number of slots the account can be split into, numbered from 1
    pub max_slots: i32,
    #[sea_orm(column_type = "Text", nullable)]
    pub memo: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::product::Entity",
        from = "Column::ProductId",
        to = "super::product::Column::Id",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    Product,
    #[sea_orm(has_many = "super::order_account::Entity")]
    OrderAccount,
}

impl Related<super::product::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Product.def()
    }
}

impl Related<super::order_account::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OrderAccount.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
