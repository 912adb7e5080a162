use sea_orm::entity::prelude::*;

use crate::sea_orm_active_enums::OrderType;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "orders")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub product_id: i32,
    pub plan_id: i32,
    pub buyer_name: String,
    pub buyer_email: String,
    pub buyer_phone: Option<String>,
    pub depositor_name: String,
    pub amount: i64,
    /// `None` for rows created before orders were classified
    pub order_type: Option<OrderType>,
    /// Original order extended by this one, only set for extensions
    pub related_order_id: Option<i32>,
    pub payment_status: String,
    pub assignment_status: String,
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
    #[sea_orm(
        belongs_to = "super::product_plan::Entity",
        from = "Column::PlanId",
        to = "super::product_plan::Column::Id",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    ProductPlan,
    // Deleting an original order leaves its extensions orphaned rather than
    // blocking; orphans are surfaced by the integrity audit.
    #[sea_orm(
        belongs_to = "Entity",
        from = "Column::RelatedOrderId",
        to = "Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    OriginalOrder,
    #[sea_orm(has_many = "super::order_account::Entity")]
    OrderAccount,
}

impl Related<super::product::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Product.def()
    }
}

impl Related<super::product_plan::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProductPlan.def()
    }
}

impl Related<super::order_account::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OrderAccount.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
