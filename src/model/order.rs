use chrono::NaiveDateTime;
use entity::sea_orm_active_enums::OrderType;
use serde::{Deserialize, Serialize};

use crate::model::assignment::AssignmentDto;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderTypeDto {
    Standard,
    Extension,
}

impl From<OrderType> for OrderTypeDto {
    fn from(value: OrderType) -> Self {
        match value {
            OrderType::Standard => Self::Standard,
            OrderType::Extension => Self::Extension,
        }
    }
}

impl From<OrderTypeDto> for OrderType {
    fn from(value: OrderTypeDto) -> Self {
        match value {
            OrderTypeDto::Standard => Self::Standard,
            OrderTypeDto::Extension => Self::Extension,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct OrderDto {
    pub id: i32,
    pub product_id: i32,
    pub plan_id: i32,
    pub buyer_name: String,
    pub buyer_email: String,
    pub buyer_phone: Option<String>,
    pub depositor_name: String,
    pub amount: i64,
    pub order_type: Option<OrderTypeDto>,
    pub related_order_id: Option<i32>,
    pub payment_status: String,
    pub assignment_status: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<entity::order::Model> for OrderDto {
    fn from(order: entity::order::Model) -> Self {
        Self {
            id: order.id,
            product_id: order.product_id,
            plan_id: order.plan_id,
            buyer_name: order.buyer_name,
            buyer_email: order.buyer_email,
            buyer_phone: order.buyer_phone,
            depositor_name: order.depositor_name,
            amount: order.amount,
            order_type: order.order_type.map(OrderTypeDto::from),
            related_order_id: order.related_order_id,
            payment_status: order.payment_status,
            assignment_status: order.assignment_status,
            created_at: order.created_at,
            updated_at: order.updated_at,
        }
    }
}

/// An order together with its slot assignments and the extensions made to it
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct OrderDetailDto {
    #[serde(flatten)]
    pub order: OrderDto,
    pub assignments: Vec<AssignmentDto>,
    pub extension_order_ids: Vec<i32>,
}

/// Checkout request for a new subscription
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CreateOrderDto {
    pub product_id: i32,
    pub plan_id: i32,
    pub buyer_name: String,
    pub buyer_email: String,
    pub buyer_phone: Option<String>,
    pub depositor_name: String,
}

/// Checkout request extending an existing order
///
/// The product is taken from the original order, the plan must belong to it.
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ExtendOrderDto {
    pub plan_id: i32,
    pub buyer_name: String,
    pub buyer_email: String,
    pub buyer_phone: Option<String>,
    pub depositor_name: String,
}

/// Lets a buyer find their own orders without an account
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct OrderLookupDto {
    pub buyer_email: String,
    pub buyer_name: String,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct OrderFilterParams {
    pub payment_status: Option<String>,
    pub assignment_status: Option<String>,
    pub order_type: Option<OrderTypeDto>,
    pub buyer_email: Option<String>,
}

/// Partial status update
///
/// `status` is accepted from older admin clients and is treated as
/// `assignment_status` when the latter is absent.
#[derive(Clone, Debug, Default, Serialize, Deserialize, utoipa::ToSchema)]
pub struct StatusUpdateDto {
    pub payment_status: Option<String>,
    pub assignment_status: Option<String>,
    pub status: Option<String>,
}

/// Manual classification of an order
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ClassifyOrderDto {
    pub order_type: OrderTypeDto,
    pub related_order_id: Option<i32>,
}
