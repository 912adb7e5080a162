use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct AssignmentDto {
    pub id: i32,
    pub account_id: i32,
    pub slot_number: i32,
    pub order_id: i32,
    pub is_active: bool,
    pub assigned_at: NaiveDateTime,
}

impl From<entity::order_account::Model> for AssignmentDto {
    fn from(assignment: entity::order_account::Model) -> Self {
        Self {
            id: assignment.id,
            account_id: assignment.account_id,
            slot_number: assignment.slot_number,
            order_id: assignment.order_id,
            is_active: assignment.is_active,
            assigned_at: assignment.assigned_at,
        }
    }
}

/// Request to assign an order to a slot of an account
///
/// When `slot_number` is omitted the lowest free slot is used.
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct AssignSlotDto {
    pub order_id: i32,
    pub account_id: i32,
    pub slot_number: Option<i32>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct AssignmentFilterParams {
    pub account_id: Option<i32>,
    pub order_id: Option<i32>,
    pub is_active: Option<bool>,
}

/// Occupancy of a single slot of an account
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct SlotDto {
    pub slot_number: i32,
    /// Active assignments holding this slot, more than one indicates a conflict
    pub assignments: Vec<AssignmentDto>,
}

/// Two or more active assignments holding the same slot
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct SlotConflictDto {
    pub account_id: i32,
    pub slot_number: i32,
    pub assignments: Vec<AssignmentDto>,
}
