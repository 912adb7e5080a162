//! Factory functions for in-memory models.
//!
//! Produce entity models with standard test values without touching the
//! database, for unit tests of pure functions.

use chrono::Utc;
use entity::sea_orm_active_enums::OrderType;

/// Create an order model with the given classification.
pub fn mock_order_model(
    id: i32,
    order_type: Option<OrderType>,
    related_order_id: Option<i32>,
) -> entity::order::Model {
    let now = Utc::now().naive_utc();

    entity::order::Model {
        id,
        product_id: 1,
        plan_id: 1,
        buyer_name: "Test Buyer".to_string(),
        buyer_email: "buyer@example.com".to_string(),
        buyer_phone: None,
        depositor_name: "Test Buyer".to_string(),
        amount: 9_900,
        order_type,
        related_order_id,
        payment_status: "PENDING".to_string(),
        assignment_status: "UNASSIGNED".to_string(),
        created_at: now,
        updated_at: now,
    }
}

/// Create an active assignment model.
pub fn mock_assignment_model(
    id: i32,
    account_id: i32,
    slot_number: i32,
    order_id: i32,
) -> entity::order_account::Model {
    entity::order_account::Model {
        id,
        account_id,
        slot_number,
        order_id,
        is_active: true,
        assigned_at: Utc::now().naive_utc(),
    }
}
